//! tidewatch-admin - label and query administration

use tidewatch_admin::ui::AdminApp;

fn main() -> iced::Result {
    env_logger::init();
    log::info!("Starting tidewatch-admin");

    iced::application(AdminApp::new, AdminApp::update, AdminApp::view)
        .title(AdminApp::title)
        .window_size(iced::Size::new(1100.0, 750.0))
        .subscription(AdminApp::subscription)
        .theme(AdminApp::theme)
        .run()
}
