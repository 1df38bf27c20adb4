//! Main application state and composition root
//!
//! `AdminApp` owns the store, the clients and every screen's state. Screens
//! are plain view functions: they receive the slice of state they render and
//! produce `Message`s; handlers in `super::handlers` turn those into store
//! actions and async tasks.

use std::future::Future;
use std::time::{Duration, Instant};

use iced::widget::{button, column, container, row, text, Space, Stack};
use iced::{time, Element, Length, Subscription, Task, Theme};
use tidewatch_core::client::{SharedBucketsClient, SharedLabelsClient};
use tidewatch_core::store::AppState;
use tidewatch_widgets::{channel_subscription, error_boundary};

use super::message::Message;
use super::state::{LabelsScreen, VariableForm, View};
use super::{labels, notifications, query_builder, variables};
use crate::config::{self, Config};
use crate::dispatch::{ActionReceiver, ChannelDispatch};

/// Tick interval while something on screen is time-driven
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Main application
pub struct AdminApp {
    pub(crate) current_view: View,
    /// Canonical client-side state
    pub(crate) store: AppState,
    pub(crate) labels_client: SharedLabelsClient,
    pub(crate) buckets_client: SharedBucketsClient,
    /// Handed to async tasks; actions come back through `actions`
    pub(crate) dispatcher: ChannelDispatch,
    actions: ActionReceiver,
    pub(crate) config: Config,
    pub(crate) labels: LabelsScreen,
    pub(crate) variable_form: VariableForm,
}

impl AdminApp {
    /// Create the application from the config on disk and start loading data
    pub fn new() -> (Self, Task<Message>) {
        let config_path = config::default_config_path();
        let config = config::load_config(&config_path);

        let app = Self::with_config(config, Instant::now());
        let task = Task::batch([app.fetch_labels(), app.fetch_buckets()]);

        (app, task)
    }

    pub fn with_config(config: Config, now: Instant) -> Self {
        let (labels_client, buckets_client) = config.api.clients();
        let (dispatcher, actions) = ChannelDispatch::channel();
        let hide_delay = config.overlay.hide_delay();

        Self {
            current_view: View::default(),
            store: AppState::default(),
            labels_client,
            buckets_client,
            dispatcher,
            actions,
            config,
            labels: LabelsScreen::new(hide_delay, now),
            variable_form: VariableForm::default(),
        }
    }

    pub fn title(&self) -> String {
        String::from("tidewatch - Admin")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SwitchView(view) => {
                self.current_view = view;
                Task::none()
            }

            Message::Dispatch(action) => self.handle_dispatch(action),
            Message::TaskFinished(name) => {
                log::debug!("{} finished", name);
                Task::none()
            }
            Message::Tick(now) => self.handle_tick(now),

            Message::RefreshLabels => self.fetch_labels(),
            Message::LabelsFilterChanged(term) => {
                self.labels.search_term = term;
                Task::none()
            }
            Message::ShowCreateLabel => self.handle_show_create_label(Instant::now()),
            Message::DismissCreateLabel => self.handle_dismiss_create_label(Instant::now()),
            Message::CreateLabelField(field, value) => self.handle_create_label_field(field, value),
            Message::SubmitCreateLabel => self.handle_submit_create_label(Instant::now()),
            Message::StartEditLabel(id) => self.handle_start_edit_label(&id, Instant::now()),
            Message::DismissEditLabel => self.handle_dismiss_edit_label(Instant::now()),
            Message::EditLabelField(field, value) => self.handle_edit_label_field(field, value),
            Message::SubmitEditLabel => self.handle_submit_edit_label(Instant::now()),
            Message::DeleteLabel(id) => self.handle_delete_label(id),

            Message::RefreshBuckets => self.fetch_buckets(),
            Message::SelectBucket(bucket) => self.handle_select_bucket(bucket),

            Message::ShowCreateVariable => self.handle_show_create_variable(),
            Message::DismissCreateVariable => self.handle_dismiss_create_variable(),
            Message::VariableNameChanged(name) => self.handle_variable_name(name),
            Message::VariableScriptChanged(script) => self.handle_variable_script(script),
            Message::SubmitVariable => self.handle_submit_variable(),

            Message::DismissNotification(id) => self.handle_dismiss_notification(id),
        }
    }

    /// Run a store thunk on the executor
    pub(crate) fn run_thunk<F>(name: &'static str, thunk: F) -> Task<Message>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Task::perform(thunk, move |()| Message::TaskFinished(name))
    }

    /// Whether anything on screen needs the frame tick
    pub(crate) fn needs_tick(&self) -> bool {
        self.labels.has_pending_hide() || !self.store.notifications.is_empty()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        let header = self.view_header();

        let content: Element<'_, Message> = match self.current_view {
            View::Labels => error_boundary("LabelsScreen", || {
                labels::view(&self.store.labels, &self.labels.search_term)
            }),
            View::QueryBuilder => error_boundary("QueryBuilder", || {
                query_builder::view(&self.store.query_builder, &self.store.variables)
            }),
        };

        let base: Element<'_, Message> = container(column![header, content].spacing(10))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into();

        let mut layers = vec![base];
        layers.extend(labels::create_overlay::view(
            &self.labels.create,
            &self.store.labels.list,
            now,
        ));
        layers.extend(labels::update_overlay::view(
            &self.labels.edit,
            &self.store.labels.list,
            now,
        ));
        if self.variable_form.is_open() {
            layers.push(error_boundary("CreateVariableOverlay", || {
                variables::view(&self.variable_form)
            }));
        }
        if !self.store.notifications.is_empty() {
            layers.push(notifications::view(&self.store.notifications.list));
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Dispatch channel, plus the frame tick while it is needed
    pub fn subscription(&self) -> Subscription<Message> {
        let actions = channel_subscription(self.actions.clone()).map(Message::Dispatch);

        if self.needs_tick() {
            Subscription::batch([actions, time::every(TICK_INTERVAL).map(Message::Tick)])
        } else {
            actions
        }
    }

    fn view_header(&self) -> Element<'_, Message> {
        let tab = |label: &'static str, view: View| {
            button(text(label))
                .on_press(Message::SwitchView(view))
                .style(if self.current_view == view {
                    button::primary
                } else {
                    button::secondary
                })
        };

        row![
            text("tidewatch").size(24),
            Space::new().width(Length::Fill),
            tab("Labels", View::Labels),
            tab("Query Builder", View::QueryBuilder),
        ]
        .spacing(10)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Backend;
    use tidewatch_core::labels::{Label, LabelField, LabelProperties};
    use tidewatch_core::store::labels::{edit_label, remove_label, set_labels};
    use tidewatch_core::store::notifications::{notify, NotificationKind};
    use tidewatch_core::RemoteDataState;

    fn app() -> (AdminApp, Instant) {
        let mut config = Config::default();
        config.api.backend = Backend::Memory;
        let now = Instant::now();
        let mut app = AdminApp::with_config(config, now);
        let labels = vec![
            Label::new("1", "prod", LabelProperties::new("Production", "#326BBA")),
            Label::new("2", "dev", LabelProperties::new("Development", "#22ADF6")),
        ];
        let _ = app.update(Message::Dispatch(set_labels(RemoteDataState::Done, Some(labels))));
        (app, now)
    }

    #[test]
    fn test_tick_only_while_needed() {
        let (mut app, now) = app();
        assert!(!app.needs_tick());

        let _ = app.handle_start_edit_label("1", now);
        assert!(!app.needs_tick());

        let _ = app.handle_dismiss_edit_label(now);
        assert!(app.needs_tick());

        let _ = app.handle_tick(now + Duration::from_secs(1));
        assert!(!app.needs_tick());
        assert!(app.labels.edit.draft.is_none());
    }

    #[test]
    fn test_notifications_expire_on_tick() {
        let (mut app, _) = app();
        let _ = app.update(Message::Dispatch(notify(NotificationKind::UpdateLabelFailed)));
        assert!(app.needs_tick());

        let _ = app.handle_tick(Instant::now() + Duration::from_secs(11));
        assert!(app.store.notifications.is_empty());
    }

    #[test]
    fn test_store_change_replaces_open_draft() {
        let (mut app, now) = app();
        let _ = app.handle_start_edit_label("1", now);
        let _ = app.update(Message::EditLabelField(LabelField::Description, "Edited".into()));

        let changed = Label::new("1", "prod", LabelProperties::new("Changed elsewhere", "#000000"));
        let _ = app.update(Message::Dispatch(edit_label(changed.clone())));

        let draft = app.labels.edit.draft.as_ref().unwrap();
        assert_eq!(draft.label(), &changed);
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_removed_label_closes_edit_overlay() {
        let (mut app, now) = app();
        let _ = app.handle_start_edit_label("2", now);
        let _ = app.update(Message::Dispatch(remove_label("2")));
        assert!(!app.labels.edit.is_open());
    }

    #[test]
    fn test_invalid_create_is_not_submitted() {
        let (mut app, now) = app();
        let _ = app.handle_show_create_label(now);
        let _ = app.update(Message::CreateLabelField(LabelField::Name, "PROD".into()));
        let _ = app.handle_submit_create_label(now);

        // Duplicate name: the form stays open
        assert!(app.labels.create.is_open());
    }

    #[test]
    fn test_cleared_color_disables_create_submit() {
        let (mut app, now) = app();
        let _ = app.handle_show_create_label(now);
        let _ = app.update(Message::CreateLabelField(LabelField::Name, "fresh".into()));
        {
            let draft = app.labels.create.draft.as_ref().unwrap();
            assert!(labels::create_overlay::submit_enabled(draft, &app.store.labels.list));
        }

        let _ = app.update(Message::CreateLabelField(LabelField::Color, String::new()));
        let draft = app.labels.create.draft.as_ref().unwrap();
        assert!(!labels::create_overlay::submit_enabled(draft, &app.store.labels.list));

        let _ = app.handle_submit_create_label(now);
        assert!(app.labels.create.is_open());
    }

    #[test]
    fn test_cleared_color_disables_edit_submit() {
        let (mut app, now) = app();
        let _ = app.handle_start_edit_label("1", now);
        {
            // Keeping its own name is fine
            let draft = app.labels.edit.draft.as_ref().unwrap();
            assert!(labels::update_overlay::submit_enabled(draft, &app.store.labels.list));
        }

        let _ = app.update(Message::EditLabelField(LabelField::Color, "  ".into()));
        let draft = app.labels.edit.draft.as_ref().unwrap();
        assert!(!labels::update_overlay::submit_enabled(draft, &app.store.labels.list));

        let _ = app.handle_submit_edit_label(now);
        assert!(app.labels.edit.is_open());
    }

    #[test]
    fn test_edit_submit_closes_optimistically() {
        let (mut app, now) = app();
        let _ = app.handle_start_edit_label("1", now);
        let _ = app.update(Message::EditLabelField(LabelField::Color, "#FFB94A".into()));
        let _ = app.handle_submit_edit_label(now);

        assert!(!app.labels.edit.is_open());
        // Store only changes once the update settles
        assert_eq!(app.store.labels.get("1").unwrap().properties.color, "#326BBA");
    }
}
