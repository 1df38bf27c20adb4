//! Error boundary for view functions
//!
//! Wrap a screen's view at composition time. A panic while building the
//! element tree is logged and replaced by a fallback so the rest of the
//! application keeps working.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use iced::widget::{container, text};
use iced::{Element, Length};

use crate::theme::ERROR_TEXT;

pub fn error_boundary<'a, Message, F>(component: &str, render: F) -> Element<'a, Message>
where
    Message: 'a,
    F: FnOnce() -> Element<'a, Message>,
{
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(element) => element,
        Err(payload) => {
            log::error!("{} failed to render: {}", component, panic_message(payload.as_ref()));
            container(text(fallback_text(component)).color(ERROR_TEXT))
                .padding(20)
                .width(Length::Fill)
                .into()
        }
    }
}

fn fallback_text(component: &str) -> String {
    format!("{} has encountered an error and could not be displayed", component)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("unknown panic")
    }
}
