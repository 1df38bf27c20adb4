//! Store dispatcher used by async tasks
//!
//! Thunks run on iced's executor and cannot touch `AppState` directly; they
//! send actions over this channel and the app reduces them as they arrive
//! through `channel_subscription`.

use std::sync::Arc;

use tidewatch_core::store::{Action, Dispatch};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;

/// Receiving half, shared with the subscription
pub type ActionReceiver = Arc<Mutex<UnboundedReceiver<Action>>>;

#[derive(Debug, Clone)]
pub struct ChannelDispatch {
    sender: UnboundedSender<Action>,
}

impl ChannelDispatch {
    pub fn channel() -> (Self, ActionReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, Arc::new(Mutex::new(receiver)))
    }
}

impl Dispatch for ChannelDispatch {
    fn dispatch(&mut self, action: Action) {
        if self.sender.send(action).is_err() {
            log::warn!("Dropping action, the application has shut down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewatch_core::store::labels::remove_label;

    #[test]
    fn test_actions_arrive_in_order() {
        let (mut dispatch, receiver) = ChannelDispatch::channel();
        dispatch.dispatch(remove_label("1"));
        dispatch.dispatch(remove_label("2"));

        let mut receiver = receiver.try_lock().unwrap();
        assert_eq!(receiver.try_recv().unwrap(), remove_label("1"));
        assert_eq!(receiver.try_recv().unwrap(), remove_label("2"));
    }
}
