//! Bridges a tokio channel into an iced subscription
//!
//! Async work (store thunks) dispatches actions through an
//! `UnboundedSender`; the app drains the matching receiver here.
//!
//! ```ignore
//! fn subscription(&self) -> Subscription<Message> {
//!     channel_subscription(self.actions.clone()).map(Message::Dispatch)
//! }
//! ```

use std::any::TypeId;
use std::hash::Hash;
use std::sync::Arc;

use iced::advanced::subscription::{self, EventStream, Hasher, Recipe};
use iced::futures::stream::BoxStream;
use iced::Subscription;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Mutex;

struct ChannelRecipe<T> {
    /// Address of the shared receiver, stable for the app's lifetime
    id: usize,
    receiver: Arc<Mutex<UnboundedReceiver<T>>>,
}

impl<T: Send + 'static> Recipe for ChannelRecipe<T> {
    type Output = T;

    fn hash(&self, state: &mut Hasher) {
        TypeId::of::<Self>().hash(state);
        self.id.hash(state);
    }

    fn stream(self: Box<Self>, _input: EventStream) -> BoxStream<'static, Self::Output> {
        Box::pin(iced::futures::stream::unfold(self.receiver, |rx| async move {
            let item = {
                let mut guard = rx.lock().await;
                guard.recv().await
            }?;
            Some((item, rx))
        }))
    }
}

/// Subscription yielding every value sent on the channel
///
/// The stream ends once all senders are dropped.
pub fn channel_subscription<T>(receiver: Arc<Mutex<UnboundedReceiver<T>>>) -> Subscription<T>
where
    T: Send + 'static,
{
    let id = Arc::as_ptr(&receiver) as usize;
    subscription::from_recipe(ChannelRecipe { id, receiver })
}
