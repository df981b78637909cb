//! Message watching: attach a viewer to a stream of messages.
//!
//! [`MessageHub`] stands in for a chat client's event emitter. Attaching a
//! viewer returns a [`Subscription`]; hand it back to the hub to detach.

use std::fmt;

use tracing::debug;

use crate::parser::ShapeBuilder;
use crate::render::TileRenderer;
use crate::viewer::{Attachment, Message, Viewer};

/// Callback invoked for each dispatched message.
pub type Handler = Box<dyn FnMut(&Message) -> Option<Attachment>>;

/// Handle for an attached handler.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a Subscription leaves the handler attached with no way to detach it"]
pub struct Subscription {
    id: u64,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// In-process message fan-out.
#[derive(Default)]
pub struct MessageHub {
    handlers: Vec<(u64, Handler)>,
    next_id: u64,
}

impl fmt::Debug for MessageHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageHub")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl MessageHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler.
    pub fn subscribe(&mut self, handler: Handler) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, handler));
        debug!(id, "handler subscribed");
        Subscription { id }
    }

    /// Remove a handler. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(id, _)| *id != subscription.id);
        debug!(id = subscription.id, "handler unsubscribed");
        self.handlers.len() != before
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Deliver a message to every handler, in subscription order, and
    /// collect the attachments they produce.
    pub fn dispatch(&mut self, message: &Message) -> Vec<Attachment> {
        self.handlers
            .iter_mut()
            .filter_map(|(_, handler)| handler(message))
            .collect()
    }
}

/// Attach a viewer in passive mode.
pub fn attach<B, R>(hub: &mut MessageHub, viewer: Viewer<B, R>) -> Subscription
where
    B: ShapeBuilder + 'static,
    R: TileRenderer<B::Descriptor> + 'static,
{
    hub.subscribe(Box::new(move |message: &Message| viewer.watch(message)))
}
