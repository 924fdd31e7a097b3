use std::cell::RefCell;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::event::{EventHandler, SessionEvent};

/// A simple event bus for broadcasting session events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Subscribe a channel that receives every event in emission order.
    /// Dropping the receiver is fine; the bus keeps going.
    pub fn subscribe_channel(&self) -> UnboundedReceiver<SessionEvent> {
        let (sender, receiver) = mpsc::unbounded();
        self.subscribe(Box::new(ChannelHandler { sender }));
        receiver
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: SessionEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

struct ChannelHandler {
    sender: UnboundedSender<SessionEvent>,
}

impl EventHandler for ChannelHandler {
    fn handle_event(&mut self, event: &SessionEvent) {
        if self.sender.unbounded_send(event.clone()).is_err() {
            log::trace!("Event channel closed, dropping {:?}", event);
        }
    }
}
