use std::cell::RefCell;

use crate::event::{EditorEvent, EventHandler};

/// A simple event bus for broadcasting editor events to registered handlers
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
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers, in subscription order.
    ///
    /// Handlers must not subscribe or emit from inside `handle_event`.
    pub fn emit(&self, event: EditorEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_emit_reaches_every_handler() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for _ in 0..2 {
            let seen = Arc::clone(&seen);
            bus.subscribe(Box::new(move |event: &EditorEvent| {
                seen.lock().unwrap().push(*event);
            }));
        }
        bus.emit(EditorEvent::ShapeAdded { id: 0 });

        assert_eq!(bus.handler_count(), 2);
        assert_eq!(*seen.lock().unwrap(), vec![EditorEvent::ShapeAdded { id: 0 }; 2]);
    }
}
