mod bus;
mod events;

pub use bus::EventBus;
pub use events::EditorEvent;

/// Receives every event emitted on an [`EventBus`]
pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &EditorEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&EditorEvent) + Send,
{
    fn handle_event(&mut self, event: &EditorEvent) {
        self(event);
    }
}
