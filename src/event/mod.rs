mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::{EditorEvent, Notification, SceneEvent, SelectionEvent, Severity};
pub use handlers::{LoggingHandler, NotificationSink};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &EditorEvent);
}
