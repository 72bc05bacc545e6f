use std::collections::VecDeque;
use std::sync::Arc;

use log::{debug, error, info, warn};
use parking_lot::Mutex;

use crate::event::{EditorEvent, EventHandler, Notification, Severity};

/// Mirrors editor events into the log
#[derive(Debug, Default)]
pub struct LoggingHandler;

impl EventHandler for LoggingHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::Notification(n) => match n.severity {
                Severity::Info => info!("{}: {}", n.title, n.message),
                Severity::Warning => warn!("{}: {}", n.title, n.message),
                Severity::Error => error!("{}: {}", n.title, n.message),
            },
            other => debug!("event: {:?}", other),
        }
    }
}

/// Collects notifications so the shell can show them to the user
#[derive(Debug, Clone, Default)]
pub struct NotificationSink {
    queue: Arc<Mutex<VecDeque<Notification>>>,
}

impl NotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler feeding this sink, to be subscribed on an event bus
    pub fn handler(&self) -> Box<dyn EventHandler> {
        Box::new(self.clone())
    }

    /// Take everything received since the last drain
    pub fn drain(&self) -> Vec<Notification> {
        self.queue.lock().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

impl EventHandler for NotificationSink {
    fn handle_event(&mut self, event: &EditorEvent) {
        if let EditorEvent::Notification(n) = event {
            self.queue.lock().push_back(n.clone());
        }
    }
}
