use crate::id_generator::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// User-facing message raised by the editor core
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ToolChanged {
        old: Option<&'static str>,
        new: Option<&'static str>,
    },
    SelectionChanged(SelectionEvent),
    SceneChanged(SceneEvent),
    HistoryChanged {
        can_undo: bool,
        can_redo: bool,
    },
    Notification(Notification),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionEvent {
    Selected(ElementId),
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    Added(ElementId),
    Removed(ElementId),
}
