use log::{error, info};

use super::{Command, CommandContext, CommandError, CommandResult};

/// A recorded edit: what reverts it and what replays it
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub undo: Command,
    pub redo: Command,
}

impl HistoryEntry {
    pub fn new(undo: Command, redo: Command) -> Self {
        Self { undo, redo }
    }
}

/// Manages command history for undo/redo operations
#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an already executed edit. Any redo tail is discarded.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);
        self.redo_stack.clear();
    }

    /// Run a command and record it with its inverse if it succeeded
    pub fn execute(&mut self, command: Command, ctx: &mut CommandContext<'_>) -> CommandResult {
        command.execute(ctx)?;
        info!("History: recorded {} ({})", command.name(), command.element_id());
        self.push(HistoryEntry::new(command.inverse(), command));
        Ok(())
    }

    /// Revert the most recent edit.
    ///
    /// Returns `Ok(false)` when there is nothing to undo. On failure the
    /// entry stays on the undo stack.
    pub fn undo(&mut self, ctx: &mut CommandContext<'_>) -> Result<bool, CommandError> {
        let Some(entry) = self.undo_stack.pop() else {
            return Ok(false);
        };

        if let Err(e) = entry.undo.execute(ctx) {
            error!("History: undo of {} failed: {}", entry.redo.name(), e);
            self.undo_stack.push(entry);
            return Err(e);
        }

        info!("History: undid {}", entry.redo.name());
        self.redo_stack.push(entry);
        Ok(true)
    }

    /// Replay the most recently undone edit.
    ///
    /// Returns `Ok(false)` when there is nothing to redo. On failure the
    /// entry stays on the redo stack.
    pub fn redo(&mut self, ctx: &mut CommandContext<'_>) -> Result<bool, CommandError> {
        let Some(entry) = self.redo_stack.pop() else {
            return Ok(false);
        };

        if let Err(e) = entry.redo.execute(ctx) {
            error!("History: redo of {} failed: {}", entry.redo.name(), e);
            self.redo_stack.push(entry);
            return Err(e);
        }

        info!("History: redid {}", entry.redo.name());
        self.undo_stack.push(entry);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
