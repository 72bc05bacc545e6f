use log::info;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, CommandResult};
use crate::element::{Element, ElementType};
use crate::event::{EditorEvent, SceneEvent};
use crate::id_generator::ElementId;

/// Reversible scene edits recorded in the history.
///
/// Both variants carry a full snapshot of the element, so replay never
/// depends on the element still being reachable elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Put the element into the scene and select it
    InsertElement { element: ElementType },

    /// Deselect the element if needed and take it out of the scene
    RemoveElement { element: ElementType },
}

impl Command {
    pub fn insert(element: ElementType) -> Self {
        Command::InsertElement { element }
    }

    pub fn remove(element: ElementType) -> Self {
        Command::RemoveElement { element }
    }

    /// Identity of the element this command affects
    pub fn element_id(&self) -> ElementId {
        match self {
            Command::InsertElement { element } | Command::RemoveElement { element } => element.id(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::InsertElement { .. } => "InsertElement",
            Command::RemoveElement { .. } => "RemoveElement",
        }
    }

    /// Execute the command with the given context.
    ///
    /// Preconditions are checked before anything is touched, so a failed
    /// command leaves scene and selection as they were.
    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        match self {
            Command::InsertElement { element } => {
                let id = element.id();
                if ctx.scene.contains(id) {
                    return Err(CommandError::DuplicateElement(id));
                }
                ctx.scene.add(element.clone());
                ctx.events.emit(EditorEvent::SceneChanged(SceneEvent::Added(id)));
                ctx.selection.select(ctx.scene, ctx.events, Some(id));
                info!("Inserted {} {}", element.element_type(), id);
                Ok(())
            }

            Command::RemoveElement { element } => {
                let id = element.id();
                if !ctx.scene.contains(id) {
                    return Err(CommandError::ElementNotFound(id));
                }
                if ctx.selection.is_selected(id) {
                    ctx.selection.select(ctx.scene, ctx.events, None);
                }
                ctx.scene.remove(id);
                ctx.events.emit(EditorEvent::SceneChanged(SceneEvent::Removed(id)));
                info!("Removed {} {}", element.element_type(), id);
                Ok(())
            }
        }
    }

    /// The command that reverts this one
    pub fn inverse(&self) -> Command {
        match self {
            Command::InsertElement { element } => Command::RemoveElement {
                element: element.clone(),
            },
            Command::RemoveElement { element } => Command::InsertElement {
                element: element.clone(),
            },
        }
    }
}
