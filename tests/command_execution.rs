use eframe_floorplan::command::{Command, CommandContext, CommandError, CommandHistory, HistoryEntry};
use eframe_floorplan::element::{factory, Element};
use eframe_floorplan::error::EditorError;
use eframe_floorplan::event::EventBus;
use eframe_floorplan::scene::Scene;
use eframe_floorplan::selection::SelectionManager;
use eframe_floorplan::state::EditorContext;
use egui::pos2;

fn sample_wall(offset: f32) -> eframe_floorplan::element::ElementType {
    factory::create_wall(pos2(0.0, offset), pos2(100.0, offset), 24.0)
}

#[test]
fn test_insert_adds_and_selects() {
    let mut editor = EditorContext::default();
    let wall = sample_wall(0.0);
    let id = wall.id();

    editor.execute(Command::insert(wall)).unwrap();

    assert!(editor.scene.contains(id));
    assert_eq!(editor.selection.current(), Some(id));
    assert_eq!(editor.history.undo_len(), 1);
}

#[test]
fn test_creations_then_undos_restore_scene() {
    let mut editor = EditorContext::default();
    let before = editor.scene.ids();

    for i in 0..5 {
        editor.execute(Command::insert(sample_wall(i as f32 * 50.0))).unwrap();
    }
    assert_eq!(editor.scene.len(), 5);

    for _ in 0..5 {
        assert!(editor.undo().unwrap());
    }

    assert_eq!(editor.scene.ids(), before);
    assert!(!editor.history.can_undo());
    assert_eq!(editor.history.redo_len(), 5);
    assert_eq!(editor.selection.current(), None);
    // Nothing left to undo
    assert!(!editor.undo().unwrap());
}

#[test]
fn test_redo_reinserts_identical_snapshot() {
    let mut editor = EditorContext::default();
    let wall = sample_wall(0.0);
    let id = wall.id();
    editor.execute(Command::insert(wall)).unwrap();
    editor.select(None);
    let committed = editor.scene.get(id).cloned().unwrap();

    editor.undo().unwrap();
    assert!(!editor.scene.contains(id));
    editor.redo().unwrap();

    assert_eq!(editor.selection.current(), Some(id));
    editor.select(None);
    assert_eq!(editor.scene.get(id), Some(&committed));
}

#[test]
fn test_push_after_undo_clears_redo() {
    let mut editor = EditorContext::default();
    editor.execute(Command::insert(sample_wall(0.0))).unwrap();
    editor.undo().unwrap();
    assert!(editor.history.can_redo());

    editor.execute(Command::insert(sample_wall(50.0))).unwrap();
    assert!(!editor.history.can_redo());

    let len = editor.scene.len();
    assert!(!editor.redo().unwrap());
    assert_eq!(editor.scene.len(), len);
}

#[test]
fn test_failed_undo_keeps_entry() {
    let mut editor = EditorContext::default();
    let wall = sample_wall(0.0);
    let id = wall.id();
    editor.execute(Command::insert(wall)).unwrap();

    // Pull the element out behind the history's back
    editor.select(None);
    editor.scene.remove(id);

    let err = editor.undo().unwrap_err();
    assert_eq!(err, EditorError::Undo(CommandError::ElementNotFound(id)));
    assert_eq!(editor.history.undo_len(), 1);
    assert_eq!(editor.history.redo_len(), 0);
}

#[test]
fn test_delete_selected_and_undo() {
    let mut editor = EditorContext::default();
    let wall = sample_wall(0.0);
    let id = wall.id();
    let normal_style = *wall.style();
    editor.execute(Command::insert(wall)).unwrap();

    assert!(editor.delete_selected().unwrap());
    assert!(!editor.scene.contains(id));
    assert_eq!(editor.selection.current(), None);
    assert_eq!(editor.history.undo_len(), 2);

    editor.undo().unwrap();
    assert!(editor.scene.contains(id));
    assert_eq!(editor.selection.current(), Some(id));

    editor.select(None);
    assert_eq!(*editor.scene.get(id).unwrap().style(), normal_style);
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut editor = EditorContext::default();
    editor.execute(Command::insert(sample_wall(0.0))).unwrap();
    editor.select(None);

    assert!(!editor.delete_selected().unwrap());
    assert_eq!(editor.scene.len(), 1);
    assert_eq!(editor.history.undo_len(), 1);
}

#[test]
fn test_duplicate_insert_is_rejected() {
    let mut editor = EditorContext::default();
    let wall = sample_wall(0.0);
    let id = wall.id();
    editor.execute(Command::insert(wall.clone())).unwrap();

    let err = editor.execute(Command::insert(wall)).unwrap_err();
    assert_eq!(err, EditorError::Command(CommandError::DuplicateElement(id)));
    assert_eq!(editor.scene.len(), 1);
    assert_eq!(editor.history.undo_len(), 1);
}

#[test]
fn test_history_with_explicit_context() {
    let mut scene = Scene::new();
    let mut selection = SelectionManager::new();
    let events = EventBus::new();
    let mut history = CommandHistory::new();

    let line = factory::create_line(pos2(0.0, 0.0), pos2(10.0, 0.0));
    let insert = Command::insert(line.clone());
    {
        let mut ctx = CommandContext::new(&mut scene, &mut selection, &events);
        insert.execute(&mut ctx).unwrap();
    }
    history.push(HistoryEntry::new(insert.inverse(), insert.clone()));

    let mut ctx = CommandContext::new(&mut scene, &mut selection, &events);
    assert!(history.undo(&mut ctx).unwrap());
    assert!(ctx.scene.is_empty());
    assert!(history.redo(&mut ctx).unwrap());
    assert!(ctx.scene.contains(line.id()));
}

#[test]
fn test_command_records_serialize() {
    let wall = sample_wall(0.0);
    let command = Command::insert(wall.clone());
    let json = serde_json::to_value(&command).unwrap();

    assert!(json.get("InsertElement").is_some());
    assert!(json["InsertElement"]["element"].get("Wall").is_some());

    let back: Command = serde_json::from_value(json).unwrap();
    assert_eq!(back, command);
    assert_eq!(command.inverse(), Command::remove(wall));
}
