use crate::PlanApp;
use crate::element::{Element, ElementType};

fn point(p: egui::Pos2) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}

/// Human-readable description of the selected element
pub fn properties_text(element: Option<&ElementType>) -> String {
    let Some(element) = element else {
        return "No selection".to_string();
    };

    let mut lines = vec![format!("Type: {}", element.element_type())];
    match element {
        ElementType::Wall(wall) => {
            lines.push(format!("Start: {}  End: {}", point(wall.start()), point(wall.end())));
            lines.push(format!("Length: {:.2}", wall.centerline().length()));
            lines.push(format!("Thickness: {:.2}", wall.thickness()));
        }
        ElementType::Window(window) => {
            lines.push(format!("Start: {}  End: {}", point(window.start()), point(window.end())));
            lines.push(format!("Thickness: {:.2}", window.thickness()));
        }
        ElementType::Door(door) => {
            lines.push(format!("Start: {}  End: {}", point(door.start()), point(door.end())));
            lines.push(format!("Swing radius: {:.2}", door.swing_radius()));
        }
        ElementType::Attachment(attachment) => {
            lines.push(format!("Position: {}", point(attachment.position())));
            lines.push(format!("Rotation: {:.2}°", attachment.angle().to_degrees()));
        }
        ElementType::Line(line) => {
            lines.push(format!("Start: {}  End: {}", point(line.start()), point(line.end())));
            lines.push(format!("Length: {:.2}", line.length()));
        }
        ElementType::Rectangle(rect) => {
            lines.push(format!("Corner: {}", point(rect.rect().min)));
            lines.push(format!("Width: {:.2}  Height: {:.2}", rect.width(), rect.height()));
        }
        ElementType::Circle(circle) => {
            lines.push(format!("Center: {}", point(circle.center())));
            lines.push(format!("Radius: {:.2}", circle.radius()));
        }
    }
    lines.join("\n")
}

pub fn properties_panel(app: &mut PlanApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Properties");
            ui.separator();
            ui.label(properties_text(app.editor.selected_element()));
            ui.separator();
            ui.label(format!(
                "Undo: {}  Redo: {}",
                app.editor.history.undo_len(),
                app.editor.history.redo_len()
            ));
        });
}
