use eframe::egui::{self, Response, Sense, Ui, Widget};

const BUTTON_SIZE: f32 = 32.0;
const GLYPH_SIZE: f32 = 20.0;

/// Square toolbar button for one tool, drawn with the theme's selectable style
pub struct ToolButton {
    tool_name: &'static str,
    selected: bool,
}

impl ToolButton {
    pub fn new(tool_name: &'static str, selected: bool) -> Self {
        Self { tool_name, selected }
    }

    pub fn glyph(&self) -> &'static str {
        match self.tool_name {
            "WALL" => "▬",
            "WINDOW" => "▭",
            "DOOR" => "◜",
            "SWITCH" => "◇",
            "OUTLET" => "⊡",
            "LINE" => "╱",
            "RECTANGLE" => "□",
            "CIRCLE" => "○",
            _ => "?",
        }
    }

    fn hover_text(&self) -> String {
        let mut name = self.tool_name.to_lowercase();
        if let Some(first) = name.get_mut(..1) {
            first.make_ascii_uppercase();
        }
        if self.selected {
            format!("{} (click again to stop)", name)
        } else {
            name
        }
    }
}

impl Widget for ToolButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE), Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.selected);
            let painter = ui.painter();
            painter.rect(rect, visuals.rounding, visuals.weak_bg_fill, visuals.bg_stroke);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.glyph(),
                egui::FontId::proportional(GLYPH_SIZE),
                visuals.text_color(),
            );
        }

        let hover_text = self.hover_text();
        response.on_hover_text(hover_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::TOOL_NAMES;

    #[test]
    fn test_every_tool_has_a_glyph() {
        for name in TOOL_NAMES {
            assert_ne!(ToolButton::new(name, false).glyph(), "?", "{}", name);
        }
    }

    #[test]
    fn test_hover_text_names_the_tool() {
        assert_eq!(ToolButton::new("RECTANGLE", false).hover_text(), "Rectangle");
        assert_eq!(
            ToolButton::new("WALL", true).hover_text(),
            "Wall (click again to stop)"
        );
    }
}
