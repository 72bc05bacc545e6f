mod central_panel;
mod command_panel;
mod properties_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use command_panel::command_panel;
pub use properties_panel::{properties_panel, properties_text};
pub use tools_panel::tools_panel;
