use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of a scene element.
///
/// Two elements with identical geometry are still distinct objects, so identity
/// is never derived from geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The first block is enough to tell elements apart in logs and panels
        let text = self.0.simple().to_string();
        write!(f, "{}", &text[..8])
    }
}

pub fn generate_id() -> ElementId {
    ElementId(Uuid::new_v4())
}
