//! Modal Configuration

use serde::{Deserialize, Serialize};

/// Stacking index of every portal container. Each portal forms its own
/// stacking context at this same level; it is not meant to be tuned.
pub const PORTAL_Z_INDEX: i32 = 1;

/// Modal configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// ID of the application root hidden from assistive technology
    pub root_id: String,

    /// ID shared by the title heading and `aria-labelledby`
    pub title_id: String,

    /// ID shared by the description paragraph and `aria-describedby`
    pub description_id: String,

    /// Accessible label of the close button
    pub close_label: String,

    /// Visible text of the close button
    pub close_text: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            root_id: "root".to_string(),
            title_id: "title".to_string(),
            description_id: "description".to_string(),
            close_label: "Close dialog".to_string(),
            close_text: "X".to_string(),
        }
    }
}
