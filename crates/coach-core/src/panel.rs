//! Panel view state types.

use serde::{Deserialize, Serialize};

/// The active view of a coaching panel.
///
/// Owned by the panel controller and passed by handle to rendering; never
/// stored as module-level mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelView {
    /// The generated recommendation batch is shown.
    #[default]
    Recommendations,
    /// The coaching conversation is shown.
    Chat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_recommendations() {
        assert_eq!(PanelView::default(), PanelView::Recommendations);
    }

    #[test]
    fn test_snake_case_wire_form() {
        assert_eq!(serde_json::to_string(&PanelView::Chat).unwrap(), "\"chat\"");
    }
}
