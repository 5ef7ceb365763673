//! Presentation colors. Hosts may ship a theme as JSON.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    /// Outline of unselected shapes.
    pub stroke: String,
    /// Outline of selected shapes.
    pub selected_stroke: String,
    /// Hex alpha appended to a selected shape's fill color.
    pub selected_fill_alpha: String,
    pub handle_fill: String,
    pub handle_stroke: String,
    pub marquee_stroke: String,
    pub marquee_fill: String,
    /// Dash and gap length of the marquee outline.
    pub marquee_dash: f64,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            stroke: "#000000".to_string(),
            selected_stroke: "#FF0000".to_string(),
            selected_fill_alpha: "99".to_string(),
            handle_fill: "#FFFFFF".to_string(),
            handle_stroke: "#0066FF".to_string(),
            marquee_stroke: "#0066FF".to_string(),
            marquee_fill: "rgba(0, 102, 255, 0.08)".to_string(),
            marquee_dash: 5.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#1C1C1E".to_string(),
            stroke: "#E5E5EA".to_string(),
            selected_stroke: "#FF453A".to_string(),
            selected_fill_alpha: "99".to_string(),
            handle_fill: "#1C1C1E".to_string(),
            handle_stroke: "#4FC3F7".to_string(),
            marquee_stroke: "#4FC3F7".to_string(),
            marquee_fill: "rgba(79, 195, 247, 0.08)".to_string(),
            marquee_dash: 5.0,
        }
    }

    /// Fill color for a shape. Selected shapes get the translucent variant
    /// when their color is a 6-digit hex.
    pub fn fill_for(&self, color: &str, selected: bool) -> String {
        let is_hex6 = color.len() == 7
            && color.starts_with('#')
            && color[1..].bytes().all(|b| b.is_ascii_hexdigit());
        if selected && is_hex6 {
            format!("{color}{}", self.selected_fill_alpha)
        } else {
            color.to_string()
        }
    }

    pub fn stroke_for(&self, selected: bool) -> (&str, f64) {
        if selected {
            (self.selected_stroke.as_str(), 2.0)
        } else {
            (self.stroke.as_str(), 1.0)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
