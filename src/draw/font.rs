//! Font descriptor for watermark text rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name, weight, and style.
/// Resolved through Pango, so any installed system family can be referenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "DejaVu Serif")
    #[serde(default = "default_family")]
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    #[serde(default = "default_weight")]
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_style")]
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: default_family(),
            weight: default_weight(),
            style: default_style(),
        }
    }
}

impl FontDescriptor {
    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans 20" or "Serif Italic Bold 24"
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.style));
        }

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", size.round() as i32));
        parts.join(" ")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn default_family() -> String {
    "Sans".to_string()
}

fn default_weight() -> String {
    "normal".to_string()
}

fn default_style() -> String {
    "normal".to_string()
}
