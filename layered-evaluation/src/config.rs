//! Alignment display configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`AlignmentDisplay`](crate::AlignmentDisplay).
///
/// Missing fields take their default when deserialized, so a config file
/// only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentDisplayConfig {
    /// Render unaligned items against the absent glyph
    pub show_unaligned: bool,
    /// Placed between a left item and a right item it aligns to
    pub link_glyph: String,
    /// Stands in for the missing side of an unaligned item
    pub absent_glyph: String,
}

impl Default for AlignmentDisplayConfig {
    fn default() -> Self {
        Self {
            show_unaligned: true,
            link_glyph: "─".to_string(),
            absent_glyph: "∅".to_string(),
        }
    }
}

impl AlignmentDisplayConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config that renders only the links.
    pub fn links_only() -> Self {
        Self {
            show_unaligned: false,
            ..Default::default()
        }
    }

    pub fn with_unaligned(mut self, show: bool) -> Self {
        self.show_unaligned = show;
        self
    }

    pub fn with_link_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.link_glyph = glyph.into();
        self
    }

    pub fn with_absent_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.absent_glyph = glyph.into();
        self
    }
}
