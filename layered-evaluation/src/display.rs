use std::fmt::{self, Display, Write};

use unicode_width::UnicodeWidthStr;

use crate::{Alignment, AlignmentDisplayConfig};

/// Renders an [`Alignment`] as one row per link, for logs and snapshot
/// tests.
///
/// ```text
/// A ─ X
/// B ─ X
/// B ─ Y
/// C ─ ∅
/// ```
///
/// Left items come in left-set order with their links in link order, then
/// unaligned left items, then unaligned right items. The left column is
/// padded to the widest left label by terminal display width.
pub struct AlignmentDisplay<'a, L, R> {
    alignment: &'a (dyn Alignment<L, R> + 'a),
    config: AlignmentDisplayConfig,
}

impl<'a, L, R> AlignmentDisplay<'a, L, R> {
    pub fn new<A: Alignment<L, R>>(alignment: &'a A) -> Self {
        AlignmentDisplay {
            alignment,
            config: AlignmentDisplayConfig::default(),
        }
    }

    /// Takes self
    pub fn with_config(mut self, config: AlignmentDisplayConfig) -> Self {
        self.config = config;
        self
    }
}

impl<'a, L: Display, R: Display> AlignmentDisplay<'a, L, R> {
    fn rows(&self) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        for left in self.alignment.left_aligned() {
            for right in self.alignment.aligned_to_left_item(left) {
                rows.push((left.to_string(), right.to_string()));
            }
        }
        if self.config.show_unaligned {
            for left in self.alignment.left_unaligned() {
                rows.push((left.to_string(), self.config.absent_glyph.clone()));
            }
            for right in self.alignment.right_unaligned() {
                rows.push((self.config.absent_glyph.clone(), right.to_string()));
            }
        }
        rows
    }
}

impl<'a, L: Display, R: Display> fmt::Display for AlignmentDisplay<'a, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let left_width = rows
            .iter()
            .map(|(left, _)| UnicodeWidthStr::width(left.as_str()))
            .max()
            .unwrap_or(0);

        for (idx, (left, right)) in rows.iter().enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            f.write_str(left)?;
            for _ in UnicodeWidthStr::width(left.as_str())..left_width {
                f.write_char(' ')?;
            }
            write!(f, " {} {}", self.config.link_glyph, right)?;
        }

        Ok(())
    }
}
