//! Alignment contracts for layered-nlp scoring.
//!
//! Scoring compares a *left* collection (usually gold annotations) with a
//! *right* collection (usually system output). An aligner decides which
//! items correspond; scorers then only query the resulting [`Alignment`].
//!
//! ## Core Types
//!
//! - [`Alignment`] - Read-only, many-to-many pairing of two sets
//! - [`MultimapAlignment`] - Alignment built from an explicit list of links
//! - [`ProvenancedAlignment`] / [`ProvenancedAligner`] - Alignments over derived
//!   items that keep the objects they were derived from
//! - [`EquivalenceAligner`] - Aligns items that map to the same key
//! - [`AlignmentDisplay`] - Row-per-link rendering for logs and snapshots
//!
//! ## Example
//!
//! ```
//! use layered_evaluation::{Alignment, AlignmentDisplay, MultimapAlignment};
//!
//! let alignment = MultimapAlignment::new(
//!     vec!["A", "B", "C"],
//!     vec!["X", "Y"],
//!     vec![("A", "X"), ("B", "X"), ("B", "Y")],
//! )
//! .unwrap();
//!
//! assert_eq!(alignment.left_aligned(), &["A", "B"]);
//! assert_eq!(AlignmentDisplay::new(&alignment).to_string(), "A ─ X\nB ─ X\nB ─ Y\nC ─ ∅");
//! ```

mod alignment;
mod config;
mod display;
mod equivalence;
mod multimap;
mod provenanced;

pub use alignment::Alignment;
pub use config::AlignmentDisplayConfig;
pub use display::AlignmentDisplay;
pub use equivalence::EquivalenceAligner;
pub use multimap::MultimapAlignment;
pub use provenanced::{MultimapProvenancedAlignment, ProvenancedAligner, ProvenancedAlignment};
