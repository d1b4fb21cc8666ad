//! Typed offsets and labeled ranges over them.
//!
//! Offsets are newtypes so that character and byte coordinates cannot be
//! mixed by accident. Conversion between coordinate systems lives with the
//! tokenizers that know the underlying text.

mod annotated;
mod offset;
mod range;

pub use annotated::{ranges_of, AnnotatedOffsetRange, AnnotatedOffsetRangeBuilder};
pub use offset::{ByteOffset, CharOffset, EdtOffset, Offset};
pub use range::OffsetRange;
