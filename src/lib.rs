#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Shared value types for layered-nlp crates.
//!
//! ## Core Types
//!
//! - [`Symbol`] - Interned, cheaply comparable string handle
//! - [`OffsetRange`] - Half-open range over a typed offset ([`CharOffset`], [`ByteOffset`], [`EdtOffset`])
//! - [`AnnotatedOffsetRange`] - A typed, attributed span of text
//! - [`CommonError`] - The `InvalidArgument` error raised by fallible constructors
//!
//! ## Example
//!
//! ```
//! use layered_common::{AnnotatedOffsetRange, OffsetRange, Symbol};
//!
//! let person = AnnotatedOffsetRange::create(
//!     Symbol::from("PER"),
//!     OffsetRange::char_range(0, 4).unwrap(),
//! );
//! assert_eq!(person.to_string(), "[PER: [0,4)]");
//! ```

mod errors;
pub mod offsets;
mod symbol;
pub mod symbol_utils;

pub use errors::{CommonError, CommonResult};
pub use offsets::{
    ranges_of, AnnotatedOffsetRange, AnnotatedOffsetRangeBuilder, ByteOffset, CharOffset,
    EdtOffset, Offset, OffsetRange,
};
pub use symbol::Symbol;
pub use symbol_utils::{
    compare_by_string, list_from, lowercase, map_from, set_from, to_string_set, try_list_from,
    try_map_from, try_set_from, try_to_string_set,
};
