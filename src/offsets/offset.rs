use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A position in some coordinate space over a document.
pub trait Offset: Copy + Ord + Hash + fmt::Debug + fmt::Display {
    fn from_usize(value: usize) -> Self;

    fn as_usize(self) -> usize;

    /// Moves this offset by `delta` units, or `None` if the result would be
    /// negative or overflow.
    fn shifted(self, delta: isize) -> Option<Self> {
        let value = self.as_usize();
        let moved = if delta >= 0 {
            value.checked_add(delta as usize)
        } else {
            value.checked_sub(delta.unsigned_abs())
        };
        moved.map(Self::from_usize)
    }
}

macro_rules! define_offset {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            pub const fn new(value: usize) -> Self {
                $name(value)
            }

            pub const fn value(self) -> usize {
                self.0
            }
        }

        impl Offset for $name {
            fn from_usize(value: usize) -> Self {
                $name(value)
            }

            fn as_usize(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                $name(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_offset!(
    /// Offset counted in Unicode scalar values.
    CharOffset
);

define_offset!(
    /// Offset counted in UTF-8 bytes.
    ByteOffset
);

define_offset!(
    /// Character offset with markup (tags, entities) skipped, as used by
    /// ACE/ERE annotation files.
    EdtOffset
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_is_checked() {
        let offset = CharOffset::new(3);

        assert_eq!(offset.shifted(2), Some(CharOffset::new(5)));
        assert_eq!(offset.shifted(-3), Some(CharOffset::new(0)));
        assert_eq!(offset.shifted(-4), None);
        assert_eq!(CharOffset::new(usize::MAX).shifted(1), None);
    }

    #[test]
    fn offsets_order_by_value() {
        assert!(ByteOffset::new(1) < ByteOffset::new(2));
        assert_eq!(EdtOffset::from(7).value(), 7);
        assert_eq!(CharOffset::new(12).to_string(), "12");
    }
}
