//! Interned string handles.
//!
//! A [`Symbol`] is an immutable string that is cheap to clone, hash and
//! compare. Every distinct string is stored once in a process-wide table,
//! so symbols built from equal strings share one allocation.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Entries are never removed.
static INTERNER: Lazy<Mutex<HashSet<Arc<str>>>> = Lazy::new(|| Mutex::new(HashSet::new()));

fn intern(text: &str) -> Arc<str> {
    // The table is insert-only, so a poisoned lock still guards a valid set.
    let mut table = INTERNER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(existing) = table.get(text) {
        return Arc::clone(existing);
    }
    let interned: Arc<str> = Arc::from(text);
    table.insert(Arc::clone(&interned));
    interned
}

/// An interned, immutable string.
///
/// Equality, hashing and ordering are defined by the underlying string, so
/// two symbols built from equal strings are interchangeable.
///
/// ```
/// use layered_common::Symbol;
///
/// let a = Symbol::from("PER");
/// let b = Symbol::from(String::from("PER"));
/// assert_eq!(a, b);
/// assert!(Symbol::ptr_eq(&a, &b));
/// ```
#[derive(Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(text: &str) -> Self {
        Symbol(intern(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if both handles point at the same interned string.
    pub fn ptr_eq(a: &Symbol, b: &Symbol) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Symbol::new(text)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Self {
        Symbol::new(&text)
    }
}

impl From<&String> for Symbol {
    fn from(text: &String) -> Self {
        Symbol::new(text)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Symbol::ptr_eq(self, other) || self.as_str() == other.as_str()
    }
}

impl Eq for Symbol {}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// Must agree with `str`'s hash because of the `Borrow<str>` impl below.
impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Symbol").field(&self.as_str()).finish()
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Symbol::from(text))
    }
}
