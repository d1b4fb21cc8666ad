//! Helpers for converting between strings and [`Symbol`]s.
//!
//! The plain conversions take iterators of anything string-like and cannot
//! fail. The `try_` variants accept `Option` elements for inputs that may
//! contain holes (for example, columns read from a sparse table) and reject
//! the whole input with [`CommonError::InvalidArgument`] at the first hole.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::{CommonError, CommonResult, Symbol};

/// Compares two possibly-absent symbols by their strings.
///
/// An absent symbol sorts before every present symbol, and two absent
/// symbols are equal.
///
/// ```
/// use std::cmp::Ordering;
/// use layered_common::{compare_by_string, Symbol};
///
/// let a = Symbol::from("a");
/// assert_eq!(compare_by_string(None, Some(&a)), Ordering::Less);
/// assert_eq!(compare_by_string(None, None), Ordering::Equal);
/// ```
pub fn compare_by_string(a: Option<&Symbol>, b: Option<&Symbol>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.as_str().cmp(b.as_str()),
    }
}

/// The symbol for the lowercased string of `symbol`.
///
/// Uses the Unicode default lowercase mapping with no locale tailoring, so
/// `"İ"` lowercases the same way everywhere.
pub fn lowercase(symbol: &Symbol) -> Symbol {
    Symbol::from(symbol.as_str().to_lowercase())
}

/// Symbolizes every string, dropping duplicates.
pub fn set_from<I, S>(strings: I) -> BTreeSet<Symbol>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .map(|s| Symbol::new(s.as_ref()))
        .collect()
}

/// Symbolizes every string, keeping input order and duplicates.
pub fn list_from<I, S>(strings: I) -> Vec<Symbol>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .map(|s| Symbol::new(s.as_ref()))
        .collect()
}

/// The set of strings behind some symbols.
pub fn to_string_set<'a, I>(symbols: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Symbol>,
{
    symbols.into_iter().map(|s| s.as_str().to_string()).collect()
}

/// Symbolizes both sides of every entry.
///
/// If the same key appears more than once the last value wins; maps built
/// from a `HashMap` or `BTreeMap` never hit that case.
pub fn map_from<I, K, V>(entries: I) -> BTreeMap<Symbol, Symbol>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(k, v)| (Symbol::new(k.as_ref()), Symbol::new(v.as_ref())))
        .collect()
}

fn absent(what: &str, idx: usize) -> CommonError {
    CommonError::invalid_argument(format!("{} at position {} is absent", what, idx))
}

fn require<S: AsRef<str>>(value: Option<S>, what: &str, idx: usize) -> CommonResult<Symbol> {
    value
        .map(|s| Symbol::new(s.as_ref()))
        .ok_or_else(|| absent(what, idx))
}

/// Like [`set_from`], but fails if any element is absent.
pub fn try_set_from<I, S>(strings: I) -> CommonResult<BTreeSet<Symbol>>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .enumerate()
        .map(|(idx, s)| require(s, "string", idx))
        .collect()
}

/// Like [`list_from`], but fails if any element is absent.
pub fn try_list_from<I, S>(strings: I) -> CommonResult<Vec<Symbol>>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .enumerate()
        .map(|(idx, s)| require(s, "string", idx))
        .collect()
}

/// Like [`to_string_set`], but fails if any symbol is absent.
pub fn try_to_string_set<'a, I>(symbols: I) -> CommonResult<BTreeSet<String>>
where
    I: IntoIterator<Item = Option<&'a Symbol>>,
{
    symbols
        .into_iter()
        .enumerate()
        .map(|(idx, s)| {
            s.map(|sym| sym.as_str().to_string())
                .ok_or_else(|| absent("symbol", idx))
        })
        .collect()
}

/// Like [`map_from`], but fails if any key or value is absent, or if a key
/// repeats.
pub fn try_map_from<I, K, V>(entries: I) -> CommonResult<BTreeMap<Symbol, Symbol>>
where
    I: IntoIterator<Item = (Option<K>, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut ret = BTreeMap::new();
    for (idx, (k, v)) in entries.into_iter().enumerate() {
        let key = require(k, "key", idx)?;
        let value = require(v, "value", idx)?;
        if ret.contains_key(&key) {
            return Err(CommonError::invalid_argument(format!(
                "duplicate key {:?} at position {}",
                key.as_str(),
                idx
            )));
        }
        ret.insert(key, value);
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn absent_sorts_first() {
        let a = Symbol::from("a");
        let b = Symbol::from("b");

        assert_eq!(compare_by_string(None, Some(&a)), Ordering::Less);
        assert_eq!(compare_by_string(Some(&a), None), Ordering::Greater);
        assert_eq!(compare_by_string(None, None), Ordering::Equal);
        assert_eq!(compare_by_string(Some(&a), Some(&b)), Ordering::Less);
        assert_eq!(compare_by_string(Some(&b), Some(&b)), Ordering::Equal);
    }

    #[test]
    fn sorting_with_absent_values() {
        let b = Symbol::from("b");
        let a = Symbol::from("a");
        let mut items = vec![Some(&b), None, Some(&a), None];
        items.sort_by(|x, y| compare_by_string(*x, *y));

        let rendered: Vec<Option<&str>> = items.iter().map(|s| s.map(Symbol::as_str)).collect();
        assert_eq!(rendered, vec![None, None, Some("a"), Some("b")]);
    }

    #[test]
    fn lowercase_symbol() {
        assert_eq!(lowercase(&Symbol::from("PER")), Symbol::from("per"));
        assert_eq!(lowercase(&Symbol::from("Straße")), Symbol::from("straße"));
        assert_eq!(lowercase(&Symbol::from("ÉCOLE")), Symbol::from("école"));
    }

    #[test]
    fn list_keeps_order_and_duplicates() {
        let list = list_from(vec!["b", "a", "b"]);
        assert_eq!(list, vec![Symbol::from("b"), Symbol::from("a"), Symbol::from("b")]);
    }

    #[test]
    fn set_drops_duplicates() {
        let set = set_from(vec!["b", "a", "b"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn string_set_round_trip() {
        let symbols = set_from(vec!["x", "y", "z"]);
        let strings = to_string_set(&symbols);
        let round_tripped = to_string_set(&list_from(&strings));

        assert_eq!(round_tripped, strings);
    }

    #[test]
    fn map_from_hash_map() {
        let mut source = HashMap::new();
        source.insert("PER".to_string(), "person".to_string());
        source.insert("ORG".to_string(), "organization".to_string());

        let map = map_from(&source);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("PER"), Some(&Symbol::from("person")));
    }

    #[test]
    fn try_variants_reject_absent_elements() {
        let err = try_list_from(vec![Some("a"), None, Some("c")]).unwrap_err();
        assert_eq!(err.message(), "string at position 1 is absent");

        assert!(try_set_from(vec![None::<&str>]).is_err());

        let err = try_map_from(vec![(Some("k"), None::<&str>)]).unwrap_err();
        assert_eq!(err.message(), "value at position 0 is absent");

        let a = Symbol::from("a");
        let err = try_to_string_set(vec![Some(&a), None]).unwrap_err();
        assert_eq!(err.message(), "symbol at position 1 is absent");
    }

    #[test]
    fn try_variants_accept_complete_input() {
        let list = try_list_from(vec![Some("a"), Some("a")]).unwrap();
        assert_eq!(list.len(), 2);

        let set = try_set_from(vec![Some("a"), Some("a")]).unwrap();
        assert_eq!(set.len(), 1);

        let map = try_map_from(vec![(Some("k"), Some("v"))]).unwrap();
        assert_eq!(map.get("k"), Some(&Symbol::from("v")));

        let (a, b) = (Symbol::from("a"), Symbol::from("b"));
        let strings = try_to_string_set(vec![Some(&b), Some(&a), Some(&b)]).unwrap();
        assert_eq!(strings, to_string_set(&[a, b]));
    }

    #[test]
    fn try_map_rejects_duplicate_keys() {
        let err = try_map_from(vec![(Some("k"), Some("v1")), (Some("k"), Some("v2"))]).unwrap_err();
        assert_eq!(err.message(), "duplicate key \"k\" at position 1");
    }
}
