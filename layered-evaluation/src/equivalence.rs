//! Aligner which pairs items sharing an equivalence key.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{MultimapAlignment, MultimapProvenancedAlignment, ProvenancedAligner};

/// Aligns provenance items by mapping each one to an equivalence key.
///
/// The derived items on both sides are the distinct keys, in order of first
/// appearance. A left key is aligned to the equal right key. Provenance items
/// sharing a key collapse onto one derived item, with the earliest as its
/// primary provenance.
///
/// ```
/// use layered_evaluation::{Alignment, EquivalenceAligner, ProvenancedAligner, ProvenancedAlignment};
///
/// let aligner = EquivalenceAligner::new(
///     |gold: &&str| gold.to_lowercase(),
///     |system: &&str| system.to_lowercase(),
/// );
/// let alignment = aligner.align(&["Obama", "Paris"], &["OBAMA"]);
///
/// assert_eq!(alignment.left_unaligned(), &["paris".to_string()]);
/// assert_eq!(alignment.right_provenance(&"obama".to_string()), Some(&"OBAMA"));
/// ```
#[derive(Debug, Clone)]
pub struct EquivalenceAligner<LF, RF> {
    left_key: LF,
    right_key: RF,
}

impl<LF, RF> EquivalenceAligner<LF, RF> {
    pub fn new(left_key: LF, right_key: RF) -> Self {
        EquivalenceAligner { left_key, right_key }
    }
}

impl<F: Clone> EquivalenceAligner<F, F> {
    /// Uses the same key function on both sides.
    pub fn symmetric(key: F) -> Self {
        EquivalenceAligner {
            left_key: key.clone(),
            right_key: key,
        }
    }
}

fn derive_keys<P, E>(items: &[P], key: impl Fn(&P) -> E) -> (Vec<E>, Vec<(P, E)>)
where
    P: Clone,
    E: Clone + Eq + Hash,
{
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    let mut provenances = Vec::with_capacity(items.len());
    for item in items {
        let derived = key(item);
        if seen.insert(derived.clone()) {
            keys.push(derived.clone());
        }
        provenances.push((item.clone(), derived));
    }
    (keys, provenances)
}

impl<LP, RP, E, LF, RF> ProvenancedAligner<E, LP, E, RP> for EquivalenceAligner<LF, RF>
where
    LP: Clone + Eq + Hash + Debug,
    RP: Clone + Eq + Hash + Debug,
    E: Clone + Eq + Hash + Debug,
    LF: Fn(&LP) -> E,
    RF: Fn(&RP) -> E,
{
    type Output = MultimapProvenancedAlignment<E, LP, E, RP>;

    fn align(&self, left_items: &[LP], right_items: &[RP]) -> Self::Output {
        let (left_keys, left_provenances) = derive_keys(left_items, &self.left_key);
        let (right_keys, right_provenances) = derive_keys(right_items, &self.right_key);

        let right_set: HashSet<&E> = right_keys.iter().collect();
        let links: Vec<(E, E)> = left_keys
            .iter()
            .filter(|key| right_set.contains(key))
            .map(|key| (key.clone(), key.clone()))
            .collect();

        tracing::debug!(
            left_items = left_items.len(),
            right_items = right_items.len(),
            left_keys = left_keys.len(),
            right_keys = right_keys.len(),
            matched = links.len(),
            "aligned by equivalence key"
        );

        let alignment = MultimapAlignment::from_valid_parts(left_keys, right_keys, links);
        MultimapProvenancedAlignment::from_valid_parts(
            alignment,
            left_provenances,
            right_provenances,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alignment, ProvenancedAlignment};
    use layered_common::{lowercase, Symbol};

    #[test]
    fn aligns_on_shared_keys() {
        let aligner = EquivalenceAligner::symmetric(|s: &Symbol| lowercase(s));
        let gold = vec![Symbol::from("PER"), Symbol::from("ORG"), Symbol::from("per")];
        let system = vec![Symbol::from("Per"), Symbol::from("LOC")];

        let alignment = aligner.align(&gold, &system);

        let per = Symbol::from("per");
        assert_eq!(alignment.left_aligned(), &[per.clone()]);
        assert_eq!(alignment.left_unaligned(), &[Symbol::from("org")]);
        assert_eq!(alignment.right_unaligned(), &[Symbol::from("loc")]);
        assert_eq!(alignment.aligned_to_left_item(&per), &[per.clone()]);

        assert_eq!(
            alignment.provenances_for_left_item(&per),
            &[Symbol::from("PER"), Symbol::from("per")]
        );
        assert_eq!(alignment.left_provenance(&per), Some(&Symbol::from("PER")));
        assert_eq!(alignment.right_provenance(&per), Some(&Symbol::from("Per")));
        assert_eq!(
            alignment.right_item_for_provenance(&Symbol::from("LOC")),
            Some(&Symbol::from("loc"))
        );
    }

    #[test]
    fn empty_inputs() {
        let aligner = EquivalenceAligner::symmetric(|n: &u32| n % 10);
        let alignment = aligner.align(&[], &[3, 13]);

        assert!(alignment.left_aligned().is_empty());
        assert_eq!(alignment.right_unaligned(), &[3]);
        assert_eq!(alignment.provenances_for_right_item(&3), &[3, 13]);
    }

    #[test]
    fn different_provenance_types() {
        let aligner = EquivalenceAligner::new(
            |n: &u32| n.to_string(),
            |s: &String| s.trim().to_string(),
        );
        let alignment = aligner.align(&[1, 2], &[" 2 ".to_string()]);

        assert_eq!(alignment.left_unaligned(), &["1".to_string()]);
        assert_eq!(alignment.aligned_to_right_item(&"2".to_string()), &["2".to_string()]);
        assert_eq!(alignment.right_provenance(&"2".to_string()), Some(&" 2 ".to_string()));
    }

    #[test]
    fn inputs_are_untouched() {
        let aligner = EquivalenceAligner::symmetric(|s: &String| s.len());
        let left = vec!["ab".to_string(), "cd".to_string()];
        let right = vec!["xy".to_string()];
        let before = (left.clone(), right.clone());

        let _ = aligner.align(&left, &right);
        assert_eq!((left, right), before);
    }
}
