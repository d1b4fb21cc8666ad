//! Alignments over derived items that remember where each item came from.
//!
//! Scoring usually aligns simplified keys (a normalized mention string, an
//! event type and argument role, ...) rather than the full system or gold
//! objects. A [`ProvenancedAlignment`] keeps the full objects as the
//! *provenance* of each key so reports can point back at them.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use layered_common::{CommonError, CommonResult};

use crate::{Alignment, MultimapAlignment};

/// An [`Alignment`] over derived items `L`/`R` which also exposes the
/// provenance objects `LP`/`RP` each derived item was produced from.
///
/// Every derived item has at least one provenance; the first one is its
/// primary provenance. Every provenance object produced exactly one derived
/// item.
pub trait ProvenancedAlignment<L, LP, R, RP>: Alignment<L, R> {
    /// Provenance objects of `item`, primary first. Empty if `item` is not in
    /// the left set.
    fn provenances_for_left_item(&self, item: &L) -> &[LP];

    /// Provenance objects of `item`, primary first. Empty if `item` is not in
    /// the right set.
    fn provenances_for_right_item(&self, item: &R) -> &[RP];

    /// The derived left item `provenance` produced.
    fn left_item_for_provenance(&self, provenance: &LP) -> Option<&L>;

    /// The derived right item `provenance` produced.
    fn right_item_for_provenance(&self, provenance: &RP) -> Option<&R>;

    fn left_provenance(&self, item: &L) -> Option<&LP> {
        self.provenances_for_left_item(item).first()
    }

    fn right_provenance(&self, item: &R) -> Option<&RP> {
        self.provenances_for_right_item(item).first()
    }
}

/// Something which can produce a [`ProvenancedAlignment`].
///
/// Unlike a plain alignment, the result need not be over the input type:
/// the inputs become the provenances and the aligner decides what the
/// derived items are. Implementations must not depend on anything but the
/// two input slices and their own configuration.
pub trait ProvenancedAligner<L, LP, R, RP> {
    type Output: ProvenancedAlignment<L, LP, R, RP>;

    fn align(&self, left_items: &[LP], right_items: &[RP]) -> Self::Output;
}

#[derive(Debug, Clone)]
struct ProvenanceIndex<T, P> {
    provenances: HashMap<T, Vec<P>>,
    derived: HashMap<P, T>,
}

impl<T, P> ProvenanceIndex<T, P>
where
    T: Clone + Eq + Hash + Debug,
    P: Clone + Eq + Hash + Debug,
{
    fn build<I>(side: &str, items: &[T], pairs: I) -> CommonResult<Self>
    where
        I: IntoIterator<Item = (P, T)>,
    {
        let mut index = ProvenanceIndex {
            provenances: items.iter().map(|item| (item.clone(), Vec::new())).collect(),
            derived: HashMap::new(),
        };
        for (provenance, item) in pairs {
            if let Some(existing) = index.derived.get(&provenance) {
                if existing == &item {
                    continue;
                }
                return Err(CommonError::invalid_argument(format!(
                    "{} provenance {:?} derives both {:?} and {:?}",
                    side, provenance, existing, item
                )));
            }
            match index.provenances.get_mut(&item) {
                Some(sources) => sources.push(provenance.clone()),
                None => {
                    return Err(CommonError::invalid_argument(format!(
                        "{} provenance {:?} derives {:?}, which is not in the {} set",
                        side, provenance, item, side
                    )))
                }
            }
            index.derived.insert(provenance, item);
        }
        let orphan = items.iter().find(|item| {
            index
                .provenances
                .get(*item)
                .map_or(true, Vec::is_empty)
        });
        if let Some(orphan) = orphan {
            return Err(CommonError::invalid_argument(format!(
                "{} item {:?} has no provenance",
                side, orphan
            )));
        }
        Ok(index)
    }

    fn from_valid_pairs(pairs: Vec<(P, T)>) -> Self {
        let mut index = ProvenanceIndex {
            provenances: HashMap::new(),
            derived: HashMap::new(),
        };
        for (provenance, item) in pairs {
            if index.derived.contains_key(&provenance) {
                continue;
            }
            index
                .provenances
                .entry(item.clone())
                .or_default()
                .push(provenance.clone());
            index.derived.insert(provenance, item);
        }
        index
    }
}

impl<T: Eq + Hash, P: Eq + Hash> ProvenanceIndex<T, P> {
    fn provenances_for(&self, item: &T) -> &[P] {
        self.provenances
            .get(item)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn derived_from(&self, provenance: &P) -> Option<&T> {
        self.derived.get(provenance)
    }
}

/// A [`MultimapAlignment`] plus provenance lookups in both directions.
#[derive(Debug, Clone)]
pub struct MultimapProvenancedAlignment<L, LP, R, RP> {
    alignment: MultimapAlignment<L, R>,
    left: ProvenanceIndex<L, LP>,
    right: ProvenanceIndex<R, RP>,
}

impl<L, LP, R, RP> MultimapProvenancedAlignment<L, LP, R, RP>
where
    L: Clone + Eq + Hash + Debug,
    LP: Clone + Eq + Hash + Debug,
    R: Clone + Eq + Hash + Debug,
    RP: Clone + Eq + Hash + Debug,
{
    /// Attaches provenance to an alignment.
    ///
    /// `left_provenances` and `right_provenances` are `(provenance, derived
    /// item)` pairs. Fails with [`CommonError::InvalidArgument`] if a pair
    /// names a derived item outside the alignment, if one provenance object
    /// derives two different items, or if some derived item has no
    /// provenance at all.
    pub fn new<LI, RI>(
        alignment: MultimapAlignment<L, R>,
        left_provenances: LI,
        right_provenances: RI,
    ) -> CommonResult<Self>
    where
        LI: IntoIterator<Item = (LP, L)>,
        RI: IntoIterator<Item = (RP, R)>,
    {
        let left = ProvenanceIndex::build("left", alignment.left_items(), left_provenances)?;
        let right = ProvenanceIndex::build("right", alignment.right_items(), right_provenances)?;
        Ok(MultimapProvenancedAlignment {
            alignment,
            left,
            right,
        })
    }

    /// Assembles an alignment from provenance pairs that already cover every
    /// derived item exactly.
    pub(crate) fn from_valid_parts(
        alignment: MultimapAlignment<L, R>,
        left_provenances: Vec<(LP, L)>,
        right_provenances: Vec<(RP, R)>,
    ) -> Self {
        MultimapProvenancedAlignment {
            alignment,
            left: ProvenanceIndex::from_valid_pairs(left_provenances),
            right: ProvenanceIndex::from_valid_pairs(right_provenances),
        }
    }
}

impl<L, LP, R, RP> MultimapProvenancedAlignment<L, LP, R, RP> {
    /// The alignment over derived items.
    pub fn alignment(&self) -> &MultimapAlignment<L, R> {
        &self.alignment
    }
}

impl<L, LP, R, RP> Alignment<L, R> for MultimapProvenancedAlignment<L, LP, R, RP>
where
    L: Eq + Hash,
    R: Eq + Hash,
{
    fn left_unaligned(&self) -> &[L] {
        self.alignment.left_unaligned()
    }

    fn right_unaligned(&self) -> &[R] {
        self.alignment.right_unaligned()
    }

    fn left_aligned(&self) -> &[L] {
        self.alignment.left_aligned()
    }

    fn right_aligned(&self) -> &[R] {
        self.alignment.right_aligned()
    }

    fn aligned_to_right_item(&self, right_item: &R) -> &[L] {
        self.alignment.aligned_to_right_item(right_item)
    }

    fn aligned_to_left_item(&self, left_item: &L) -> &[R] {
        self.alignment.aligned_to_left_item(left_item)
    }
}

impl<L, LP, R, RP> ProvenancedAlignment<L, LP, R, RP> for MultimapProvenancedAlignment<L, LP, R, RP>
where
    L: Eq + Hash,
    LP: Eq + Hash,
    R: Eq + Hash,
    RP: Eq + Hash,
{
    fn provenances_for_left_item(&self, item: &L) -> &[LP] {
        self.left.provenances_for(item)
    }

    fn provenances_for_right_item(&self, item: &R) -> &[RP] {
        self.right.provenances_for(item)
    }

    fn left_item_for_provenance(&self, provenance: &LP) -> Option<&L> {
        self.left.derived_from(provenance)
    }

    fn right_item_for_provenance(&self, provenance: &RP) -> Option<&R> {
        self.right.derived_from(provenance)
    }
}
