//! In-memory alignment built from an explicit list of links.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use layered_common::{CommonError, CommonResult};

use crate::Alignment;

/// An [`Alignment`] backed by two lookup maps.
///
/// Iteration order is fixed at construction:
/// - aligned and unaligned slices follow the order in which items first
///   appear in the declared left or right set;
/// - lookup results follow the order in which links were supplied.
///
/// Duplicate set members and duplicate links are collapsed.
///
/// ```
/// use layered_evaluation::{Alignment, MultimapAlignment};
///
/// let alignment = MultimapAlignment::new(
///     vec!["A", "B", "C"],
///     vec!["X", "Y"],
///     vec![("A", "X"), ("B", "X"), ("B", "Y")],
/// )
/// .unwrap();
///
/// assert_eq!(alignment.left_unaligned(), &["C"]);
/// assert_eq!(alignment.aligned_to_right_item(&"X"), &["A", "B"]);
/// ```
#[derive(Debug, Clone)]
pub struct MultimapAlignment<L, R> {
    left_items: Vec<L>,
    right_items: Vec<R>,
    links: Vec<(L, R)>,
    left_aligned: Vec<L>,
    left_unaligned: Vec<L>,
    right_aligned: Vec<R>,
    right_unaligned: Vec<R>,
    left_members: HashSet<L>,
    right_members: HashSet<R>,
    left_to_right: HashMap<L, Vec<R>>,
    right_to_left: HashMap<R, Vec<L>>,
}

fn dedup<T: Clone + Eq + Hash>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

impl<L, R> MultimapAlignment<L, R>
where
    L: Clone + Eq + Hash + Debug,
    R: Clone + Eq + Hash + Debug,
{
    /// Builds an alignment over the declared sets.
    ///
    /// Fails with [`CommonError::InvalidArgument`] if a link names an item
    /// that is not a member of the corresponding set.
    pub fn new<LI, RI, K>(left_items: LI, right_items: RI, links: K) -> CommonResult<Self>
    where
        LI: IntoIterator<Item = L>,
        RI: IntoIterator<Item = R>,
        K: IntoIterator<Item = (L, R)>,
    {
        let left_items = dedup(left_items);
        let right_items = dedup(right_items);
        let links: Vec<(L, R)> = links.into_iter().collect();

        {
            let left_set: HashSet<&L> = left_items.iter().collect();
            let right_set: HashSet<&R> = right_items.iter().collect();
            for (left, right) in &links {
                if !left_set.contains(left) {
                    return Err(CommonError::invalid_argument(format!(
                        "linked left item {:?} is not in the left set",
                        left
                    )));
                }
                if !right_set.contains(right) {
                    return Err(CommonError::invalid_argument(format!(
                        "linked right item {:?} is not in the right set",
                        right
                    )));
                }
            }
        }

        Ok(Self::from_valid_parts(left_items, right_items, links))
    }

    /// Assembles an alignment whose links are already known to stay within
    /// the declared sets.
    pub(crate) fn from_valid_parts(
        left_items: Vec<L>,
        right_items: Vec<R>,
        links: Vec<(L, R)>,
    ) -> Self {
        let links = dedup(links);

        let mut left_to_right: HashMap<L, Vec<R>> = HashMap::new();
        let mut right_to_left: HashMap<R, Vec<L>> = HashMap::new();
        for (left, right) in &links {
            left_to_right
                .entry(left.clone())
                .or_default()
                .push(right.clone());
            right_to_left
                .entry(right.clone())
                .or_default()
                .push(left.clone());
        }

        let (left_aligned, left_unaligned): (Vec<L>, Vec<L>) = left_items
            .iter()
            .cloned()
            .partition(|item| left_to_right.contains_key(item));
        let (right_aligned, right_unaligned): (Vec<R>, Vec<R>) = right_items
            .iter()
            .cloned()
            .partition(|item| right_to_left.contains_key(item));

        tracing::debug!(
            left = left_items.len(),
            right = right_items.len(),
            links = links.len(),
            left_unaligned = left_unaligned.len(),
            right_unaligned = right_unaligned.len(),
            "built multimap alignment"
        );

        MultimapAlignment {
            left_members: left_items.iter().cloned().collect(),
            right_members: right_items.iter().cloned().collect(),
            left_items,
            right_items,
            links,
            left_aligned,
            left_unaligned,
            right_aligned,
            right_unaligned,
            left_to_right,
            right_to_left,
        }
    }

    /// Like [`Alignment::aligned_to_right_item`], but fails if `right_item`
    /// is not a member of the right set.
    pub fn try_aligned_to_right_item(&self, right_item: &R) -> CommonResult<&[L]> {
        if !self.contains_right(right_item) {
            return Err(CommonError::invalid_argument(format!(
                "{:?} is not in the right set",
                right_item
            )));
        }
        Ok(self.aligned_to_right_item(right_item))
    }

    /// Like [`Alignment::aligned_to_left_item`], but fails if `left_item`
    /// is not a member of the left set.
    pub fn try_aligned_to_left_item(&self, left_item: &L) -> CommonResult<&[R]> {
        if !self.contains_left(left_item) {
            return Err(CommonError::invalid_argument(format!(
                "{:?} is not in the left set",
                left_item
            )));
        }
        Ok(self.aligned_to_left_item(left_item))
    }
}

impl<L: Eq + Hash, R: Eq + Hash> MultimapAlignment<L, R> {
    /// Every left item, aligned or not, in declaration order.
    pub fn left_items(&self) -> &[L] {
        &self.left_items
    }

    /// Every right item, aligned or not, in declaration order.
    pub fn right_items(&self) -> &[R] {
        &self.right_items
    }

    /// The distinct links in the order they were supplied.
    pub fn links(&self) -> &[(L, R)] {
        &self.links
    }

    pub fn contains_left(&self, item: &L) -> bool {
        self.left_members.contains(item)
    }

    pub fn contains_right(&self, item: &R) -> bool {
        self.right_members.contains(item)
    }
}

impl<L: Eq + Hash, R: Eq + Hash> Alignment<L, R> for MultimapAlignment<L, R> {
    fn left_unaligned(&self) -> &[L] {
        &self.left_unaligned
    }

    fn right_unaligned(&self) -> &[R] {
        &self.right_unaligned
    }

    fn left_aligned(&self) -> &[L] {
        &self.left_aligned
    }

    fn right_aligned(&self) -> &[R] {
        &self.right_aligned
    }

    fn aligned_to_right_item(&self, right_item: &R) -> &[L] {
        self.right_to_left
            .get(right_item)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn aligned_to_left_item(&self, left_item: &L) -> &[R] {
        self.left_to_right
            .get(left_item)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
