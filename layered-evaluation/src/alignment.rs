//! The read-only alignment contract.

/// A pairing up of a left set of items with a right set of items.
///
/// The relation is many-to-many and need not be symmetric, functional, or
/// total in either direction. Alignments are immutable once built, so every
/// method is a pure read and repeated calls return the same items in the
/// same order.
///
/// `left_aligned` and `left_unaligned` partition the left set (likewise on
/// the right). Items must have `Eq`/`Hash` behavior suitable for sets and
/// maps.
pub trait Alignment<L, R> {
    /// Left items which were not paired with anything on the right.
    fn left_unaligned(&self) -> &[L];

    /// Right items which were not paired with anything on the left.
    fn right_unaligned(&self) -> &[R];

    /// Left items paired with at least one right item.
    fn left_aligned(&self) -> &[L];

    /// Right items paired with at least one left item.
    fn right_aligned(&self) -> &[R];

    /// All left items, if any, which align to `right_item`.
    fn aligned_to_right_item(&self, right_item: &R) -> &[L];

    /// All right items, if any, which align to `left_item`.
    fn aligned_to_left_item(&self, left_item: &L) -> &[R];

    fn is_left_aligned(&self, left_item: &L) -> bool {
        !self.aligned_to_left_item(left_item).is_empty()
    }

    fn is_right_aligned(&self, right_item: &R) -> bool {
        !self.aligned_to_right_item(right_item).is_empty()
    }
}
