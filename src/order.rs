//! Ordered id sequences and the array-move primitive behind every reorder.
//!
//! An [`Order`] is always a permutation of the ids it was built from: the only
//! mutation is [`move_item`], which rotates a sub-slice and therefore can
//! neither drop nor duplicate an element.

use serde::Serialize;

use crate::types::StableId;

/// Move the element at `from` so that it ends up at index `to`.
///
/// Elements between the two positions shift by one toward the vacated slot
/// (an array move, not a swap). Returns `false` without touching `items` when
/// either index is out of bounds or the indices are equal.
///
/// ```
/// let mut v = vec!['a', 'b', 'c', 'd'];
/// assert!(gridshift::order::move_item(&mut v, 0, 2));
/// assert_eq!(v, ['b', 'c', 'a', 'd']);
/// ```
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from == to {
        return false;
    }
    if from < to {
        match items.get_mut(from..=to) {
            Some(span) => span.rotate_left(1),
            None => return false,
        }
    } else {
        match items.get_mut(to..=from) {
            Some(span) => span.rotate_right(1),
            None => return false,
        }
    }
    true
}

/// Display order of one axis, top-to-bottom or left-to-right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Order {
    ids: Vec<StableId>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an order from ids in generator order.
    ///
    /// Ids are expected to be unique; duplicates are an upstream bug and only
    /// checked in debug builds.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = StableId>,
    {
        let ids: Vec<StableId> = ids.into_iter().collect();
        debug_assert!(
            {
                let mut seen = std::collections::HashSet::new();
                ids.iter().all(|id| seen.insert(id))
            },
            "duplicate stable id in order"
        );
        Self { ids }
    }

    pub fn as_slice(&self) -> &[StableId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StableId> {
        self.ids.iter()
    }

    pub fn get(&self, index: usize) -> Option<&StableId> {
        self.ids.get(index)
    }

    pub fn position(&self, id: &StableId) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    pub fn contains(&self, id: &StableId) -> bool {
        self.position(id).is_some()
    }

    /// Move `dragged` to the slot `target` currently occupies.
    ///
    /// No-op (returns `false`) when the ids are equal or either is absent.
    pub fn move_to(&mut self, dragged: &StableId, target: &StableId) -> bool {
        if dragged == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            return false;
        };
        move_item(&mut self.ids, from, to)
    }
}

impl<'a> IntoIterator for &'a Order {
    type Item = &'a StableId;
    type IntoIter = std::slice::Iter<'a, StableId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ids(order: &Order) -> Vec<&str> {
        order.iter().map(StableId::as_str).collect()
    }

    fn abcd() -> Order {
        Order::from_ids(["a", "b", "c", "d"].map(StableId::from))
    }

    #[test_case(0, 2, &['b', 'c', 'a', 'd'] ; "forward move shifts left")]
    #[test_case(3, 1, &['a', 'd', 'b', 'c'] ; "backward move shifts right")]
    #[test_case(0, 3, &['b', 'c', 'd', 'a'] ; "first to last")]
    #[test_case(3, 0, &['d', 'a', 'b', 'c'] ; "last to first")]
    #[test_case(1, 2, &['a', 'c', 'b', 'd'] ; "adjacent forward")]
    #[test_case(2, 1, &['a', 'c', 'b', 'd'] ; "adjacent backward")]
    fn test_move_item(from: usize, to: usize, expected: &[char]) {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut v, from, to));
        assert_eq!(v, expected);
    }

    #[test]
    fn test_move_item_same_index_is_noop() {
        let mut v = vec![1, 2, 3];
        assert!(!move_item(&mut v, 1, 1));
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_move_item_out_of_bounds_is_noop() {
        let mut v = vec![1, 2, 3];
        assert!(!move_item(&mut v, 0, 3));
        assert!(!move_item(&mut v, 5, 1));
        assert_eq!(v, [1, 2, 3]);

        let mut empty: Vec<u8> = Vec::new();
        assert!(!move_item(&mut empty, 0, 1));
    }

    #[test]
    fn test_move_to_by_id() {
        let mut order = abcd();
        assert!(order.move_to(&"a".into(), &"c".into()));
        assert_eq!(ids(&order), ["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_to_unknown_or_equal() {
        let mut order = abcd();
        assert!(!order.move_to(&"a".into(), &"a".into()));
        assert!(!order.move_to(&"missing".into(), &"b".into()));
        assert!(!order.move_to(&"a".into(), &"missing".into()));
        assert_eq!(ids(&order), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_position_and_get() {
        let order = abcd();
        assert_eq!(order.position(&"c".into()), Some(2));
        assert_eq!(order.get(3).map(StableId::as_str), Some("d"));
        assert!(order.get(4).is_none());
        assert!(!order.contains(&"z".into()));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&abcd()).unwrap();
        assert_eq!(json, r#"["a","b","c","d"]"#);
    }
}
