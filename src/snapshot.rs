/// Owned copy of a tracker's containers, for display
///
/// `lower` and `upper` are laid out as array-backed binary heaps: the node at
/// index `i` has children at `2i + 1` and `2i + 2` (see [`heap_edges`]).
/// `lower` is max-ordered, `upper` is min-ordered, and both hold the values
/// exactly as they were inserted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<T> {
    /// Lower half of the stream, max-heap order
    pub lower: Vec<T>,
    /// Upper half of the stream, min-heap order
    pub upper: Vec<T>,
    /// Every observation, in insertion order
    pub stream: Vec<T>,
}

impl<T> Snapshot<T> {
    /// Splits the snapshot into `(lower, upper, stream)`
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, Vec<T>) {
        (self.lower, self.upper, self.stream)
    }

    /// Whether the snapshot was taken from an empty tracker
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty() && self.stream.is_empty()
    }
}

/// `(parent, child)` index pairs of an implicit binary heap holding `len` nodes
///
/// Pairs come out in parent order, left child first.
pub fn heap_edges(len: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).flat_map(move |parent| {
        [2 * parent + 1, 2 * parent + 2]
            .into_iter()
            .filter(move |&child| child < len)
            .map(move |child| (parent, child))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_of_small_heaps() {
        assert_eq!(heap_edges(0).count(), 0);
        assert_eq!(heap_edges(1).count(), 0);
        assert_eq!(heap_edges(2).collect::<Vec<_>>(), vec![(0, 1)]);
        assert_eq!(
            heap_edges(6).collect::<Vec<_>>(),
            vec![(0, 1), (0, 2), (1, 3), (1, 4), (2, 5)]
        );
    }

    #[test]
    fn every_node_but_root_has_one_parent() {
        let len = 37;
        let mut children: Vec<usize> = heap_edges(len).map(|(_, c)| c).collect();
        children.sort_unstable();
        assert_eq!(children, (1..len).collect::<Vec<_>>());
    }

    #[test]
    fn into_parts_keeps_field_order() {
        let snapshot = Snapshot {
            lower: vec![2, 1],
            upper: vec![3],
            stream: vec![1, 3, 2],
        };
        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.into_parts(), (vec![2, 1], vec![3], vec![1, 3, 2]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_sequences() {
        let snapshot = Snapshot {
            lower: vec![2.0, 1.0],
            upper: vec![3.5],
            stream: vec![1.0, 3.5, 2.0],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"lower":[2.0,1.0],"upper":[3.5],"stream":[1.0,3.5,2.0]}"#);

        let back: Snapshot<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
