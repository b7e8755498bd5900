//! Array-backed binary min-heap with id-indexed entries.
//!
//! The open set of a search holds tile indices keyed by their current `f`
//! score. Scores change while a tile sits in the heap, so the heap supports
//! in-place [`rescore`](IndexedHeap::rescore) and arbitrary
//! [`remove`](IndexedHeap::remove) in addition to the usual push/pop. A
//! position table (id → heap slot) makes both O(log n) without scanning
//! for the entry.

/// A single heap entry: an arena id with its ordering key.
#[derive(Clone, Copy, Debug)]
struct Entry<K> {
    id: usize,
    key: K,
}

/// Binary min-heap over `(id, key)` entries, with O(1) lookup of an id's
/// current slot.
///
/// Ids are small dense integers (tile indices into a grid arena). Each id
/// may be present at most once. Ties between equal keys are broken
/// arbitrarily by heap structure.
#[derive(Clone, Debug, Default)]
pub struct IndexedHeap<K> {
    entries: Vec<Entry<K>>,
    /// id → heap slot + 1; 0 means the id is not in the heap.
    slots: Vec<usize>,
}

impl<K: Ord + Copy> IndexedHeap<K> {
    /// Create a heap able to track ids in `0..ids` without reallocating
    /// the position table.
    pub fn with_capacity(ids: usize) -> Self {
        Self {
            entries: Vec::with_capacity(ids),
            slots: vec![0; ids],
        }
    }

    /// Number of entries currently in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `id` currently has an entry.
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.slots.get(id).is_some_and(|&s| s != 0)
    }

    /// Remove all entries, keeping allocations for reuse.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.fill(0);
    }

    /// Insert `id` with the given key.
    ///
    /// `id` must not already be present; in debug builds a duplicate push
    /// panics, in release builds it corrupts the position table.
    pub fn push(&mut self, id: usize, key: K) {
        debug_assert!(!self.contains(id), "id {id} pushed twice");
        if id >= self.slots.len() {
            self.slots.resize(id + 1, 0);
        }
        let i = self.entries.len();
        self.entries.push(Entry { id, key });
        self.slots[id] = i + 1;
        self.sift_up(i);
    }

    /// The entry with the minimum key, without removing it.
    pub fn peek(&self) -> Option<(usize, K)> {
        self.entries.first().map(|e| (e.id, e.key))
    }

    /// Remove and return the entry with the minimum key, or `None` if the
    /// heap is empty.
    pub fn pop(&mut self) -> Option<(usize, K)> {
        let first = *self.entries.first()?;
        self.slots[first.id] = 0;
        let last = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.place(0, last);
            self.sift_down(0);
        }
        Some((first.id, first.key))
    }

    /// Remove the entry for `id` from anywhere in the heap.
    ///
    /// Returns the removed key, or `None` if `id` was not present. The
    /// entry that fills the vacated slot is sifted up or down depending on
    /// how it compares to the removed key.
    pub fn remove(&mut self, id: usize) -> Option<K> {
        let slot = *self.slots.get(id)?;
        if slot == 0 {
            return None;
        }
        let i = slot - 1;
        let removed = self.entries[i];
        self.slots[id] = 0;
        let last = self.entries.pop()?;
        if i < self.entries.len() {
            self.place(i, last);
            if last.key < removed.key {
                self.sift_up(i);
            } else {
                self.sift_down(i);
            }
        }
        Some(removed.key)
    }

    /// Update the key of the entry for `id`, restoring heap order from its
    /// current slot.
    ///
    /// Returns `false` if `id` is not present (the caller's bookkeeping is
    /// out of sync; nothing is changed).
    pub fn rescore(&mut self, id: usize, key: K) -> bool {
        let Some(&slot) = self.slots.get(id) else {
            return false;
        };
        if slot == 0 {
            return false;
        }
        let i = slot - 1;
        self.entries[i].key = key;
        self.sift_up(i);
        self.sift_down(i);
        true
    }

    /// Write `e` into slot `i` and record its position.
    #[inline]
    fn place(&mut self, i: usize, e: Entry<K>) {
        self.entries[i] = e;
        self.slots[e.id] = i + 1;
    }

    /// Move the entry at `i` toward the root while it is smaller than its
    /// parent. Parent of slot `i` is `((i + 1) >> 1) - 1`.
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = ((i + 1) >> 1) - 1;
            if self.entries[i].key < self.entries[p].key {
                let (a, b) = (self.entries[i], self.entries[p]);
                self.place(i, b);
                self.place(p, a);
                i = p;
            } else {
                break;
            }
        }
    }

    /// Move the entry at `i` toward the leaves while a child is smaller.
    /// Children of slot `i` are `((i + 1) << 1) - 1` and `(i + 1) << 1`.
    fn sift_down(&mut self, mut i: usize) {
        loop {
            let c2 = (i + 1) << 1;
            let c1 = c2 - 1;
            let mut smallest = i;
            if c1 < self.entries.len() && self.entries[c1].key < self.entries[smallest].key {
                smallest = c1;
            }
            if c2 < self.entries.len() && self.entries[c2].key < self.entries[smallest].key {
                smallest = c2;
            }
            if smallest == i {
                break;
            }
            let (a, b) = (self.entries[i], self.entries[smallest]);
            self.place(i, b);
            self.place(smallest, a);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    /// Check the heap invariant and position-table consistency.
    fn assert_well_formed(h: &IndexedHeap<i32>) {
        for i in 1..h.entries.len() {
            let p = ((i + 1) >> 1) - 1;
            assert!(
                h.entries[p].key <= h.entries[i].key,
                "parent {} > child {} at slot {i}",
                h.entries[p].key,
                h.entries[i].key
            );
        }
        for (i, e) in h.entries.iter().enumerate() {
            assert_eq!(h.slots[e.id], i + 1, "slot table stale for id {}", e.id);
        }
    }

    #[test]
    fn pop_returns_keys_in_order() {
        let mut h = IndexedHeap::with_capacity(8);
        for (id, key) in [(0, 5), (1, 1), (2, 9), (3, 3), (4, 7)] {
            h.push(id, key);
        }
        let mut keys = Vec::new();
        while let Some((_, k)) = h.pop() {
            keys.push(k);
        }
        assert_eq!(keys, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn random_insertions_pop_sorted() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut h = IndexedHeap::with_capacity(256);
        let mut keys: Vec<i32> = (0..256).map(|_| rng.random_range(-1000..1000)).collect();
        for (id, &k) in keys.iter().enumerate() {
            h.push(id, k);
        }
        assert_well_formed(&h);
        keys.sort_unstable();
        let mut popped = Vec::new();
        while let Some((_, k)) = h.pop() {
            popped.push(k);
        }
        assert_eq!(popped, keys);
    }

    #[test]
    fn pop_empty_is_none() {
        let mut h: IndexedHeap<i32> = IndexedHeap::with_capacity(4);
        assert!(h.pop().is_none());
        h.push(2, 10);
        assert_eq!(h.pop(), Some((2, 10)));
        assert!(h.pop().is_none());
    }

    #[test]
    fn peek_returns_minimum_without_removing() {
        let mut h: IndexedHeap<i32> = IndexedHeap::with_capacity(4);
        assert!(h.peek().is_none());
        h.push(0, 7);
        h.push(1, 3);
        assert_eq!(h.peek(), Some((1, 3)));
        assert_eq!(h.len(), 2);
        assert_eq!(h.pop(), Some((1, 3)));
        assert_eq!(h.peek(), Some((0, 7)));
    }

    #[test]
    fn remove_interior_entry() {
        let mut h = IndexedHeap::with_capacity(8);
        for (id, key) in [(0, 4), (1, 2), (2, 8), (3, 6), (4, 1), (5, 9)] {
            h.push(id, key);
        }
        assert_eq!(h.remove(2), Some(8));
        assert!(!h.contains(2));
        assert_well_formed(&h);
        assert_eq!(h.remove(2), None);

        let mut keys = Vec::new();
        while let Some((_, k)) = h.pop() {
            keys.push(k);
        }
        assert_eq!(keys, vec![1, 2, 4, 6, 9]);
    }

    #[test]
    fn rescore_moves_entry_both_directions() {
        let mut h = IndexedHeap::with_capacity(8);
        for (id, key) in [(0, 10), (1, 20), (2, 30), (3, 40)] {
            h.push(id, key);
        }
        // Improve a deep entry to the new minimum.
        assert!(h.rescore(3, 1));
        assert_well_formed(&h);
        assert_eq!(h.pop(), Some((3, 1)));
        // Worsen the current minimum.
        assert!(h.rescore(0, 99));
        assert_well_formed(&h);
        assert_eq!(h.pop(), Some((1, 20)));
    }

    #[test]
    fn rescore_absent_id_is_rejected() {
        let mut h = IndexedHeap::with_capacity(4);
        h.push(1, 5);
        assert!(!h.rescore(0, 3));
        assert!(!h.rescore(100, 3));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn mixed_operations_keep_invariant() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut h = IndexedHeap::with_capacity(64);
        for round in 0..500 {
            let id = rng.random_range(0..64);
            match round % 4 {
                0 if !h.contains(id) => h.push(id, rng.random_range(0..100)),
                1 => {
                    h.remove(id);
                }
                2 if h.contains(id) => {
                    assert!(h.rescore(id, rng.random_range(0..100)));
                }
                _ => {
                    h.pop();
                }
            }
            assert_well_formed(&h);
        }
    }

    #[test]
    fn clear_keeps_capacity_and_resets_slots() {
        let mut h = IndexedHeap::with_capacity(8);
        for id in 0..8 {
            h.push(id, id as i32);
        }
        h.clear();
        assert!(h.is_empty());
        for id in 0..8 {
            assert!(!h.contains(id));
        }
        h.push(3, -1);
        assert_eq!(h.pop(), Some((3, -1)));
    }
}
