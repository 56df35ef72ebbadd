/// Dense set of live indices with O(1) insert/remove/contains.
///
/// `dense()` yields members in allocation order, which is what
/// [`crate::FreeList::enumerate`] iterates. Removal swap-pops, so order is
/// stable except for the element moved into the vacated position.
pub struct SparseSet {
    sparse: Vec<usize>,
    dense: Vec<usize>,
}

const VACANT: usize = usize::MAX;

impl SparseSet {
    pub fn new() -> Self {
        Self {
            sparse: Vec::new(),
            dense: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sparse: vec![VACANT; capacity],
            dense: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, index: usize) {
        if self.contains(index) {
            return;
        }
        if index >= self.sparse.len() {
            self.sparse.resize(index + 1, VACANT);
        }
        self.sparse[index] = self.dense.len();
        self.dense.push(index);
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        let dense_index = self.sparse[index];
        let last = *self.dense.last().unwrap();
        self.dense.swap_remove(dense_index);
        self.sparse[index] = VACANT;
        if last != index {
            self.sparse[last] = dense_index;
        }
        true
    }

    pub fn contains(&self, index: usize) -> bool {
        self.sparse
            .get(index)
            .map(|&dense_index| dense_index != VACANT)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    pub fn dense(&self) -> &[usize] {
        &self.dense
    }
}

impl Default for SparseSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = SparseSet::with_capacity(4);
        set.insert(2);
        set.insert(9);
        assert!(set.contains(2));
        assert!(set.contains(9));
        assert!(!set.contains(3));
        assert_eq!(set.len(), 2);

        assert!(set.remove(2));
        assert!(!set.remove(2));
        assert!(!set.contains(2));
        assert_eq!(set.dense(), &[9]);
    }

    #[test]
    fn double_insert_is_a_noop() {
        let mut set = SparseSet::new();
        set.insert(1);
        set.insert(1);
        assert_eq!(set.len(), 1);
    }
}
