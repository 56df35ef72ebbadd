use thiserror::Error;

use crate::collections::sparse_set::SparseSet;

/// Errors that can occur during FreeList operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FreeListError {
    /// Index was never issued by this list
    #[error("Index {index} is out of bounds for FreeList of capacity {capacity}")]
    OutOfBounds { index: usize, capacity: usize },

    /// Index was issued but has already been removed
    #[error("Index {index} has already been freed")]
    AlreadyFree { index: usize },
}

/// Slot-stable storage: `insert` returns an integer handle that stays valid
/// until `remove`, and freed handles are reused instead of shifting elements.
pub struct FreeList<T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
}

impl<T> FreeList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Stores a value and returns its index, reusing a previously-freed index
    /// when one is available.
    pub fn insert(&mut self, value: T) -> usize {
        match self.free.pop() {
            Some(index) => {
                debug_assert!(self.slots[index].is_none());
                self.slots[index] = Some(value);
                index
            }
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            }
        }
    }

    /// Frees an index for reuse and returns the value that occupied it.
    /// Other indices are unaffected.
    pub fn remove(&mut self, index: usize) -> Result<T, FreeListError> {
        let Some(slot) = self.slots.get_mut(index) else {
            return Err(FreeListError::OutOfBounds {
                index,
                capacity: self.slots.len(),
            });
        };
        match slot.take() {
            Some(value) => {
                self.free.push(index);
                Ok(value)
            }
            None => Err(FreeListError::AlreadyFree { index }),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(|slot| slot.as_mut())
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every value whose index is live in `indices`, in the set's
    /// allocation order. Lazy and restartable.
    pub fn enumerate<'a>(&'a self, indices: &'a SparseSet) -> impl Iterator<Item = &'a T> + 'a {
        indices
            .dense()
            .iter()
            .filter_map(move |&index| self.get(index))
    }
}

impl<T> Default for FreeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reuses_freed_indices() {
        let mut list = FreeList::new();
        let a = list.insert("a");
        let b = list.insert("b");
        assert_eq!(a, 0);
        assert_eq!(b, 1);

        assert_eq!(list.remove(a), Ok("a"));
        let c = list.insert("c");
        assert_eq!(c, 0);
        assert_eq!(list.get(c), Some(&"c"));
        assert_eq!(list.get(b), Some(&"b"));
    }

    #[test]
    fn remove_rejects_bad_indices() {
        let mut list: FreeList<u8> = FreeList::new();
        let index = list.insert(7);
        assert_eq!(
            list.remove(5),
            Err(FreeListError::OutOfBounds {
                index: 5,
                capacity: 1
            })
        );
        assert_eq!(list.remove(index), Ok(7));
        assert_eq!(list.remove(index), Err(FreeListError::AlreadyFree { index }));
    }

    #[test]
    fn enumerate_visits_live_values_once() {
        let mut list = FreeList::new();
        let mut set = SparseSet::new();
        for value in 0..4 {
            let index = list.insert(value);
            set.insert(index);
        }
        list.remove(2).unwrap();
        set.remove(2);

        let seen: Vec<i32> = list.enumerate(&set).copied().collect();
        assert_eq!(seen.len(), 3);
        for value in [0, 1, 3] {
            assert!(seen.contains(&value));
        }
    }
}
