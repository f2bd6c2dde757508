// changed.rs - Dirty set of cell indices awaiting re-evaluation

/// Insertion-ordered set of cell indices.
///
/// Membership is tracked with one flag per grid cell so inserts dedup in
/// O(1) without hashing, and iteration follows insertion order, which keeps
/// stepping deterministic.
#[derive(Clone, Debug, Default)]
pub struct ChangedSet {
    members: Vec<usize>,
    flags: Vec<bool>,
}

impl ChangedSet {
    /// Empty set able to hold indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::new(),
            flags: vec![false; capacity],
        }
    }

    /// Set containing every index `0..capacity`.
    pub fn full(capacity: usize) -> Self {
        Self {
            members: (0..capacity).collect(),
            flags: vec![true; capacity],
        }
    }

    /// Returns `true` if the index was not already present.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.flags[index] {
            return false;
        }
        self.flags[index] = true;
        self.members.push(index);
        true
    }

    pub fn extend<I: IntoIterator<Item = usize>>(&mut self, indices: I) {
        for index in indices {
            self.insert(index);
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    pub fn clear(&mut self) {
        for &index in &self.members {
            self.flags[index] = false;
        }
        self.members.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_and_keeps_order() {
        let mut set = ChangedSet::with_capacity(8);
        assert!(set.insert(5));
        assert!(set.insert(1));
        assert!(!set.insert(5));
        set.extend([1, 7, 5]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![5, 1, 7]);
        assert!(set.contains(7));
        assert!(!set.contains(0));
    }

    #[test]
    fn clear_resets_membership() {
        let mut set = ChangedSet::full(4);
        assert_eq!(set.len(), 4);
        set.clear();
        assert!(set.is_empty());
        assert!(set.insert(2));
    }
}
