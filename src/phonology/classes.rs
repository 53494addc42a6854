use crate::phonology::symbols::Class;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bit set over the phonological classes
///
/// Indexed by [`Class::index`]; used to expose which classes an automaton
/// state accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSet {
    bits: BitVec,
}

impl Default for ClassSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassSet {
    /// Create a set with no classes present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; Class::COUNT],
        }
    }

    /// Create a set containing every class
    pub fn all() -> Self {
        Self {
            bits: bitvec![1; Class::COUNT],
        }
    }

    /// Insert a class
    pub fn insert(&mut self, class: Class) {
        self.bits.set(class.index(), true);
    }

    /// Test class membership
    pub fn contains(&self, class: Class) -> bool {
        self.bits.get(class.index()).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no classes are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count classes in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract members in index order
    pub fn to_vec(&self) -> Vec<Class> {
        self.bits.iter_ones().filter_map(Class::from_index).collect()
    }
}

impl FromIterator<Class> for ClassSet {
    fn from_iter<I: IntoIterator<Item = Class>>(iter: I) -> Self {
        let mut set = Self::new();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.to_vec().iter().map(ToString::to_string).collect();
        write!(f, "{{{}}}", members.join(","))
    }
}
