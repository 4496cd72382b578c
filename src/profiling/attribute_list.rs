//! AttributeList - Canonical immutable set of attribute indexes

/// A finite set of attribute indexes in canonical form: sorted ascending, no
/// duplicates. Equality and hashing are structural, so two lists built in
/// different orders (or via different union chains) compare equal and can be
/// used interchangeably as set members and map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeList {
    indexes: Vec<usize>,
}

impl AttributeList {
    /// A singleton list for one attribute.
    pub fn single(attribute: usize) -> Self {
        Self {
            indexes: vec![attribute],
        }
    }

    /// Builds a list from arbitrary indexes, canonicalizing on the way in.
    pub fn from_indexes(indexes: impl IntoIterator<Item = usize>) -> Self {
        let mut indexes: Vec<usize> = indexes.into_iter().collect();
        indexes.sort_unstable();
        indexes.dedup();
        Self { indexes }
    }

    /// Set union with `other`, as a new canonical list. Both inputs stay
    /// untouched; candidates in the lattice are always fresh values.
    pub fn union(&self, other: &AttributeList) -> AttributeList {
        let mut merged = Vec::with_capacity(self.indexes.len() + other.indexes.len());
        let (mut left, mut right) = (0, 0);
        while left < self.indexes.len() && right < other.indexes.len() {
            let (a, b) = (self.indexes[left], other.indexes[right]);
            if a <= b {
                merged.push(a);
                left += 1;
                if a == b {
                    right += 1;
                }
            } else {
                merged.push(b);
                right += 1;
            }
        }
        merged.extend_from_slice(&self.indexes[left..]);
        merged.extend_from_slice(&other.indexes[right..]);
        AttributeList { indexes: merged }
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    pub fn contains(&self, attribute: usize) -> bool {
        self.indexes.binary_search(&attribute).is_ok()
    }

    /// True iff every index of `other` is also contained in `self`.
    pub fn is_superset_of(&self, other: &AttributeList) -> bool {
        other.indexes.iter().all(|index| self.contains(*index))
    }

    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indexes.iter().copied()
    }
}
