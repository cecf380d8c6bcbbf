use super::error::QueryError;

/// Strictly ascending sequence of element positions into a lattice.
///
/// Every engine operation that produces an `IndexSet` emits it in ascending order,
/// so consumers may rely on the ordering. Externally built vectors are admitted
/// through `TryFrom<Vec<usize>>`, which rejects unsorted or repeated entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexSet(Vec<usize>);

/// Checks that `indices` is strictly ascending.
pub(crate) fn ensure_ascending(indices: &[usize]) -> Result<(), QueryError> {
    match indices.windows(2).position(|w| w[0] >= w[1]) {
        Some(i) => Err(QueryError::NotAscending {
            position: i + 1,
            previous: indices[i],
            current: indices[i + 1],
        }),
        None => Ok(()),
    }
}

impl IndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// `[0, 1, ..., n - 1]`.
    pub fn range(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Wraps indices the caller produced in ascending order.
    pub(crate) fn from_ascending(indices: Vec<usize>) -> Self {
        debug_assert!(ensure_ascending(&indices).is_ok());
        Self(indices)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.0.iter().copied()
    }

    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    /// Indices of `self` that are not in `other`, in ascending order.
    pub fn difference(&self, other: &IndexSet) -> IndexSet {
        let mut result = Vec::with_capacity(self.0.len());
        let mut rest = other.0.iter().peekable();
        for &index in &self.0 {
            while rest.next_if(|&&o| o < index).is_some() {}
            if rest.peek() != Some(&&index) {
                result.push(index);
            }
        }
        IndexSet(result)
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl TryFrom<Vec<usize>> for IndexSet {
    type Error = QueryError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        ensure_ascending(&indices)?;
        Ok(Self(indices))
    }
}

impl AsRef<[usize]> for IndexSet {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl IntoIterator for IndexSet {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
