use super::error::QueryError;
use super::index_set::ensure_ascending;
use crate::core::models::lattice::Lattice;

/// Longitudinal position `s` at the entrance of each requested element.
///
/// `indices` must be non-empty and strictly ascending, with every entry at most
/// `N = lattice.len()`. The value `N` is the ring-closure sentinel and yields the
/// total ring length; being the largest admissible value it can only appear last.
/// Violations are reported as [`QueryError`] instead of being tolerated.
///
/// Runs in a single forward pass over the lattice.
pub fn find_spos(lattice: &Lattice, indices: &[usize]) -> Result<Vec<f64>, QueryError> {
    let last = *indices.last().ok_or(QueryError::EmptyIndexSet)?;
    ensure_ascending(indices)?;
    if last > lattice.len() {
        return Err(QueryError::IndexOutOfRange {
            index: last,
            len: lattice.len(),
        });
    }

    let mut positions = Vec::with_capacity(indices.len());
    let mut s = 0.0;
    let mut next = 0;
    for (i, element) in lattice.iter().enumerate() {
        if next == indices.len() {
            break;
        }
        if indices[next] == i {
            positions.push(s);
            next += 1;
        }
        s += element.length;
    }
    // Only the closure sentinel can be left over.
    if next < indices.len() {
        positions.push(s);
    }
    Ok(positions)
}

/// Scalar form of [`find_spos`].
pub fn find_spos_at(lattice: &Lattice, index: usize) -> Result<f64, QueryError> {
    find_spos(lattice, &[index]).map(|positions| positions[0])
}

/// Total ring length, i.e. the position of the closure sentinel.
pub fn ring_length(lattice: &Lattice) -> f64 {
    lattice.iter().map(|element| element.length).sum()
}
