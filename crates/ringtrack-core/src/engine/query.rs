use super::attributes::{
    Angle, ElementAttribute, FamName, Frequency, PassMethodName, PolynomA, PolynomB,
};
use super::error::QueryError;
use super::index_set::IndexSet;
use crate::core::models::lattice::Lattice;

/// Whether a search keeps the elements whose attribute equals the requested value
/// or exactly the complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    #[default]
    Equal,
    NotEqual,
}

impl MatchMode {
    #[inline]
    fn keeps(self, matched: bool) -> bool {
        match self {
            MatchMode::Equal => matched,
            MatchMode::NotEqual => !matched,
        }
    }
}

/// Maps the conventional `reverse` flag: `true` selects the complement.
impl From<bool> for MatchMode {
    fn from(reverse: bool) -> Self {
        if reverse {
            MatchMode::NotEqual
        } else {
            MatchMode::Equal
        }
    }
}

/// Concatenates the segments in order into a new, independent lattice.
pub fn join<'a, I>(segments: I) -> Lattice
where
    I: IntoIterator<Item = &'a Lattice>,
{
    segments
        .into_iter()
        .flat_map(|segment| segment.iter().cloned())
        .collect()
}

/// A new lattice with the element order reversed.
///
/// Element attributes are copied as-is; entrance/exit asymmetries are not swapped.
pub fn reverse(lattice: &Lattice) -> Lattice {
    lattice.iter().rev().cloned().collect()
}

/// `[0, 1, ..., N - 1]` for a lattice of `N` elements.
pub fn range(lattice: &Lattice) -> IndexSet {
    IndexSet::range(lattice.len())
}

/// Generic attribute search.
///
/// Keeps index `i` when `attribute(i) == value` (`MatchMode::Equal`) or when it
/// differs (`MatchMode::NotEqual`). The result is ascending.
pub fn find_cells<A>(
    lattice: &Lattice,
    attribute: &A,
    value: &A::Value,
    mode: impl Into<MatchMode>,
) -> IndexSet
where
    A: ElementAttribute,
{
    let mode = mode.into();
    let indices = lattice
        .iter()
        .enumerate()
        .filter(|(_, element)| mode.keeps(attribute.extract(element) == value))
        .map(|(i, _)| i)
        .collect();
    IndexSet::from_ascending(indices)
}

/// Gathers one attribute for every index of `indices`.
pub fn cell_values<'l, A>(
    lattice: &'l Lattice,
    attribute: &A,
    indices: &[usize],
) -> Result<Vec<&'l A::Value>, QueryError>
where
    A: ElementAttribute,
{
    indices
        .iter()
        .map(|&index| {
            lattice
                .get(index)
                .map(|element| attribute.extract(element))
                .ok_or(QueryError::IndexOutOfRange {
                    index,
                    len: lattice.len(),
                })
        })
        .collect()
}

pub fn find_cells_fam_name(lattice: &Lattice, value: &str, reverse: bool) -> IndexSet {
    find_cells(lattice, &FamName, value, reverse)
}

pub fn find_cells_frequency(lattice: &Lattice, value: f64, reverse: bool) -> IndexSet {
    find_cells(lattice, &Frequency, &value, reverse)
}

pub fn find_cells_angle(lattice: &Lattice, value: f64, reverse: bool) -> IndexSet {
    find_cells(lattice, &Angle, &value, reverse)
}

pub fn find_cells_polynom_a(
    lattice: &Lattice,
    order: usize,
    value: f64,
    reverse: bool,
) -> Result<IndexSet, QueryError> {
    Ok(find_cells(lattice, &PolynomA::new(order)?, &value, reverse))
}

pub fn find_cells_polynom_b(
    lattice: &Lattice,
    order: usize,
    value: f64,
    reverse: bool,
) -> Result<IndexSet, QueryError> {
    Ok(find_cells(lattice, &PolynomB::new(order)?, &value, reverse))
}

/// Matches on the canonical pass-method name (e.g. `"cavity_pass"`).
pub fn find_cells_pass_method(lattice: &Lattice, value: &str, reverse: bool) -> IndexSet {
    find_cells(lattice, &PassMethodName, value, reverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;

    fn fodo() -> Lattice {
        Lattice::from_elements(vec![
            Element::marker("START"),
            Element::quadrupole("QF", 0.2, 2.5),
            Element::drift("L1", 1.0),
            Element::sbend("B", 1.05, 0.1),
            Element::drift("L1", 1.0),
            Element::quadrupole("QD", 0.2, -2.5),
            Element::sextupole("SF", 0.1, 30.0),
            Element::quadrupole("QF", 0.2, 2.5),
            Element::rfcavity("RF", 0.0, 500e6),
        ])
    }

    #[test]
    fn join_concatenates_in_segment_order() {
        let a = Lattice::from_elements(vec![
            Element::drift("A1", 1.0),
            Element::drift("A2", 2.0),
            Element::drift("A3", 3.0),
        ]);
        let b = Lattice::from_elements(vec![Element::drift("B1", 4.0), Element::drift("B2", 5.0)]);

        let joined = join([&a, &b]);

        assert_eq!(joined.len(), 5);
        assert_eq!(&joined.elements()[..3], a.elements());
        assert_eq!(&joined.elements()[3..], b.elements());
    }

    #[test]
    fn join_copies_are_independent_of_inputs() {
        let a = Lattice::from_elements(vec![Element::drift("A1", 1.0)]);
        let mut joined = join([&a]);
        joined[0].length = 9.0;
        assert_eq!(a[0].length, 1.0);
    }

    #[test]
    fn join_of_nothing_is_empty() {
        assert!(join(std::iter::empty::<&Lattice>()).is_empty());
    }

    #[test]
    fn reverse_twice_is_identity() {
        let lattice = fodo();
        let reversed = reverse(&lattice);
        assert_eq!(reversed[0].fam_name, "RF");
        assert_eq!(reversed[lattice.len() - 1].fam_name, "START");
        assert_eq!(reverse(&reversed), lattice);
    }

    #[test]
    fn range_covers_every_element() {
        assert_eq!(range(&fodo()).as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn fam_name_search_and_complement_partition_the_range() {
        let lattice = fodo();
        let qf = find_cells_fam_name(&lattice, "QF", false);
        let others = find_cells_fam_name(&lattice, "QF", true);

        assert_eq!(qf.as_slice(), &[1, 7]);
        assert_eq!(others.as_slice(), &[0, 2, 3, 4, 5, 6, 8]);

        let mut all: Vec<usize> = qf.iter().chain(others.iter()).collect();
        all.sort_unstable();
        assert_eq!(all, range(&lattice).into_vec());
    }

    #[test]
    fn reverse_search_for_absent_value_returns_full_range() {
        let lattice = fodo();
        assert_eq!(find_cells_fam_name(&lattice, "NOPE", true), range(&lattice));
        assert!(find_cells_fam_name(&lattice, "NOPE", false).is_empty());
    }

    #[test]
    fn float_attributes_match_exactly() {
        let lattice = fodo();
        assert_eq!(find_cells_angle(&lattice, 0.1, false).as_slice(), &[3]);
        assert!(find_cells_angle(&lattice, 0.1 + 1e-15, false).is_empty());
        assert_eq!(find_cells_angle(&lattice, 0.0, true).as_slice(), &[3]);
        assert_eq!(find_cells_frequency(&lattice, 0.0, true).as_slice(), &[8]);
        assert_eq!(find_cells_frequency(&lattice, 500e6, false).as_slice(), &[8]);
    }

    #[test]
    fn polynom_searches_select_by_order() {
        let lattice = fodo();
        assert_eq!(
            find_cells_polynom_b(&lattice, 1, 0.0, true).unwrap().as_slice(),
            &[1, 5, 7]
        );
        assert_eq!(
            find_cells_polynom_b(&lattice, 2, 30.0, false).unwrap().as_slice(),
            &[6]
        );
        assert_eq!(
            find_cells_polynom_a(&lattice, 0, 0.0, false).unwrap(),
            range(&lattice)
        );
        assert!(matches!(
            find_cells_polynom_b(&lattice, 5, 0.0, false),
            Err(QueryError::PolynomOrderOutOfRange { order: 5, .. })
        ));
    }

    #[test]
    fn pass_method_search_is_name_based() {
        let lattice = fodo();
        assert_eq!(
            find_cells_pass_method(&lattice, "drift_pass", false).as_slice(),
            &[2, 4]
        );
        assert_eq!(
            find_cells_pass_method(&lattice, "cavity_pass", false).as_slice(),
            &[8]
        );
        assert!(find_cells_pass_method(&lattice, "warp_pass", false).is_empty());
    }

    #[test]
    fn generic_search_accepts_explicit_match_mode() {
        let lattice = fodo();
        let long = find_cells(&lattice, &crate::engine::attributes::Length, &1.0, MatchMode::Equal);
        assert_eq!(long.as_slice(), &[2, 4]);
    }

    #[test]
    fn cell_values_reads_attribute_per_index() {
        let lattice = fodo();
        let lengths = cell_values(&lattice, &crate::engine::attributes::Length, &[2, 3]).unwrap();
        assert_eq!(lengths, vec![&1.0, &1.05]);
        assert_eq!(
            cell_values(&lattice, &FamName, &[42]).unwrap_err(),
            QueryError::IndexOutOfRange { index: 42, len: 9 }
        );
    }
}
