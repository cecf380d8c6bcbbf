use super::{
    NUMBER_RULE, NUMBER_WIDTH, Report, ReportError, ReportHeader, sci_row, write_column_header,
    write_preamble,
};
use crate::core::models::accelerator::Accelerator;
use crate::core::models::tracking::DynApGridPoint;
use crate::engine::positions::find_spos;
use crate::engine::query::range;
use std::io::Write;

const KEY_WIDTH: usize = 18;

const DESCRIPTOR_COLUMNS: [(&str, &str, usize); 4] = [
    ("# s_e", "# ---", 5),
    ("l_t", "-----", 5),
    ("l_e", "-----", 5),
    ("l_p", "-----", 5),
];
const PHASE_SPACE_COLUMNS: [&str; 7] = [
    "start_s[m]",
    "rx[m]",
    "ry[m]",
    "de",
    "px[rad]",
    "py[rad]",
    "dl[m]",
];
const TUNE_COLUMNS: [&str; 4] = ["nux1", "nuy1", "nux2", "nuy2"];

/// Dynamic-aperture scan: one row per grid point with the start element, the
/// turn, element and plane where the particle was lost, the start position and
/// the initial coordinates.
#[derive(Debug, Clone)]
pub struct DynApGridReport<'a> {
    grid: &'a [DynApGridPoint],
    label: String,
    with_tunes: bool,
}

impl<'a> DynApGridReport<'a> {
    pub fn new(grid: &'a [DynApGridPoint], label: impl Into<String>) -> Self {
        Self {
            grid,
            label: label.into(),
            with_tunes: false,
        }
    }

    /// Appends the `nux1, nuy1, nux2, nuy2` columns.
    pub fn with_tunes(mut self, with_tunes: bool) -> Self {
        self.with_tunes = with_tunes;
        self
    }

    fn columns(&self) -> Vec<(&'static str, &'static str, usize)> {
        let numeric = PHASE_SPACE_COLUMNS
            .iter()
            .chain(TUNE_COLUMNS.iter().filter(|_| self.with_tunes));
        DESCRIPTOR_COLUMNS
            .iter()
            .copied()
            .chain(numeric.map(|name| (*name, NUMBER_RULE, NUMBER_WIDTH)))
            .collect()
    }
}

impl Report for DynApGridReport<'_> {
    fn write_to(
        &self,
        accelerator: &Accelerator,
        header: &ReportHeader,
        writer: &mut impl Write,
    ) -> Result<(), ReportError> {
        let lattice = &accelerator.lattice;
        if let Some(point) = self.grid.iter().find(|g| g.start_element >= lattice.len()) {
            return Err(ReportError::ElementOutOfRange {
                index: point.start_element,
                len: lattice.len(),
            });
        }

        write_preamble(writer, header, Some(&self.label), accelerator, KEY_WIDTH)?;
        write_column_header(writer, &self.columns())?;
        if self.grid.is_empty() {
            return Ok(());
        }

        let spos = find_spos(lattice, range(lattice).as_slice())?;
        for point in self.grid {
            let p = &point.p;
            let mut values = vec![spos[point.start_element], p.rx, p.ry, p.de, p.px, p.py, p.dl];
            if self.with_tunes {
                values.extend([point.nux1, point.nuy1, point.nux2, point.nuy2]);
            }
            writeln!(
                writer,
                "{:<5} {:<5} {:<5} {:<5} {}",
                point.start_element,
                point.lost_turn,
                point.lost_element,
                point.lost_plane.code(),
                sci_row(&values)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::report::test_support::{accelerator, render};
    use crate::core::models::tracking::{Plane, Pos};

    fn grid() -> Vec<DynApGridPoint> {
        vec![
            DynApGridPoint {
                start_element: 2,
                lost_turn: 100,
                lost_element: 1,
                lost_plane: Plane::X,
                p: Pos::new(0.01, 0.0, 0.001, 0.0, 0.0, 0.0),
                nux1: 0.21,
                nuy1: 0.33,
                nux2: 0.22,
                nuy2: 0.34,
            },
            DynApGridPoint {
                start_element: 0,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn rows_start_with_integer_descriptors_and_start_position() {
        let acc = accelerator();
        let grid = grid();
        let text = render(&DynApGridReport::new(&grid, "[dynap_xy]"), &acc);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[4], "# [dynap_xy]");
        assert!(lines[11].starts_with("# s_e l_t   l_e   l_p   start_s[m]"));
        assert_eq!(lines[11].len(), 4 * 6 + 7 * 25 - 1);
        assert!(!lines[11].contains("nux1"));

        let fields: Vec<&str> = lines[13].split_whitespace().collect();
        assert_eq!(&fields[..4], &["2", "100", "1", "1"]);
        assert_eq!(fields[4], "+3.00000000000000000E+00");
        assert_eq!(fields[5], "+1.00000000000000002E-02");
        assert_eq!(fields[6], "+1.00000000000000002E-03");
        assert_eq!(fields.len(), 11);
        assert!(lines[13].starts_with("2     100   1     1     "));
        assert!(lines[14].starts_with("0     0     0     0     +0.00000000000000000E+00"));
    }

    #[test]
    fn tunes_add_four_columns() {
        let acc = accelerator();
        let grid = grid();
        let text = render(&DynApGridReport::new(&grid, "[dynap]").with_tunes(true), &acc);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[11].contains("nux1"));
        assert!(lines[11].trim_end().ends_with("nuy2"));
        let fields: Vec<&str> = lines[13].split_whitespace().collect();
        assert_eq!(fields.len(), 15);
        assert_eq!(fields[11], "+2.09999999999999992E-01");
        assert_eq!(fields[14], "+3.40000000000000024E-01");
    }

    #[test]
    fn start_element_beyond_lattice_is_rejected() {
        let acc = accelerator();
        let grid = vec![DynApGridPoint {
            start_element: 3,
            ..Default::default()
        }];
        let err = DynApGridReport::new(&grid, "[dynap]")
            .write_to(&acc, &ReportHeader::default(), &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, ReportError::ElementOutOfRange { index: 3, len: 3 }));
    }
}
