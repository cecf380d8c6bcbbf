use super::{
    Report, ReportError, ReportHeader, element_columns, sci_row, write_column_header,
    write_preamble,
};
use crate::core::models::accelerator::Accelerator;
use crate::core::models::tracking::Pos;
use crate::engine::index_set::IndexSet;
use crate::engine::positions::find_spos;
use std::io::Write;

const LABEL: &str = "[closed-orbit]";
const KEY_WIDTH: usize = 17;

/// Closed orbit at the entrance of every element, one row per element with a
/// 1-based index.
#[derive(Debug, Clone, Copy)]
pub struct ClosedOrbitReport<'a> {
    orbit: &'a [Pos],
}

impl<'a> ClosedOrbitReport<'a> {
    /// `orbit[i]` is the orbit at the entrance of element `i`; extra trailing
    /// points (such as the one-turn end point) are ignored.
    pub fn new(orbit: &'a [Pos]) -> Self {
        Self { orbit }
    }
}

impl Report for ClosedOrbitReport<'_> {
    fn write_to(
        &self,
        accelerator: &Accelerator,
        header: &ReportHeader,
        writer: &mut impl Write,
    ) -> Result<(), ReportError> {
        let lattice = &accelerator.lattice;
        if self.orbit.len() < lattice.len() {
            return Err(ReportError::InconsistentDimensions {
                what: "orbit points",
                expected: lattice.len(),
                found: self.orbit.len(),
            });
        }

        write_preamble(writer, header, Some(LABEL), accelerator, KEY_WIDTH)?;
        write_column_header(
            writer,
            &element_columns(&[
                "s[m]", "rx[m]", "px[rad]", "ry[m]", "py[rad]", "de", "dl[m]",
            ]),
        )?;

        let spos = find_spos(lattice, IndexSet::range(lattice.len() + 1).as_slice())?;
        for ((i, element), (p, s)) in lattice.iter().enumerate().zip(self.orbit.iter().zip(spos)) {
            writeln!(
                writer,
                "{:05} {:<15} {}",
                i + 1,
                element.fam_name,
                sci_row(&[s, p.rx, p.px, p.ry, p.py, p.de, p.dl])
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::report::test_support::{accelerator, render};

    #[test]
    fn rows_carry_one_based_index_and_entrance_position() {
        let acc = accelerator();
        let orbit = vec![
            Pos::new(1e-3, 0.0, 0.0, 0.0, 0.0, 0.0),
            Pos::default(),
            Pos::new(0.0, 0.0, -2e-4, 0.0, 0.0, 0.0),
            Pos::default(),
        ];
        let text = render(&ClosedOrbitReport::new(&orbit), &acc);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[4], "# [closed-orbit]");
        assert_eq!(lines[5], "# ebeam_energy[eV] : 3000000000.000000");
        assert_eq!(lines[11].len(), 5 + 1 + 15 + 7 * 25);
        assert!(lines[12].starts_with("# --- ---------------"));

        let rows = &lines[13..];
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("00001 L1              +0.00000000000000000E+00 +1.00000000000000002E-03"));
        assert!(rows[1].starts_with("00002 L2              +1.00000000000000000E+00"));
        assert!(rows[2].starts_with("00003 L3              +3.00000000000000000E+00"));
        assert!(rows[2].contains("-2.00000000000000010E-04"));
    }

    #[test]
    fn short_orbit_is_rejected() {
        let acc = accelerator();
        let orbit = vec![Pos::default(); 2];
        let err = ClosedOrbitReport::new(&orbit)
            .write_to(&acc, &ReportHeader::default(), &mut Vec::new())
            .unwrap_err();
        assert!(matches!(
            err,
            ReportError::InconsistentDimensions {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }
}
