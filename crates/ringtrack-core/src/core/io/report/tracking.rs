use super::{
    Report, ReportError, ReportHeader, element_columns, sci_row, write_column_header,
    write_preamble,
};
use crate::core::models::accelerator::Accelerator;
use crate::core::models::tracking::Pos;
use crate::engine::index_set::IndexSet;
use crate::engine::positions::find_spos;
use std::io::Write;

const KEY_WIDTH: usize = 18;

fn check_start(start_element: usize, len: usize) -> Result<(), ReportError> {
    if start_element > 0 && start_element >= len {
        return Err(ReportError::ElementOutOfRange {
            index: start_element,
            len,
        });
    }
    Ok(())
}

/// Element indices visited by a one-turn pass starting at `start_element`.
fn cyclic_indices(start_element: usize, len: usize) -> impl Iterator<Item = usize> {
    (0..len).map(move |i| (start_element + i) % len)
}

/// Single-pass tracking result: `points[i]` is the particle at the entrance of
/// element `(start_element + i) mod N`.
///
/// Every element gets a row. Elements past the end of `points` (the particle was
/// lost) print NaN phase-space coordinates; `s` restarts at zero when the pass
/// wraps around to element 0.
#[derive(Debug, Clone, Copy)]
pub struct LinePassReport<'a> {
    points: &'a [Pos],
    start_element: usize,
}

impl<'a> LinePassReport<'a> {
    pub fn new(points: &'a [Pos], start_element: usize) -> Self {
        Self {
            points,
            start_element,
        }
    }
}

impl Report for LinePassReport<'_> {
    fn write_to(
        &self,
        accelerator: &Accelerator,
        header: &ReportHeader,
        writer: &mut impl Write,
    ) -> Result<(), ReportError> {
        let lattice = &accelerator.lattice;
        check_start(self.start_element, lattice.len())?;

        write_preamble(writer, header, Some("[track_linepass]"), accelerator, KEY_WIDTH)?;
        write_column_header(
            writer,
            &element_columns(&[
                "s[m]", "rx[m]", "px[rad]", "ry[m]", "py[rad]", "de", "dl[m]",
            ]),
        )?;

        // The entrance position of each element is also where a wrapped pass
        // finds it, since s restarts at element 0.
        let spos = find_spos(lattice, IndexSet::range(lattice.len() + 1).as_slice())?;
        let lost = Pos::nan();
        for (i, el_idx) in cyclic_indices(self.start_element, lattice.len()).enumerate() {
            let p = self.points.get(i).unwrap_or(&lost);
            writeln!(
                writer,
                "{:05} {:<15} {}",
                el_idx,
                lattice[el_idx].fam_name,
                sci_row(&[spos[el_idx], p.rx, p.px, p.ry, p.py, p.de, p.dl])
            )?;
        }
        Ok(())
    }
}

/// Turn-by-turn tracking result at a fixed observation point.
///
/// Rows follow the same cyclic element order as [`LinePassReport`], with the
/// phase-space fields ordered `rx, ry, de, px, py, dl`.
#[derive(Debug, Clone, Copy)]
pub struct RingPassReport<'a> {
    points: &'a [Pos],
    start_element: usize,
}

impl<'a> RingPassReport<'a> {
    pub fn new(points: &'a [Pos], start_element: usize) -> Self {
        Self {
            points,
            start_element,
        }
    }
}

impl Report for RingPassReport<'_> {
    fn write_to(
        &self,
        accelerator: &Accelerator,
        header: &ReportHeader,
        writer: &mut impl Write,
    ) -> Result<(), ReportError> {
        let lattice = &accelerator.lattice;
        check_start(self.start_element, lattice.len())?;

        write_preamble(writer, header, Some("[track_ringpass]"), accelerator, KEY_WIDTH)?;
        write_column_header(
            writer,
            &element_columns(&["rx[m]", "ry[m]", "de", "px[rad]", "py[rad]", "dl[m]"]),
        )?;

        let lost = Pos::nan();
        for (i, el_idx) in cyclic_indices(self.start_element, lattice.len()).enumerate() {
            let p = self.points.get(i).unwrap_or(&lost);
            writeln!(
                writer,
                "{:05} {:<15} {}",
                el_idx,
                lattice[el_idx].fam_name,
                sci_row(&[p.rx, p.ry, p.de, p.px, p.py, p.dl])
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::report::test_support::{accelerator, render};

    const NAN: &str = "                    +NAN";

    fn rows(text: &str) -> Vec<&str> {
        text.lines().skip(13).collect()
    }

    #[test]
    fn line_pass_wraps_and_resets_s() {
        let acc = accelerator();
        let points = vec![Pos::new(1e-3, 0.0, 0.0, 0.0, 0.0, 0.0); 3];
        let text = render(&LinePassReport::new(&points, 1), &acc);

        assert_eq!(text.lines().nth(4), Some("# [track_linepass]"));
        assert_eq!(
            text.lines().nth(5),
            Some("# ebeam_energy[eV]  : 3000000000.000000")
        );
        let rows = rows(&text);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("00001 L2              +1.00000000000000000E+00"));
        assert!(rows[1].starts_with("00002 L3              +3.00000000000000000E+00"));
        assert!(rows[2].starts_with("00000 L1              +0.00000000000000000E+00"));
    }

    #[test]
    fn line_pass_prints_nan_after_particle_loss() {
        let acc = accelerator();
        let points = vec![Pos::default()];
        let text = render(&LinePassReport::new(&points, 0), &acc);
        let rows = rows(&text);

        assert!(!rows[0].contains("NAN"));
        assert!(rows[1].starts_with("00001 L2              +1.00000000000000000E+00"));
        assert_eq!(rows[1].matches(NAN).count(), 6);
        assert_eq!(rows[2].matches(NAN).count(), 6);
    }

    #[test]
    fn ring_pass_reorders_phase_space_fields() {
        let acc = accelerator();
        let points = vec![Pos::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)];
        let text = render(&RingPassReport::new(&points, 2), &acc);

        assert_eq!(text.lines().nth(4), Some("# [track_ringpass]"));
        let rows = rows(&text);
        assert_eq!(rows.len(), 3);
        let fields: Vec<&str> = rows[0].split_whitespace().collect();
        assert_eq!(fields[0], "00002");
        assert_eq!(fields[1], "L3");
        assert_eq!(
            &fields[2..],
            &[
                "+1.00000000000000000E+00",
                "+3.00000000000000000E+00",
                "+5.00000000000000000E+00",
                "+2.00000000000000000E+00",
                "+4.00000000000000000E+00",
                "+6.00000000000000000E+00",
            ]
        );
        assert!(rows[1].starts_with("00000 L1"));
        assert_eq!(rows[2].matches(NAN).count(), 6);
    }

    #[test]
    fn start_element_outside_lattice_is_rejected() {
        let acc = accelerator();
        let err = LinePassReport::new(&[], 3)
            .write_to(&acc, &ReportHeader::default(), &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, ReportError::ElementOutOfRange { index: 3, len: 3 }));
    }
}
