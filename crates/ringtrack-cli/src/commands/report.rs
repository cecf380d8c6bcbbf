use super::load_accelerator;
use crate::cli::{ReportArgs, ReportKind};
use crate::config::build_report_header;
use crate::error::Result;
use ringtrack::core::io::points::{read_dynap_grid_from_path, read_points_from_path};
use ringtrack::core::io::report::{
    ClosedOrbitReport, DynApGridReport, LinePassReport, Report, ReportHeader, RingPassReport,
};
use ringtrack::core::models::accelerator::Accelerator;
use std::path::Path;
use tracing::info;

const DEFAULT_DYNAP_LABEL: &str = "[dynap]";

pub fn run(args: ReportArgs, config_path: Option<&Path>) -> Result<()> {
    let header = build_report_header(&args, config_path)?;
    let accelerator = load_accelerator(&args.lattice.lattice)?;

    write_report(&args, &accelerator, &header)?;

    println!("Report written to: {}", args.output.display());
    Ok(())
}

pub(crate) fn write_report(
    args: &ReportArgs,
    accelerator: &Accelerator,
    header: &ReportHeader,
) -> Result<()> {
    info!("Reading simulation results from {:?}", &args.input);
    match args.kind {
        ReportKind::ClosedOrbit => {
            let orbit = read_points_from_path(&args.input)?;
            ClosedOrbitReport::new(&orbit).write_to_path(accelerator, header, &args.output)?;
        }
        ReportKind::LinePass => {
            let points = read_points_from_path(&args.input)?;
            LinePassReport::new(&points, args.start_element).write_to_path(
                accelerator,
                header,
                &args.output,
            )?;
        }
        ReportKind::RingPass => {
            let points = read_points_from_path(&args.input)?;
            RingPassReport::new(&points, args.start_element).write_to_path(
                accelerator,
                header,
                &args.output,
            )?;
        }
        ReportKind::Dynap => {
            let grid = read_dynap_grid_from_path(&args.input)?;
            let label = args.label.as_deref().unwrap_or(DEFAULT_DYNAP_LABEL);
            DynApGridReport::new(&grid, label)
                .with_tunes(args.tunes)
                .write_to_path(accelerator, header, &args.output)?;
        }
    }
    info!(kind = ?args.kind, "Report written to {:?}", &args.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::commands::test_support::write_ring;
    use crate::error::CliError;
    use clap::Parser;
    use ringtrack::core::status::Status;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn report_args(dir: &TempDir, kind: &str, input: &str, extra: &[&str]) -> ReportArgs {
        let lattice = write_ring(dir);
        let input_path = dir.path().join("input.csv");
        fs::write(&input_path, input).unwrap();
        let output = dir.path().join("report.txt");

        let mut argv: Vec<String> = vec![
            "ringtrack".into(),
            "report".into(),
            kind.into(),
            "-l".into(),
            lattice.display().to_string(),
            "-i".into(),
            input_path.display().to_string(),
            "-o".into(),
            output.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        match Cli::parse_from(argv).command {
            Commands::Report(args) => args,
            other => panic!("Expected 'report' subcommand, got {:?}", other),
        }
    }

    fn render(args: &ReportArgs) -> Result<String> {
        let accelerator = load_accelerator(&args.lattice.lattice)?;
        write_report(args, &accelerator, &ReportHeader::default())?;
        Ok(fs::read_to_string(&args.output)?)
    }

    const FIVE_POINTS: &str = "rx,px,ry,py,de,dl\n\
        1e-3,0,0,0,0,0\n0,0,0,0,0,0\n0,0,0,0,0,0\n0,0,0,0,0,0\n0,0,0,0,0,0\n";

    #[test]
    fn closed_orbit_report_has_a_row_per_element() {
        let dir = tempfile::tempdir().unwrap();
        let text = render(&report_args(&dir, "closed-orbit", FIVE_POINTS, &[])).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "# [closed-orbit]");
        assert_eq!(lines.len(), 13 + 5);
        assert!(lines[13].starts_with("00001 START"));
        assert!(lines[17].starts_with("00005 RF"));
    }

    #[test]
    fn line_pass_report_honours_start_element() {
        let dir = tempfile::tempdir().unwrap();
        let input = "rx,px,ry,py,de,dl\n0,0,0,0,0,0\n";
        let args = report_args(&dir, "line-pass", input, &["--start-element", "3"]);
        let text = render(&args).unwrap();
        let rows: Vec<&str> = text.lines().skip(13).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].starts_with("00003 QF              +1.30000000000000004E+00"));
        assert!(rows[1].starts_with("00004 RF"));
        assert!(rows[1].ends_with("+NAN"));
        assert!(rows[2].starts_with("00000 START           +0.00000000000000000E+00"));
    }

    #[test]
    fn dynap_report_uses_label_and_tunes() {
        let dir = tempfile::tempdir().unwrap();
        let input = "start_element,lost_turn,lost_element,lost_plane,rx,px,ry,py,de,dl,nux1,nuy1,nux2,nuy2\n\
                     2,10,4,y,0.01,0,0.001,0,0,0,0.1,0.2,0.3,0.4\n";
        let args = report_args(&dir, "dynap", input, &["--label", "[dynap_xy]", "--tunes"]);
        let text = render(&args).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "# [dynap_xy]");
        assert!(lines[11].contains("nuy2"));
        assert!(lines[13].starts_with("2     10    4     2     +2.50000000000000000E-01"));
    }

    #[test]
    fn short_closed_orbit_is_a_report_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = report_args(&dir, "closed-orbit", "rx,px,ry,py,de,dl\n0,0,0,0,0,0\n", &[]);
        let err = render(&args).unwrap_err();
        assert!(matches!(err, CliError::Report(_)));
        assert_eq!(err.status(), Some(Status::InconsistentDimensions));
        assert!(!PathBuf::from(&args.output).exists());
    }
}
