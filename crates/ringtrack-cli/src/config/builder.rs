use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::ReportArgs;
use crate::error::{CliError, Result};
use ringtrack::core::io::report::ReportHeader;
use std::path::Path;

/// Resolves the report header: CLI flags, then `--set` values and the config file,
/// then built-in defaults.
pub fn build_report_header(args: &ReportArgs, config_path: Option<&Path>) -> Result<ReportHeader> {
    let defaults = DefaultsConfig::default();

    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let report = file_config.report.take().unwrap_or_default();

    Ok(ReportHeader {
        tool: report.tool.unwrap_or(defaults.tool),
        version: env!("CARGO_PKG_VERSION").to_string(),
        organization: args
            .organization
            .clone()
            .or(report.organization)
            .unwrap_or(defaults.organization),
        contact: args
            .contact
            .clone()
            .or(report.contact)
            .unwrap_or(defaults.contact),
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;
        let report = config.report.get_or_insert_with(Default::default);
        let value = Some(value.trim_matches('"').to_string());
        match key.trim() {
            "report.tool" => report.tool = value,
            "report.organization" => report.organization = value,
            "report.contact" => report.contact = value,
            other => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    other
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn report_args(extra: &[&str]) -> ReportArgs {
        let mut argv = vec![
            "ringtrack", "report", "closed-orbit", "-l", "ring.toml", "-i", "cod.csv", "-o",
            "cod.txt",
        ];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Report(args) => args,
            other => panic!("Expected 'report' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn defaults_apply_without_config() {
        let header = build_report_header(&report_args(&[]), None).unwrap();
        let defaults = DefaultsConfig::default();
        assert_eq!(header.tool, defaults.tool);
        assert_eq!(header.organization, defaults.organization);
        assert_eq!(header.contact, defaults.contact);
        assert_eq!(header.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn file_values_override_defaults_and_cli_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ringtrack.toml");
        fs::write(
            &path,
            r#"
            [report]
            organization = "Beam Dynamics Group"
            contact = "bd@example.org"
            "#,
        )
        .unwrap();

        let header =
            build_report_header(&report_args(&["--contact", "me@example.org"]), Some(&path))
                .unwrap();
        assert_eq!(header.organization, "Beam Dynamics Group");
        assert_eq!(header.contact, "me@example.org");
        assert_eq!(header.tool, DefaultsConfig::default().tool);
    }

    #[test]
    fn set_values_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ringtrack.toml");
        fs::write(&path, "[report]\ntool = \"from-file\"\n").unwrap();

        let header = build_report_header(
            &report_args(&[
                "-S",
                "report.tool=ringtrack-dev",
                "-S",
                "report.organization=Light Source Division",
            ]),
            Some(&path),
        )
        .unwrap();
        assert_eq!(header.tool, "ringtrack-dev");
        assert_eq!(header.organization, "Light Source Division");
    }

    #[test]
    fn unknown_keys_are_config_errors() {
        let result = build_report_header(&report_args(&["-S", "report.colour=red"]), None);
        assert!(matches!(result, Err(CliError::Config(_))));

        let result = build_report_header(&report_args(&["-S", "report.tool"]), None);
        assert!(matches!(result, Err(CliError::Config(_))));

        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[report]\ncolour = \"red\"\n").unwrap();
        let result = build_report_header(&report_args(&[]), Some(&path));
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
