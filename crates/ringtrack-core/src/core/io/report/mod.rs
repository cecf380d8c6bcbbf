//! Fixed-width text reports of simulation results.
//!
//! Every report shares the same preamble: three identification comment lines, a
//! blank line, an optional `# <label>` line, a `# key : value` block describing the
//! machine state, a blank line and a two-line column header. Floating-point columns
//! are printed in scientific notation with explicit sign, 17 fraction digits and a
//! signed, at least two-digit exponent, right-aligned in 24 columns.

pub mod closed_orbit;
pub mod dynap;
pub mod tracking;

use crate::core::models::accelerator::Accelerator;
use crate::core::status::Status;
use crate::engine::error::QueryError;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use closed_orbit::ClosedOrbitReport;
pub use dynap::DynApGridReport;
pub use tracking::{LinePassReport, RingPassReport};

pub(crate) const NUMBER_WIDTH: usize = 24;
pub(crate) const NUMBER_RULE: &str = "------------------------";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not open '{path}' for writing: {source}", path = path.display())]
    FileNotOpened {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Inconsistent dimensions: expected at least {expected} {what}, found {found}")]
    InconsistentDimensions {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Element index {index} is out of range for a lattice of {len} elements")]
    ElementOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ReportError {
    pub fn status(&self) -> Status {
        match self {
            ReportError::FileNotOpened { .. } | ReportError::Io(_) => Status::FileNotOpened,
            ReportError::InconsistentDimensions { .. } | ReportError::ElementOutOfRange { .. } => {
                Status::InconsistentDimensions
            }
            ReportError::Query(e) => e.status(),
        }
    }
}

/// Identification printed at the top of every report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub tool: String,
    pub version: String,
    pub organization: String,
    pub contact: String,
}

impl Default for ReportHeader {
    fn default() -> Self {
        Self {
            tool: "ringtrack".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            organization: "Accelerator Physics Group".to_string(),
            contact: "accelerator-physics@example.org".to_string(),
        }
    }
}

/// A report that can be rendered for an accelerator.
pub trait Report {
    /// Writes the complete report to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result arrays do not fit the lattice or writing fails.
    fn write_to(
        &self,
        accelerator: &Accelerator,
        header: &ReportHeader,
        writer: &mut impl Write,
    ) -> Result<(), ReportError>;

    /// Renders the report and writes it to `path`.
    ///
    /// The report is rendered in memory first, so a dimension error never leaves a
    /// file behind, and a destination that cannot be created yields
    /// [`ReportError::FileNotOpened`] without touching anything.
    fn write_to_path<P: AsRef<Path>>(
        &self,
        accelerator: &Accelerator,
        header: &ReportHeader,
        path: P,
    ) -> Result<(), ReportError> {
        let path = path.as_ref();
        let mut rendered = Vec::new();
        self.write_to(accelerator, header, &mut rendered)?;

        let mut file = File::create(path).map_err(|source| ReportError::FileNotOpened {
            path: path.to_path_buf(),
            source,
        })?;
        file.write_all(&rendered)?;
        Ok(())
    }
}

/// `%+24.17E` as printed by C.
pub(crate) fn sci(value: f64) -> String {
    let body = if value.is_nan() {
        if value.is_sign_negative() { "-NAN" } else { "+NAN" }.to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "+INF" } else { "-INF" }.to_string()
    } else {
        let raw = format!("{:+.17E}", value);
        match raw.split_once('E') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}E{}{:02}", mantissa, sign, exponent.abs())
            }
            None => raw,
        }
    };
    format!("{:>width$}", body, width = NUMBER_WIDTH)
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

pub(crate) fn write_preamble(
    writer: &mut impl Write,
    header: &ReportHeader,
    label: Option<&str>,
    accelerator: &Accelerator,
    key_width: usize,
) -> io::Result<()> {
    writeln!(writer, "# {} version {}", header.tool, header.version)?;
    writeln!(writer, "# {}", header.organization)?;
    writeln!(writer, "# contact: {}", header.contact)?;
    writeln!(writer)?;
    if let Some(label) = label {
        writeln!(writer, "# {}", label)?;
    }
    let state: [(&str, String); 5] = [
        ("ebeam_energy[eV]", format!("{:.6}", accelerator.energy)),
        ("harmonic_number", accelerator.harmonic_number.to_string()),
        ("cavity_state", on_off(accelerator.cavity_on).to_string()),
        ("radiation_state", on_off(accelerator.radiation_on).to_string()),
        ("chamber_state", on_off(accelerator.vchamber_on).to_string()),
    ];
    for (key, value) in &state {
        writeln!(writer, "# {:<key_width$}: {}", key, value)?;
    }
    writeln!(writer)
}

/// Column names and their dashed rules, each cell left-justified to its width.
pub(crate) fn write_column_header(
    writer: &mut impl Write,
    columns: &[(&str, &str, usize)],
) -> io::Result<()> {
    let names: Vec<String> = columns
        .iter()
        .map(|&(name, _, width)| format!("{:<width$}", name))
        .collect();
    let rules: Vec<String> = columns
        .iter()
        .map(|&(_, rule, width)| format!("{:<width$}", rule))
        .collect();
    writeln!(writer, "{}", names.join(" "))?;
    writeln!(writer, "{}", rules.join(" "))
}

/// Leading `# idx` / `fam_name` columns followed by 24-wide numeric columns.
pub(crate) fn element_columns<'a>(numeric: &[&'a str]) -> Vec<(&'a str, &'a str, usize)> {
    let mut columns = vec![("# idx", "# ---", 5), ("fam_name", "---------------", 15)];
    columns.extend(numeric.iter().map(|name| (*name, NUMBER_RULE, NUMBER_WIDTH)));
    columns
}

/// Joins the formatted values with single spaces.
pub(crate) fn sci_row(values: &[f64]) -> String {
    values.iter().map(|&v| sci(v)).collect::<Vec<_>>().join(" ")
}
