use clap::{Args, Parser, Subcommand, ValueEnum};
use ringtrack::engine::reconfigure::CavityState;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ringtrack - query, reconfigure and report on circular accelerator lattices.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a TOML configuration file with report settings
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print element counts, ring length and element classes of a lattice.
    Summary(LatticeArgs),
    /// List every element with all of its attributes.
    List(LatticeArgs),
    /// Find the elements whose attribute matches (or, with --reverse, differs from) a value.
    Find(FindArgs),
    /// Print the longitudinal position at the entrance of elements.
    Spos(SposArgs),
    /// Assign integration step counts by element class and write the new lattice.
    Steps(StepsArgs),
    /// Switch all RF cavities on or off and write the new lattice.
    Cavity(CavityArgs),
    /// Write a fixed-width report of simulation results.
    Report(ReportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct LatticeArgs {
    /// Path to the lattice file (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub lattice: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindAttribute {
    FamName,
    Angle,
    Frequency,
    PolynomA,
    PolynomB,
    PassMethod,
}

/// Arguments for the `find` subcommand.
#[derive(Args, Debug)]
pub struct FindArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,

    /// Element attribute to match on.
    #[arg(long, value_enum)]
    pub by: FindAttribute,

    /// Value to compare against. Floating-point attributes match exactly.
    #[arg(long, allow_hyphen_values = true)]
    pub value: String,

    /// Multipole order, required for polynom-a and polynom-b.
    #[arg(long, value_name = "INT")]
    pub order: Option<usize>,

    /// Keep the elements whose attribute differs from the value.
    #[arg(long)]
    pub reverse: bool,
}

#[derive(Args, Debug)]
pub struct SposArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,

    /// Strictly ascending element indices; the lattice length stands for ring closure.
    /// Defaults to every element followed by the closure.
    #[arg(value_name = "IDX")]
    pub indices: Vec<usize>,
}

#[derive(Args, Debug)]
pub struct StepsArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,

    /// Path for the reconfigured lattice file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct CavityArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,

    /// Target cavity state: on or off.
    #[arg(long, value_name = "STATE")]
    pub state: CavityState,

    /// Path for the reconfigured lattice file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    ClosedOrbit,
    LinePass,
    RingPass,
    Dynap,
}

/// Arguments for the `report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Kind of report to write.
    #[arg(value_enum)]
    pub kind: ReportKind,

    #[command(flatten)]
    pub lattice: LatticeArgs,

    /// Simulation results (CSV): phase-space points, or the scan grid for `dynap`.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the report.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Element the tracking started at (line-pass and ring-pass).
    #[arg(long, default_value_t = 0, value_name = "INT")]
    pub start_element: usize,

    /// Label line of a dynamic-aperture report.
    #[arg(long, value_name = "TEXT")]
    pub label: Option<String>,

    /// Include tune columns in a dynamic-aperture report.
    #[arg(long)]
    pub tunes: bool,

    /// Override the organization line of the report header.
    #[arg(long, value_name = "TEXT")]
    pub organization: Option<String>,

    /// Override the contact line of the report header.
    #[arg(long, value_name = "TEXT")]
    pub contact: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S report.organization="Beam Dynamics"
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
