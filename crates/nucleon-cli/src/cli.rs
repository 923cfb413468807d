use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The nucleon developers",
    version,
    about = "nucleon - nuclear-structure observables from the semi-empirical mass formula.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by the stability scans.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format, overriding `output.format` from the config file.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.precision=6
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every SEMF observable of a nucleus.
    Inspect(InspectArgs),
    /// Compute the Q-value of an alpha or beta decay.
    Decay(DecayArgs),
    /// Compute the energy needed to remove a particle from a nucleus.
    Separation(SeparationArgs),
    /// Survey the valley of stability over a range of mass numbers.
    Valley(ValleyArgs),
    /// Locate the neutron and proton drip lines of an element.
    Drip(DripArgs),
    /// Look up a measured nuclide and its empirical binding energy.
    Lookup(LookupArgs),
    /// Tabulate the binding-energy-per-nucleon curve.
    Curve(CurveArgs),
}

/// A nucleus given on the command line as mass number and proton number.
#[derive(Args, Debug, Clone, Copy)]
pub struct NuclideArgs {
    /// Mass number A.
    #[arg(value_name = "A")]
    pub mass_number: u32,

    /// Proton number Z.
    #[arg(value_name = "Z")]
    pub proton_number: u32,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Mass number A.
    #[arg(value_name = "A", required_unless_present = "nuclide", requires = "proton_number")]
    pub mass_number: Option<u32>,

    /// Proton number Z.
    #[arg(value_name = "Z")]
    pub proton_number: Option<u32>,

    /// Inspect a measured nuclide by name (e.g., 'Fe-56') and compare with its measured mass.
    #[arg(short, long, value_name = "NAME", conflicts_with = "mass_number")]
    pub nuclide: Option<String>,

    /// CSV file (`name,a,z,mass`) extending the built-in nuclide table.
    #[arg(long, value_name = "PATH", requires = "nuclide")]
    pub data: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecayArgs {
    #[command(flatten)]
    pub nuclide: NuclideArgs,

    /// Decay mode: 'alpha', 'beta-' or 'beta+'.
    #[arg(short, long, value_name = "MODE", allow_hyphen_values = true)]
    pub mode: String,
}

#[derive(Args, Debug)]
pub struct SeparationArgs {
    #[command(flatten)]
    pub nuclide: NuclideArgs,

    /// Removed particle: 'neutron', 'proton', 'alpha' or 'two-neutron'.
    #[arg(short, long, value_name = "PARTICLE")]
    pub particle: String,
}

/// Inclusive mass-number range overriding the config file.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct RangeArgs {
    /// Lowest mass number scanned.
    #[arg(long = "from", value_name = "A")]
    pub from: Option<u32>,

    /// Highest mass number scanned.
    #[arg(long = "to", value_name = "A")]
    pub to: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ValleyArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Attach the neutron and proton drip lines of each stable element.
    #[arg(long)]
    pub drip_lines: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DripSide {
    Neutron,
    Proton,
    #[default]
    Both,
}

#[derive(Args, Debug)]
pub struct DripArgs {
    /// Proton number Z of the element.
    #[arg(value_name = "Z")]
    pub proton_number: u32,

    /// Which drip line to locate.
    #[arg(long, value_enum, default_value_t = DripSide::Both)]
    pub side: DripSide,
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Nuclide name as listed in the table (e.g., 'U-238').
    #[arg(value_name = "NAME")]
    pub name: String,

    /// CSV file (`name,a,z,mass`) extending the built-in nuclide table.
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub range: RangeArgs,
}
