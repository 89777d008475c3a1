use clap::{Args, Parser, Subcommand};
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
    about = "molscene - Turn XYZ molecular coordinates into ball-and-stick scenes for miniRT-style ray tracers.",
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
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a `.rt` scene from an XYZ coordinate file.
    Render(RenderArgs),
    /// Print the built-in configuration as TOML, ready to be edited and passed back with --config.
    Defaults,
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    // --- Core Arguments ---
    /// Path to the input XYZ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output scene. Writes to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a scene configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat the first two lines as a standard XYZ header (atom count, comment).
    #[arg(long)]
    pub standard_xyz: bool,

    // --- Style Overrides ---
    /// Override the base sphere radius used for every atom.
    #[arg(long, value_name = "FLOAT")]
    pub sphere_radius: Option<f64>,

    /// Override the multiplier applied to the sphere radius.
    #[arg(long, value_name = "FLOAT")]
    pub radius_scale: Option<f64>,

    /// Override the base cylinder radius used for every bond.
    #[arg(long, value_name = "FLOAT")]
    pub cylinder_radius: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S bonds.default-cutoff=1.7
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
