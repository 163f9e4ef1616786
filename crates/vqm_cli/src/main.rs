//! VQM CLI: the command-line front end for netlist translation.
//!
//! Provides `vqm translate` to map every primitive instance of a netlist onto
//! the architecture catalog and write a report, `vqm check` for structural
//! validation only, and `vqm lookup` to query the catalog for a single model.

#![warn(missing_docs)]

mod check;
mod lookup;
mod pipeline;
mod translate;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// VQM: map a technology-mapped netlist onto an architecture description.
#[derive(Parser, Debug)]
#[command(name = "vqm", version, about = "VQM netlist translator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `vqm.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a netlist and resolve every instance against the catalog.
    Translate(TranslateArgs),
    /// Run structural validation only.
    Check(CheckArgs),
    /// Look up a single model name in the catalog.
    Lookup(LookupArgs),
}

/// Arguments for the `vqm translate` subcommand.
#[derive(Parser, Debug)]
pub struct TranslateArgs {
    /// Netlist file (`.json`). Overrides `input.netlist`.
    #[arg(short, long)]
    pub netlist: Option<String>,

    /// Architecture catalog (`.toml`). Overrides `input.catalog`.
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Report output path. Overrides `output.report`.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report format. Overrides `output.format`.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Resolve instances in parallel.
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the `vqm check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Netlist file (`.json`). Overrides `input.netlist`.
    #[arg(short, long)]
    pub netlist: Option<String>,
}

/// Arguments for the `vqm lookup` subcommand.
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// The exact model name to look up.
    pub name: String,

    /// Architecture catalog (`.toml`). Overrides `input.catalog`.
    #[arg(short, long)]
    pub catalog: Option<String>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Pretty-printed JSON.
    Json,
    /// Plain-text table.
    Text,
}

impl From<ReportFormat> for vqm_config::ReportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => vqm_config::ReportFormat::Json,
            ReportFormat::Text => vqm_config::ReportFormat::Text,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Translate(ref args) => translate::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
        Command::Lookup(ref args) => lookup::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            pipeline::report_fatal(&*e, &global);
            process::exit(1);
        }
    }
}
