//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::commands;
use tfm_values::adapters::file::SnapshotFormat;
use tfm_values::config::ResolverConfig;
use tfm_values::output::OutputMode;

/// tfm-values - Supported target framework values from evaluation snapshots
#[derive(Parser, Debug)]
#[command(
    name = "tfm-values",
    version,
    about = "Supported target framework values from evaluation snapshots",
    long_about = "Resolve the values a project's TargetFramework property may take.\n\n\
                  A snapshot document holds the evaluated rules of a project.\n\
                  The framework family selects which supported list applies."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of ~/.tfm-values/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the supported target frameworks of a snapshot
    Resolve {
        /// Snapshot document (JSON or TOML)
        snapshot: PathBuf,

        /// Document format (default: from extension)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Fail on supported frameworks without a DisplayName
        #[arg(long)]
        strict: bool,
    },

    /// List the rules a snapshot must contain
    Rules,

    /// Compare two labels in natural order
    Compare {
        /// Left label
        left: String,

        /// Right label
        right: String,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Snapshot document format
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl From<FormatArg> for SnapshotFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Toml => Self::Toml,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    // A broken config must not stop `init --force` from replacing it
    let config = match (&cli.command, &cli.config) {
        (Some(Command::Init { .. }), _) => ResolverConfig::default(),
        (_, Some(path)) => ResolverConfig::load_or_default(path)?,
        (_, None) => ResolverConfig::load()?,
    };

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        config.output.format
    };

    match cli.command {
        Some(Command::Resolve {
            snapshot,
            format,
            strict,
        }) => commands::resolve(
            &snapshot,
            format.map(SnapshotFormat::from),
            strict,
            &config,
            output_mode,
        ),
        Some(Command::Rules) => commands::rules(output_mode),
        Some(Command::Compare { left, right }) => commands::compare(&left, &right, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("tfm-values v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        Some(Command::Init { force }) => commands::init(cli.config.as_deref(), force, output_mode),
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tfm-values v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'tfm-values --help' for usage");
            }
            Ok(())
        },
    }
}
