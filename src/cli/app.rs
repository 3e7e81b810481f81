//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands::{self, Context};
use dockscan::output::OutputMode;

/// dockscan - Reconcile scanned barcodes against an unloading manifest
#[derive(Parser, Debug)]
#[command(
    name = "dockscan",
    version,
    about = "Reconcile scanned barcodes against an unloading manifest",
    long_about = "Track a truck unload against its expected manifest.\n\n\
                  Load the manifest, scan every unit (or sub-unit) that comes off,\n\
                  and send the comparison report when unloading is done."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding config.toml and the session snapshot
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a manifest, replacing the current session
    Load {
        #[command(flatten)]
        source: SourceArgs,

        /// Replace a session that already has scans
        #[arg(short, long)]
        force: bool,
    },

    /// Submit one or more scanned codes
    Scan {
        /// Codes, in scan order
        #[arg(required = true, allow_hyphen_values = true)]
        codes: Vec<String>,
    },

    /// Read scanner input from stdin, debounced
    Listen {
        /// Quiet period before input is submitted (overrides config)
        #[arg(long, value_name = "MS")]
        debounce_ms: Option<u64>,
    },

    /// Show per-item progress
    Status {
        /// List this primary code first
        #[arg(long)]
        focus: Option<String>,
    },

    /// Build and send the session report
    Report(ReportArgs),

    /// End the session and delete all scanned data
    Finish {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Inspect or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

/// Where to load the manifest from
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Local CSV export
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// URL of a CSV export
    #[arg(long)]
    pub url: Option<String>,

    /// Client name from the [clients] config table
    #[arg(long)]
    pub client: Option<String>,
}

/// Report header and delivery options
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Vehicle plate
    #[arg(long)]
    pub placa: Option<String>,

    /// Sender / carrier
    #[arg(long)]
    pub remitente: Option<String>,

    /// Report date (defaults to today)
    #[arg(long)]
    pub fecha: Option<String>,

    /// Checkpoint site
    #[arg(long)]
    pub sede: Option<String>,

    /// Endpoint to send to (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print the payload instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default config.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let ctx = Context::new(cli.home.as_deref(), output_mode);

    match cli.command {
        Some(Command::Load { source, force }) => commands::load(&source, force, &ctx),
        Some(Command::Scan { codes }) => commands::scan(&codes, &ctx),
        Some(Command::Listen { debounce_ms }) => commands::listen(debounce_ms, &ctx),
        Some(Command::Status { focus }) => commands::status(focus.as_deref(), &ctx),
        Some(Command::Report(args)) => commands::report(args, &ctx),
        Some(Command::Finish { yes }) => commands::finish(yes, &ctx),
        Some(Command::Config { action }) => commands::config(&action, &ctx),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("dockscan v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
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
                println!("dockscan v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'dockscan --help' for usage");
                println!("Run 'dockscan load --file <manifest.csv>' to get started");
            }
            Ok(())
        },
    }
}
