use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use yacar::config::Settings;
use yacar::fetch::DEFAULT_BASE_URL;
use yacar::models::RecordKind;

mod commands;

#[derive(Parser)]
#[command(
    name = "yacar",
    about = "Validates and canonically orders yacar registry records",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Registry root holding one directory per chain
    #[arg(short, long, default_value = ".", env = "YACAR_ROOT", global = true)]
    root: PathBuf,

    /// Base URL of the upstream registry
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "YACAR_BASE_URL", global = true)]
    base_url: String,

    /// Group assets by entity, then name, then id (legacy ordering)
    #[arg(long, env = "YACAR_LEGACY_ASSET_ORDER", global = true)]
    legacy_asset_order: bool,

    /// Verification tx markers exempt from tx hash checks (defaults to the known DEX names)
    #[arg(long = "permissioned", value_delimiter = ',', global = true)]
    permissioned: Vec<String>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate registry files (default command)
    Validate {
        /// Only validate these chains
        #[arg(short, long)]
        chain: Vec<String>,

        /// Do not fail on entities nothing references
        #[arg(long)]
        allow_unused_entities: bool,
    },

    /// Rewrite registry files in canonical order
    Sort {
        /// Only sort these chains
        #[arg(short, long)]
        chain: Vec<String>,

        /// Report out-of-order files without rewriting them
        #[arg(long)]
        check: bool,
    },

    /// Download one kind's records for a chain from the upstream registry
    Fetch {
        chain: String,

        #[arg(short, long, value_enum, default_value = "account")]
        kind: RecordKind,

        /// Validate the downloaded batch on its own before printing it
        #[arg(long)]
        validate: bool,
    },

    /// List chains and their record counts
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    let mut settings = Settings {
        root: cli.root,
        base_url: cli.base_url,
        legacy_asset_order: cli.legacy_asset_order,
        permissioned_markers: (!cli.permissioned.is_empty()).then_some(cli.permissioned),
        ..Default::default()
    };

    match cli.command {
        Some(Commands::Validate {
            chain,
            allow_unused_entities,
        }) => {
            settings.check_unused_entities = !allow_unused_entities;
            commands::validate_command(&settings, &chain)?;
        }
        Some(Commands::Sort { chain, check }) => {
            commands::sort_command(&settings, &chain, check)?;
        }
        Some(Commands::Fetch {
            chain,
            kind,
            validate,
        }) => {
            commands::fetch_command(&settings, &chain, kind, validate)?;
        }
        Some(Commands::List) => {
            commands::list_command(&settings)?;
        }
        None => {
            // Default to validate command
            commands::validate_command(&settings, &[])?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("yacar=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("yacar=info"), // -v: info messages
        _ => EnvFilter::new("yacar=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
