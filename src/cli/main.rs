//! CLI binary entry point for app-schema-cli

#[cfg(feature = "cli")]
use app_schema_sdk::cli::commands::export::{
    ExportArgs, handle_convert, handle_extract, handle_init_config,
};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "app-schema-cli")]
#[command(about = "Extract and convert hosted application schemas")]
#[command(version)]
struct Cli {
    /// Log verbosity (overridden by APP_SCHEMA_LOG or RUST_LOG)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Fetch an application's schema and render it
    Extract {
        /// Application name or base URL
        address: String,
        #[command(flatten)]
        output: OutputOpts,
    },
    /// Render a schema document from a file ('-' for stdin)
    Convert {
        /// Input file path or '-'
        input: String,
        #[command(flatten)]
        output: OutputOpts,
    },
    /// Write a sample .app-schema.toml
    InitConfig {
        /// Directory to write into
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(feature = "cli")]
#[derive(clap::Args)]
struct OutputOpts {
    /// Output format (dbml, mermaid, json); unknown values fall back to dbml
    #[arg(short = 'F', long)]
    format: Option<String>,
    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Overwrite existing files without prompting
    #[arg(short, long)]
    force: bool,
    /// Configuration file (defaults to ./.app-schema.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[cfg(feature = "cli")]
impl From<OutputOpts> for ExportArgs {
    fn from(opts: OutputOpts) -> Self {
        ExportArgs {
            format: opts.format,
            output: opts.output,
            force: opts.force,
            config: opts.config,
        }
    }
}

#[cfg(feature = "cli")]
fn init_logging(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("APP_SCHEMA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Extract { address, output } => handle_extract(&address, &output.into()),
        Commands::Convert { input, output } => handle_convert(&input, &output.into()),
        Commands::InitConfig { dir, force } => handle_init_config(&dir, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
