use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vendorup::core::VendorError;

mod cli;

#[derive(Parser)]
#[command(name = "vendorup")]
#[command(about = "Keep vendored third-party packages up to date with GitHub releases")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether vendored packages have a newer release
    Check {
        /// Package directories containing METADATA.yaml
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Replace a vendored package with its latest release
    Update {
        /// Package directory containing METADATA.yaml
        path: PathBuf,
        /// Update even if the recorded version is already the latest
        #[arg(short, long)]
        force: bool,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { paths } => cli::check::run(paths).await,
        Commands::Update { path, force, yes } => {
            cli::update::run(cli::update::UpdateOptions { path, force, yes }).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                VendorError::CheckFailed(_) => {
                    // Per-package errors were already printed
                    eprintln!("\n{}", e);
                }
                _ => {
                    eprintln!("\nError: {}", e);
                }
            }
            ExitCode::FAILURE
        }
    }
}
