//! xtask - Development task runner for setkit
//!
//! Usage:
//!   cargo xtask test-matrix [--only <name>] [--dry-run]

mod test_matrix;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for setkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test suite once per supported feature combination
    TestMatrix(test_matrix::TestMatrixArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::TestMatrix(args) => test_matrix::run(&args),
    }
}
