mod reader;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tournament results file in PGN tag format
    file: String,

    /// Print the parsed game records as YAML before the report line
    #[arg(short, long)]
    dump: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let games = reader::parse_pgn_file(&PathBuf::from(cli.file))
        .context("Unable to parse PGN file")?;

    if cli.dump {
        serde_yaml::to_writer(std::io::stdout(), &games)
            .context("Error writing record dump")?;
    }

    let average = report::average_game_length(&games)?;
    println!("Average game length: {}", average);

    Ok(())
}
