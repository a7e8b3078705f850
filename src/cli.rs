use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kerala-lsg-to-sqlite")]
#[command(version, about = "Seed Kerala district and local-body data into SQLite")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full refresh: wipe and reload districts and local bodies
    Seed {
        /// Output SQLite database path
        output_db: PathBuf,

        /// Override the SEC endpoint URL
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Fetch one district's raw records and print them (no database writes)
    Fetch {
        /// Two-digit district code, e.g. 08
        district_code: String,

        /// Override the SEC endpoint URL
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Print the static district master list
    ListDistricts,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
