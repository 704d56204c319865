use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nearest-neighbor tours for 2D point sets
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct UserQuery {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub usage: Usage,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Usage {
    /// Build a tour over the points in FILE
    Solve {
        /// Text file with `<id> <x> <y>` lines, or a .json points file
        #[arg(value_name = "FILE")]
        filename: PathBuf,

        /// Try every point as the start and keep the shortest tour
        #[arg(long = "best-start")]
        best_start: bool,

        /// Print the tour as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a random problem to FILE
    Generate {
        #[arg(value_name = "COUNT")]
        points: u32,

        #[arg(value_name = "FILE")]
        filename: PathBuf,

        #[arg(long = "max-x", value_name = "MAX_X", default_value_t = 1000.0)]
        max_x: f64,

        #[arg(long = "max-y", value_name = "MAX_Y", default_value_t = 1000.0)]
        max_y: f64,

        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
}

impl UserQuery {
    pub fn tracing_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
