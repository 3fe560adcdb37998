//! Command-line interface definitions for Bourse Digest.
//!
//! Every option is optional: without arguments the tool scrapes the default
//! Investir sections and prints the listing to the terminal.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Bourse Digest application.
///
/// # Examples
///
/// ```sh
/// # Print the listing only
/// bourse_digest
///
/// # Show the detail view of the third article
/// bourse_digest --show 2
///
/// # Write the JSON and Markdown editions, keeping 30% of each article
/// bourse_digest -j ./json -m ./markdown -r 0.3
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "BOURSE_DIGEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output directory for the JSON edition
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Output directory for the Markdown edition
    #[arg(short, long)]
    pub markdown_output_dir: Option<String>,

    /// Share of sentences kept in each summary, overriding the config
    #[arg(short, long)]
    pub ratio: Option<f64>,

    /// Print the detail view of the article at this position in the listing
    #[arg(short, long)]
    pub show: Option<usize>,
}
