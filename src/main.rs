//! CLI entry point for the circular sixteen-tile solver

use circle16::io::cli::{BoardProcessor, Cli};
use clap::Parser;

fn main() -> circle16::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let mut processor = BoardProcessor::new(cli);
    processor.process().map(|_lines| ())
}
