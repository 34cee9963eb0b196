/// Command-line interface and batch processing of board files
pub mod cli;
/// Puzzle constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Reading boards from text and files
pub mod parser;
/// Progress display for running searches
pub mod progress;
