//! Reads the initial board from whitespace-separated text
//!
//! Tokens are counted before anything else, so malformed input is reported
//! without ever constructing a board or starting a search.

use crate::io::configuration::TILE_COUNT;
use crate::io::error::{Result, SolverError, WithPath};
use crate::puzzle::board::Board;
use std::path::Path;

/// Parse sixteen whitespace-separated tile values
///
/// Line breaks carry no meaning; the tiles are read in row-major order.
///
/// # Errors
///
/// Returns an error if:
/// - The text does not hold exactly sixteen tokens (`MalformedInput`)
/// - A token is not an integer in 0..=255 (`InvalidToken`)
/// - The values are not a permutation of 1..=16 (`InvalidBoard`)
pub fn parse_board(text: &str) -> Result<Board> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != TILE_COUNT {
        return Err(SolverError::MalformedInput {
            path: None,
            found: tokens.len(),
        });
    }

    let mut tiles = [0u8; TILE_COUNT];
    for (position, (slot, token)) in tiles.iter_mut().zip(tokens.iter()).enumerate() {
        *slot = token.parse().map_err(|_parse_error| SolverError::InvalidToken {
            path: None,
            position,
            token: (*token).to_string(),
        })?;
    }

    Board::new(tiles)
}

/// Read and parse a board file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, otherwise any error of
/// [`parse_board`] with the path attached
pub fn read_board(path: &Path) -> Result<Board> {
    let text = std::fs::read_to_string(path).map_err(|source| SolverError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    parse_board(&text).with_path(path)
}
