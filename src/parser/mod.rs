//! Grid Parser
//!
//! Turns a raw text blob into a structured 9x9 [`Grid`].
//! Focused solely on shape: symbol uniqueness lives in the validation engine.

pub mod grid;

pub use grid::{GRID_SIZE, Grid, REGION_SIZE};

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Any run of carriage-return/line-feed characters counts as one row
/// separator, regardless of the line-ending convention of the source.
static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("literal pattern compiles"));

/// A structural problem with the raw input.
///
/// Never escapes [`crate::validation::validate`]; there it folds into an
/// invalid result, indistinguishable at the boundary from a uniqueness
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 9 rows, found {found}")]
    RowCountMismatch { found: usize },

    #[error("row {row} has {found} symbols, expected 9")]
    ColumnCountMismatch { row: usize, found: usize },
}

/// Parse a raw text blob into a `Grid`
///
/// Normalizes every run of line-ending characters into a single separator,
/// splits on it, and requires exactly 9 row tokens of exactly 9 symbols.
/// Note the separator collapse is deliberate and loose: a blank line shifts
/// the row count rather than producing a distinct error, and a space inside
/// a row splits it into extra tokens.
pub fn parse(raw: &str) -> Result<Grid, ParseError> {
    let normalized = LINE_BREAKS.replace_all(raw, " ");
    let tokens: Vec<&str> = normalized.split(' ').collect();

    if tokens.len() != GRID_SIZE {
        return Err(ParseError::RowCountMismatch {
            found: tokens.len(),
        });
    }

    let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
    for (row, token) in tokens.iter().enumerate() {
        let symbols: Vec<char> = token.chars().collect();
        if symbols.len() != GRID_SIZE {
            return Err(ParseError::ColumnCountMismatch {
                row,
                found: symbols.len(),
            });
        }
        for (col, &symbol) in symbols.iter().enumerate() {
            cells[row][col] = symbol;
        }
    }

    Ok(Grid::new(cells))
}
