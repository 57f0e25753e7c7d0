//! Sudoku Grid Validator
//!
//! Checks whether a 9x9 grid of symbols satisfies the structural rules of a
//! completed Sudoku: 9 distinct symbols in every row, every column, and every
//! 3x3 region.
//!
//! This library provides:
//! - Parsing of a raw text blob into a structured grid
//! - Row, column, and region uniqueness checks
//! - Configuration management for the `sudoku-check` binary

pub mod config;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use parser::{Grid, ParseError, parse};
pub use validation::{Diagnostic, ValidationResult, validate, validate_grid};
