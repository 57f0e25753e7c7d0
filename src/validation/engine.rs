//! Validation Engine
//!
//! Core validation logic separated from parsing concerns. A completed grid
//! is valid when every row, every column, and every 3x3 region holds 9
//! distinct symbols.

use std::collections::HashSet;

use serde::Serialize;

use crate::parser::{self, GRID_SIZE, Grid, REGION_SIZE};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A diagnostic message for a validation issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
}

/// Result of validating a grid
///
/// The binding contract is the single valid/invalid outcome; the attached
/// diagnostics are a convenience for callers that want to report what failed
/// first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: String) {
        self.diagnostics.push(Diagnostic {
            message,
            severity: Severity::Error,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// The classic integer rendering: 1 for valid, 0 for invalid.
    pub fn code(&self) -> u8 {
        u8::from(self.is_valid())
    }
}

/// True when no symbol repeats among the 9 cells.
///
/// Symbols are compared as opaque tokens via set membership, so the check
/// works unchanged for alphabets other than '1'-'9'.
fn all_distinct(cells: [char; GRID_SIZE]) -> bool {
    let mut seen = HashSet::with_capacity(GRID_SIZE);
    cells.into_iter().all(|symbol| seen.insert(symbol))
}

fn first_duplicate_row(grid: &Grid) -> Option<usize> {
    (0..GRID_SIZE).find(|&row| !all_distinct(grid.row(row)))
}

fn first_duplicate_column(grid: &Grid) -> Option<usize> {
    (0..GRID_SIZE).find(|&col| !all_distinct(grid.column(col)))
}

/// Regions are visited in row-major block order: top-left first,
/// left-to-right, then top-to-bottom.
fn first_duplicate_region(grid: &Grid) -> Option<(usize, usize)> {
    (0..REGION_SIZE)
        .flat_map(|block_row| (0..REGION_SIZE).map(move |block_col| (block_row, block_col)))
        .find(|&(block_row, block_col)| !all_distinct(grid.region(block_row, block_col)))
}

/// Verify every row holds 9 distinct symbols.
pub fn check_rows(grid: &Grid) -> bool {
    first_duplicate_row(grid).is_none()
}

/// Verify every column holds 9 distinct symbols.
pub fn check_columns(grid: &Grid) -> bool {
    first_duplicate_column(grid).is_none()
}

/// Verify every 3x3 region holds 9 distinct symbols.
pub fn check_regions(grid: &Grid) -> bool {
    first_duplicate_region(grid).is_none()
}

/// Validate an already-parsed grid
///
/// Runs the row, column, and region checks in that order and stops at the
/// first failing unit. The order only affects which failure is reported;
/// the overall outcome is the same however the checks are sequenced.
pub fn validate_grid(grid: &Grid) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Some(row) = first_duplicate_row(grid) {
        result.add_error(format!("row {} contains a repeated symbol", row + 1));
    } else if let Some(col) = first_duplicate_column(grid) {
        result.add_error(format!("column {} contains a repeated symbol", col + 1));
    } else if let Some((block_row, block_col)) = first_duplicate_region(grid) {
        result.add_error(format!(
            "region ({block_row}, {block_col}) contains a repeated symbol"
        ));
    }

    log::debug!(
        "grid validation finished: {}",
        if result.is_valid() { "valid" } else { "invalid" }
    );

    result
}

/// Validate a raw text blob end to end
///
/// Parses and then checks rows, columns, and regions. A structural failure
/// surfaces exactly like a uniqueness failure: an invalid result, never an
/// `Err` to the caller. Pure and stateless, so repeated calls on the same
/// input always agree.
pub fn validate(raw: &str) -> ValidationResult {
    match parser::parse(raw) {
        Ok(grid) => validate_grid(&grid),
        Err(err) => {
            log::debug!("parse failed: {err}");
            let mut result = ValidationResult::new();
            result.add_error(err.to_string());
            result
        }
    }
}
