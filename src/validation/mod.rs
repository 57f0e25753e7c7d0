//! Validation Engine
//!
//! Clean separation of validation logic from parsing concerns.

pub mod engine;

pub use engine::{Diagnostic, Severity, check_columns, check_regions, check_rows};
pub use engine::{validate, validate_grid};

// Re-export common types
pub use engine::ValidationResult;
