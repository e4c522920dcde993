//! ParcelSort Core
//!
//! Core types and error handling shared across ParcelSort components.
//!
//! This crate provides:
//! - The package measurement value and the handling category it maps to
//! - Field identifiers used when reporting invalid input
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Category, Field, PackageMeasurement, ParseCategoryError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Category, Field, PackageMeasurement};
}
