//! ParcelSort Classifiers
//!
//! Dispatches packages to a handling queue from their dimensions and mass.
//!
//! Classification runs in two stages:
//! - Validation: every input must be a finite, non-negative real number
//! - Dispatch: the bulky and heavy checks are combined into a [`Category`]
//!
//! Both stages are pure; a [`PackageSorter`] can be shared freely across threads.
//! Input coming from a text boundary (JSON, YAML) goes through the [`input`]
//! module, which reports non-numeric fields as type mismatches.

pub mod bulky;
pub mod check;
pub mod config;
pub mod heavy;
pub mod input;
pub mod sorter;
pub mod validation;

pub use bulky::BulkinessCheck;
pub use check::{dispatch, PackageCheck};
pub use config::{SorterConfig, Thresholds};
pub use heavy::HeavinessCheck;
pub use input::{
    classify_json, classify_record, classify_values, classify_yaml, measurement_from_value,
    measurement_from_values, measurement_from_yaml,
};
pub use parcelsort_core::{Category, Error, Field, PackageMeasurement, Result};
pub use sorter::{classify, classify_measurement, is_bulky, is_heavy, PackageSorter};
pub use validation::validate;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::check::{dispatch, PackageCheck};
    pub use crate::config::{SorterConfig, Thresholds};
    pub use crate::sorter::{classify, PackageSorter};
    pub use parcelsort_core::prelude::*;
}
