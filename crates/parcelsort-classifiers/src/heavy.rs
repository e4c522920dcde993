//! Heaviness check

use crate::check::PackageCheck;
use crate::config::Thresholds;
use parcelsort_core::PackageMeasurement;

/// Flags packages whose mass reaches the heavy limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeavinessCheck {
    mass_kg: f64,
}

impl HeavinessCheck {
    /// Create a check with an explicit mass limit
    pub fn new(mass_kg: f64) -> Self {
        Self { mass_kg }
    }

    /// Create a check from sorter thresholds
    pub fn from_thresholds(thresholds: &Thresholds) -> Self {
        Self::new(thresholds.mass_kg)
    }
}

impl Default for HeavinessCheck {
    fn default() -> Self {
        Self::from_thresholds(&Thresholds::default())
    }
}

impl PackageCheck for HeavinessCheck {
    fn check(&self, package: &PackageMeasurement) -> bool {
        package.mass >= self.mass_kg
    }

    fn name(&self) -> &str {
        "heavy"
    }
}
