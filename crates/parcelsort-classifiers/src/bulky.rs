//! Bulkiness check

use crate::check::PackageCheck;
use crate::config::Thresholds;
use parcelsort_core::PackageMeasurement;

/// Flags packages that are too large for standard handling.
///
/// A package is bulky when its volume reaches `volume_cm3`, or when any single
/// dimension reaches `dimension_cm`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulkinessCheck {
    volume_cm3: f64,
    dimension_cm: f64,
}

impl BulkinessCheck {
    /// Create a check with explicit limits
    pub fn new(volume_cm3: f64, dimension_cm: f64) -> Self {
        Self {
            volume_cm3,
            dimension_cm,
        }
    }

    /// Create a check from sorter thresholds
    pub fn from_thresholds(thresholds: &Thresholds) -> Self {
        Self::new(thresholds.volume_cm3, thresholds.dimension_cm)
    }

    /// Whether the volume alone makes the package bulky
    pub fn exceeds_volume(&self, package: &PackageMeasurement) -> bool {
        package.volume() >= self.volume_cm3
    }

    /// Whether any single dimension makes the package bulky
    pub fn exceeds_dimension(&self, package: &PackageMeasurement) -> bool {
        package
            .dimensions()
            .iter()
            .any(|&dimension| dimension >= self.dimension_cm)
    }
}

impl Default for BulkinessCheck {
    fn default() -> Self {
        Self::from_thresholds(&Thresholds::default())
    }
}

impl PackageCheck for BulkinessCheck {
    fn check(&self, package: &PackageMeasurement) -> bool {
        self.exceeds_volume(package) || self.exceeds_dimension(package)
    }

    fn name(&self) -> &str {
        "bulky"
    }
}
