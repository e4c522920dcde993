//! Package sorter: validation followed by dispatch

use crate::bulky::BulkinessCheck;
use crate::check::{dispatch, PackageCheck};
use crate::config::{SorterConfig, Thresholds};
use crate::heavy::HeavinessCheck;
use crate::validation::validate;
use parcelsort_core::{Category, PackageMeasurement, Result};
use tracing::debug;

/// Classifies packages into handling categories.
///
/// The sorter holds no mutable state; identical measurements always produce
/// the identical category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageSorter {
    bulky: BulkinessCheck,
    heavy: HeavinessCheck,
}

impl PackageSorter {
    /// Create a sorter with the standard thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sorter with custom thresholds
    pub fn with_thresholds(thresholds: Thresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self {
            bulky: BulkinessCheck::from_thresholds(&thresholds),
            heavy: HeavinessCheck::from_thresholds(&thresholds),
        })
    }

    /// Create a sorter from a loaded configuration
    pub fn from_config(config: &SorterConfig) -> Result<Self> {
        Self::with_thresholds(config.thresholds)
    }

    /// Classify a package given as four separate measurements
    pub fn classify(&self, width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
        self.classify_measurement(&PackageMeasurement::new(width, height, length, mass))
    }

    /// Validate and classify a package
    pub fn classify_measurement(&self, package: &PackageMeasurement) -> Result<Category> {
        validate(package)?;

        let bulky = self.bulky.check(package);
        let heavy = self.heavy.check(package);
        let category = dispatch(bulky, heavy);

        debug!(
            width = package.width,
            height = package.height,
            length = package.length,
            mass = package.mass,
            bulky_check = self.bulky.name(),
            bulky,
            heavy_check = self.heavy.name(),
            heavy,
            category = category.as_str(),
            "classified package"
        );

        Ok(category)
    }

    /// Whether the package is bulky. Assumes a validated package.
    pub fn is_bulky(&self, package: &PackageMeasurement) -> bool {
        self.bulky.check(package)
    }

    /// Whether the package is heavy. Assumes a validated package.
    pub fn is_heavy(&self, package: &PackageMeasurement) -> bool {
        self.heavy.check(package)
    }
}

/// Classify a package using the standard thresholds.
///
/// Fails with `TypeMismatch` for NaN or infinite inputs and with
/// `NegativeValue` for negative ones, checking width, height, length and
/// mass in that order.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
    PackageSorter::new().classify(width, height, length, mass)
}

/// Classify a measurement using the standard thresholds
pub fn classify_measurement(package: &PackageMeasurement) -> Result<Category> {
    PackageSorter::new().classify_measurement(package)
}

/// Bulkiness under the standard thresholds
pub fn is_bulky(package: &PackageMeasurement) -> bool {
    BulkinessCheck::default().check(package)
}

/// Heaviness under the standard thresholds
pub fn is_heavy(package: &PackageMeasurement) -> bool {
    HeavinessCheck::default().check(package)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcelsort_core::{Error, Field};

    #[test]
    fn test_standard() {
        assert_eq!(classify(10.0, 10.0, 10.0, 5.0).unwrap(), Category::Standard);
        assert_eq!(classify(0.0, 0.0, 0.0, 0.0).unwrap(), Category::Standard);
        assert_eq!(classify(99.0, 99.0, 99.0, 19.9).unwrap(), Category::Standard);
    }

    #[test]
    fn test_special() {
        assert_eq!(classify(100.0, 100.0, 100.0, 10.0).unwrap(), Category::Special);
        assert_eq!(classify(150.0, 10.0, 10.0, 5.0).unwrap(), Category::Special);
        assert_eq!(classify(10.0, 10.0, 10.0, 20.0).unwrap(), Category::Special);
    }

    #[test]
    fn test_rejected() {
        assert_eq!(classify(200.0, 150.0, 100.0, 50.0).unwrap(), Category::Rejected);
        assert_eq!(classify(100.0, 100.0, 100.0, 20.0).unwrap(), Category::Rejected);
    }

    #[test]
    fn test_validation_runs_first() {
        // Would be REJECTED if the negative width were ignored.
        let err = classify(-1.0, 200.0, 200.0, 50.0).unwrap_err();
        assert!(matches!(err, Error::NegativeValue { field: Field::Width, .. }));
    }

    #[test]
    fn test_custom_thresholds() {
        let sorter = PackageSorter::with_thresholds(Thresholds {
            volume_cm3: 1_000.0,
            dimension_cm: 50.0,
            mass_kg: 5.0,
        })
        .unwrap();

        assert_eq!(sorter.classify(10.0, 10.0, 10.0, 1.0).unwrap(), Category::Special);
        assert_eq!(sorter.classify(10.0, 10.0, 10.0, 5.0).unwrap(), Category::Rejected);
        assert_eq!(sorter.classify(5.0, 5.0, 5.0, 1.0).unwrap(), Category::Standard);
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let result = PackageSorter::with_thresholds(Thresholds {
            mass_kg: f64::NAN,
            ..Thresholds::default()
        });
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_debug_event_names_checks() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            PackageSorter::new().classify(200.0, 150.0, 100.0, 50.0).unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("bulky_check"), "missing bulky check name: {output}");
        assert!(output.contains("heavy_check"), "missing heavy check name: {output}");
        assert!(output.contains("REJECTED"), "missing category: {output}");
    }

    #[test]
    fn test_check_names() {
        let checks: [&dyn PackageCheck; 2] = [&BulkinessCheck::default(), &HeavinessCheck::default()];
        let names: Vec<_> = checks.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["bulky", "heavy"]);
    }

    #[test]
    fn test_predicates() {
        let tv = PackageMeasurement::new(160.0, 90.0, 15.0, 15.0);
        assert!(is_bulky(&tv));
        assert!(!is_heavy(&tv));
    }
}
