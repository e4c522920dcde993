//! Check trait and category dispatch

use parcelsort_core::{Category, PackageMeasurement};

/// A yes/no property of a validated package
pub trait PackageCheck: Send + Sync {
    /// Evaluate the check. The measurement must already be validated.
    fn check(&self, package: &PackageMeasurement) -> bool;

    /// Get the check name
    fn name(&self) -> &str;
}

/// Map the bulky and heavy outcomes to a handling category
///
/// | bulky | heavy | category |
/// |-------|-------|----------|
/// | yes   | yes   | Rejected |
/// | yes   | no    | Special  |
/// | no    | yes   | Special  |
/// | no    | no    | Standard |
pub fn dispatch(bulky: bool, heavy: bool) -> Category {
    match (bulky, heavy) {
        (true, true) => Category::Rejected,
        (true, false) | (false, true) => Category::Special,
        (false, false) => Category::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        assert_eq!(dispatch(true, true), Category::Rejected);
        assert_eq!(dispatch(true, false), Category::Special);
        assert_eq!(dispatch(false, true), Category::Special);
        assert_eq!(dispatch(false, false), Category::Standard);
    }
}
