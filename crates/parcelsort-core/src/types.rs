//! Core types for ParcelSort

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical measurements of a single package
///
/// Lengths are in centimeters, mass is in kilograms. The value is built
/// right before classification and carries no identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageMeasurement {
    /// Width in centimeters
    pub width: f64,

    /// Height in centimeters
    pub height: f64,

    /// Length in centimeters
    pub length: f64,

    /// Mass in kilograms
    pub mass: f64,
}

impl PackageMeasurement {
    /// Create a new measurement. No validation happens here.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    /// Volume in cubic centimeters
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// The three spatial dimensions
    pub fn dimensions(&self) -> [f64; 3] {
        [self.width, self.height, self.length]
    }

    /// All four inputs, in validation order
    pub fn fields(&self) -> [(Field, f64); 4] {
        [
            (Field::Width, self.width),
            (Field::Height, self.height),
            (Field::Length, self.length),
            (Field::Mass, self.mass),
        ]
    }
}

/// Names one of the four measurement inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Width,
    Height,
    Length,
    Mass,
}

impl Field {
    /// All fields in validation order
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    /// Field name as it appears in input records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Length => "length",
            Self::Mass => "mass",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handling queue a package is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Neither bulky nor heavy
    Standard,
    /// Bulky or heavy, but not both
    Special,
    /// Both bulky and heavy
    Rejected,
}

impl Category {
    /// Wire identifier of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Special => "SPECIAL",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three category identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(Self::Standard),
            "SPECIAL" => Ok(Self::Special),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
