//! Loosely-typed input from JSON or YAML boundaries
//!
//! Values decoded from text may be of any type. Each field must be a number;
//! anything else (including booleans) is reported as a type mismatch naming
//! the field and the type that was found.

use crate::sorter::PackageSorter;
use crate::validation::validate_field;
use parcelsort_core::{Category, Error, Field, PackageMeasurement, Result};
use serde_json::Value;

/// Reported as the actual type when a record lacks a field
pub const MISSING: &str = "missing";

/// Name of a JSON value's type, as reported in type mismatch errors
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn number_field(field: Field, value: &Value) -> Result<f64> {
    let number = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::type_mismatch(field, type_name(value)))?,
        other => return Err(Error::type_mismatch(field, type_name(other))),
    };
    validate_field(field, number)
}

/// Build a validated measurement from four loosely-typed values
pub fn measurement_from_values(
    width: &Value,
    height: &Value,
    length: &Value,
    mass: &Value,
) -> Result<PackageMeasurement> {
    Ok(PackageMeasurement::new(
        number_field(Field::Width, width)?,
        number_field(Field::Height, height)?,
        number_field(Field::Length, length)?,
        number_field(Field::Mass, mass)?,
    ))
}

/// Build a validated measurement from a record with `width`, `height`,
/// `length` and `mass` keys. Other keys are ignored.
pub fn measurement_from_value(record: &Value) -> Result<PackageMeasurement> {
    let Value::Object(map) = record else {
        return Err(Error::type_mismatch(Field::Width, type_name(record)));
    };

    let mut values = [0.0; 4];
    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        let value = map
            .get(field.as_str())
            .ok_or_else(|| Error::type_mismatch(field, MISSING))?;
        *slot = number_field(field, value)?;
    }

    let [width, height, length, mass] = values;
    Ok(PackageMeasurement::new(width, height, length, mass))
}

/// Classify four loosely-typed values with the standard thresholds
pub fn classify_values(
    width: &Value,
    height: &Value,
    length: &Value,
    mass: &Value,
) -> Result<Category> {
    let package = measurement_from_values(width, height, length, mass)?;
    PackageSorter::new().classify_measurement(&package)
}

/// Classify a record with the standard thresholds
pub fn classify_record(record: &Value) -> Result<Category> {
    let package = measurement_from_value(record)?;
    PackageSorter::new().classify_measurement(&package)
}

/// Parse a JSON record and classify it
pub fn classify_json(json: &str) -> Result<Category> {
    let record: Value = serde_json::from_str(json)?;
    classify_record(&record)
}

/// Name of a YAML value's type, using the same names as [`type_name`]
pub fn yaml_type_name(value: &serde_yaml::Value) -> &'static str {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => "null",
        Yaml::Bool(_) => "bool",
        Yaml::Number(_) => "number",
        Yaml::String(_) => "string",
        Yaml::Sequence(_) => "array",
        Yaml::Mapping(_) => "object",
        Yaml::Tagged(_) => "tagged",
    }
}

// YAML keeps `.inf` and `.nan` as numbers, so they reach the finiteness check.
fn yaml_number_field(field: Field, value: &serde_yaml::Value) -> Result<f64> {
    let number = match value {
        serde_yaml::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::type_mismatch(field, yaml_type_name(value)))?,
        other => return Err(Error::type_mismatch(field, yaml_type_name(other))),
    };
    validate_field(field, number)
}

/// Build a validated measurement from a YAML record
pub fn measurement_from_yaml(record: &serde_yaml::Value) -> Result<PackageMeasurement> {
    let serde_yaml::Value::Mapping(map) = record else {
        return Err(Error::type_mismatch(Field::Width, yaml_type_name(record)));
    };

    let mut values = [0.0; 4];
    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        let value = map
            .get(field.as_str())
            .ok_or_else(|| Error::type_mismatch(field, MISSING))?;
        *slot = yaml_number_field(field, value)?;
    }

    let [width, height, length, mass] = values;
    Ok(PackageMeasurement::new(width, height, length, mass))
}

/// Parse a YAML record and classify it
pub fn classify_yaml(yaml: &str) -> Result<Category> {
    let record: serde_yaml::Value = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("invalid package record: {}", e)))?;
    let package = measurement_from_yaml(&record)?;
    PackageSorter::new().classify_measurement(&package)
}
