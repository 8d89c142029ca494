//! Translation of query validation failures into 400 errors.
//!
//! The error `details` name the offending field and a stable code so logs can
//! be filtered without parsing messages.

use serde_json::json;

use crate::domain::{Error, JeepValidationError};

/// Request field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const MODEL: Self = Self("model");
    pub(crate) const TRIM: Self = Self("trim");
    pub(crate) const JEEP: Self = Self("jeep");

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

fn classify(err: &JeepValidationError) -> (FieldName, &'static str) {
    match err {
        JeepValidationError::MissingModel => (FieldName::MODEL, "missing_field"),
        JeepValidationError::UnknownModel { .. } => (FieldName::MODEL, "unknown_model"),
        JeepValidationError::MissingTrim => (FieldName::TRIM, "missing_field"),
        JeepValidationError::EmptyTrim => (FieldName::TRIM, "empty_trim"),
        JeepValidationError::TrimTooLong { .. } => (FieldName::TRIM, "trim_too_long"),
        JeepValidationError::TrimInvalidCharacters => (FieldName::TRIM, "invalid_characters"),
        JeepValidationError::InvalidDoorCount { .. }
        | JeepValidationError::InvalidWheelSize { .. }
        | JeepValidationError::NegativeBasePrice => (FieldName::JEEP, "invalid_record"),
    }
}

/// Map a failed query validation to an invalid-request error.
///
/// `value` is the raw input for the failing field, when there was one.
pub(crate) fn jeep_query_error(err: &JeepValidationError, value: Option<&str>) -> Error {
    let (field, code) = classify(err);
    let details = match value {
        Some(value) => json!({ "field": field.as_str(), "value": value, "code": code }),
        None => json!({ "field": field.as_str(), "code": code }),
    };
    Error::invalid_request(err.to_string()).with_details(details)
}
