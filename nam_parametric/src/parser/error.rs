//! Schema errors for parametric config parsing

use crate::logging::codes::{self, Code};
use thiserror::Error;

/// Result type for parametric parsing operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Parametric config schema violations
///
/// Parsing is fail-fast: the first violation found is returned and no
/// descriptors are produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// The parametric block itself is not an object
    #[error("Expected `config.parametric` to be a JSON object, found {actual_type}")]
    NotAnObject { actual_type: String },

    /// A parameter definition is not an object
    #[error("Parameter definition for `{name}` must be a JSON object, found {actual_type}")]
    DefinitionNotObject { name: String, actual_type: String },

    /// `type` is absent or not a string
    #[error("Parameter `{name}` is missing string field `type`")]
    MissingType { name: String },

    /// `default_value` is absent
    #[error("Parameter `{name}` is missing field `default_value`")]
    MissingDefaultValue { name: String },

    /// `default_value` has a JSON type the parameter kind cannot use
    #[error("{kind} parameter `{name}` must have {expected} `default_value`, found {actual_type}")]
    InvalidDefaultValue {
        name: String,
        kind: String,
        expected: String,
        actual_type: String,
    },

    /// `minval` or `maxval` is present, not null, and not a number
    #[error("Continuous parameter `{name}` has non-numeric `{bound}` ({actual_type})")]
    NonNumericBound {
        name: String,
        bound: String,
        actual_type: String,
    },

    /// `minval` > `maxval`
    #[error("Continuous parameter `{name}` has `minval` ({min_value}) > `maxval` ({max_value})")]
    InvertedBounds {
        name: String,
        min_value: f64,
        max_value: f64,
    },

    /// `type` names neither `boolean` nor `continuous`
    #[error("Unrecognized parameter type `{type_name}` for `{name}`")]
    UnrecognizedType { name: String, type_name: String },
}

impl SchemaError {
    pub fn not_an_object(actual_type: &str) -> Self {
        Self::NotAnObject {
            actual_type: actual_type.to_string(),
        }
    }

    pub fn definition_not_object(name: &str, actual_type: &str) -> Self {
        Self::DefinitionNotObject {
            name: name.to_string(),
            actual_type: actual_type.to_string(),
        }
    }

    pub fn missing_type(name: &str) -> Self {
        Self::MissingType {
            name: name.to_string(),
        }
    }

    pub fn missing_default_value(name: &str) -> Self {
        Self::MissingDefaultValue {
            name: name.to_string(),
        }
    }

    /// Boolean default that is neither a boolean nor a number
    pub fn invalid_boolean_default(name: &str, actual_type: &str) -> Self {
        Self::InvalidDefaultValue {
            name: name.to_string(),
            kind: "Boolean".to_string(),
            expected: "a numeric or boolean".to_string(),
            actual_type: actual_type.to_string(),
        }
    }

    /// Continuous default that is not a number
    pub fn invalid_continuous_default(name: &str, actual_type: &str) -> Self {
        Self::InvalidDefaultValue {
            name: name.to_string(),
            kind: "Continuous".to_string(),
            expected: "a numeric".to_string(),
            actual_type: actual_type.to_string(),
        }
    }

    pub fn non_numeric_bound(name: &str, bound: &str, actual_type: &str) -> Self {
        Self::NonNumericBound {
            name: name.to_string(),
            bound: bound.to_string(),
            actual_type: actual_type.to_string(),
        }
    }

    pub fn inverted_bounds(name: &str, min_value: f64, max_value: f64) -> Self {
        Self::InvertedBounds {
            name: name.to_string(),
            min_value,
            max_value,
        }
    }

    pub fn unrecognized_type(name: &str, type_name: &str) -> Self {
        Self::UnrecognizedType {
            name: name.to_string(),
            type_name: type_name.to_string(),
        }
    }

    /// Name of the offending parameter, when the failure is tied to one
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            Self::NotAnObject { .. } => None,
            Self::DefinitionNotObject { name, .. }
            | Self::MissingType { name }
            | Self::MissingDefaultValue { name }
            | Self::InvalidDefaultValue { name, .. }
            | Self::NonNumericBound { name, .. }
            | Self::InvertedBounds { name, .. }
            | Self::UnrecognizedType { name, .. } => Some(name),
        }
    }

    /// Get appropriate error code for logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::NotAnObject { .. } => codes::schema::NOT_AN_OBJECT,
            Self::DefinitionNotObject { .. } => codes::schema::DEFINITION_NOT_OBJECT,
            Self::MissingType { .. } => codes::schema::MISSING_TYPE,
            Self::MissingDefaultValue { .. } => codes::schema::MISSING_DEFAULT_VALUE,
            Self::InvalidDefaultValue { .. } => codes::schema::INVALID_DEFAULT_VALUE,
            Self::NonNumericBound { .. } => codes::schema::NON_NUMERIC_BOUND,
            Self::InvertedBounds { .. } => codes::schema::INVERTED_BOUNDS,
            Self::UnrecognizedType { .. } => codes::schema::UNRECOGNIZED_TYPE,
        }
    }

    /// Get error type for context
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::NotAnObject { .. } => "NotAnObject",
            Self::DefinitionNotObject { .. } => "DefinitionNotObject",
            Self::MissingType { .. } => "MissingType",
            Self::MissingDefaultValue { .. } => "MissingDefaultValue",
            Self::InvalidDefaultValue { .. } => "InvalidDefaultValue",
            Self::NonNumericBound { .. } => "NonNumericBound",
            Self::InvertedBounds { .. } => "InvertedBounds",
            Self::UnrecognizedType { .. } => "UnrecognizedType",
        }
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}
