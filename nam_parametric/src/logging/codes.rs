//! Error and success codes with their classification metadata
//!
//! Every code the crate emits is registered here together with its category,
//! severity and recommended action.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Parametric schema violations
pub mod schema {
    use super::Code;

    pub const NOT_AN_OBJECT: Code = Code::new("P001");
    pub const DEFINITION_NOT_OBJECT: Code = Code::new("P002");
    pub const MISSING_TYPE: Code = Code::new("P003");
    pub const MISSING_DEFAULT_VALUE: Code = Code::new("P004");
    pub const INVALID_DEFAULT_VALUE: Code = Code::new("P005");
    pub const NON_NUMERIC_BOUND: Code = Code::new("P006");
    pub const INVERTED_BOUNDS: Code = Code::new("P007");
    pub const UNRECOGNIZED_TYPE: Code = Code::new("P008");
}

/// Input loading failures (reading and decoding model documents)
pub mod input {
    use super::Code;

    pub const IO_ERROR: Code = Code::new("F001");
    pub const INVALID_JSON: Code = Code::new("F002");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const PARAMETERS_PARSED: Code = Code::new("I010");
    pub const MODEL_LOADED: Code = Code::new("I011");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal error",
                "File a bug report with the offending input",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Logging system initialization failure",
                "Check NAM_LOGGING_* environment variables",
            ),
            ErrorMetadata::new(
                "P001",
                "ParametricSchema",
                Severity::High,
                false,
                "Parametric config is not a JSON object",
                "Make `config.parametric` an object keyed by parameter name",
            ),
            ErrorMetadata::new(
                "P002",
                "ParametricSchema",
                Severity::High,
                false,
                "Parameter definition is not a JSON object",
                "Describe each parameter with an object holding `type` and `default_value`",
            ),
            ErrorMetadata::new(
                "P003",
                "ParametricSchema",
                Severity::High,
                false,
                "Parameter definition lacks a string `type` field",
                "Add `\"type\": \"boolean\"` or `\"type\": \"continuous\"`",
            ),
            ErrorMetadata::new(
                "P004",
                "ParametricSchema",
                Severity::High,
                false,
                "Parameter definition lacks a `default_value` field",
                "Add a `default_value` to the parameter definition",
            ),
            ErrorMetadata::new(
                "P005",
                "ParametricSchema",
                Severity::High,
                false,
                "Parameter `default_value` has the wrong JSON type",
                "Use a number (or a boolean for boolean parameters)",
            ),
            ErrorMetadata::new(
                "P006",
                "ParametricSchema",
                Severity::High,
                false,
                "Continuous parameter bound is not numeric",
                "Set `minval`/`maxval` to a number, null, or remove it",
            ),
            ErrorMetadata::new(
                "P007",
                "ParametricSchema",
                Severity::High,
                false,
                "Continuous parameter has `minval` greater than `maxval`",
                "Swap or correct the parameter bounds",
            ),
            ErrorMetadata::new(
                "P008",
                "ParametricSchema",
                Severity::High,
                false,
                "Unrecognized parameter type",
                "Use `boolean` or `continuous`",
            ),
            ErrorMetadata::new(
                "F001",
                "Input",
                Severity::High,
                false,
                "Model document could not be read",
                "Check that the path exists and is readable",
            ),
            ErrorMetadata::new(
                "F002",
                "Input",
                Severity::High,
                false,
                "Model document is not valid JSON",
                "Re-export the model file",
            ),
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                "Logging system initialized",
                "None",
            ),
            ErrorMetadata::new(
                "I010",
                "ParametricSchema",
                Severity::Low,
                true,
                "Parameter descriptors parsed successfully",
                "None",
            ),
            ErrorMetadata::new(
                "I011",
                "Input",
                Severity::Low,
                true,
                "Model document loaded",
                "None",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
