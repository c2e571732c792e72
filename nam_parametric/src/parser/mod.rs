//! Parametric config parsing
//!
//! Turns the `config.parametric` object of a model document into an ordered
//! list of [`ParameterDescriptor`]s:
//!
//! ```text
//! {
//!   "ParamName": {
//!     "type": "boolean" | "continuous",
//!     "default_value": ...,
//!     "minval": ... (continuous, optional),
//!     "maxval": ... (continuous, optional)
//!   },
//!   ...
//! }
//! ```
//!
//! Descriptors are sorted by name so their order matches the trainer's.

pub mod error;
pub mod model;

pub use error::{SchemaError, SchemaResult};
pub use model::{find_parametric_config, parse_model_parameter_descriptors};

use crate::logging::codes;
use crate::types::{ParameterDescriptor, ParameterType};
use crate::{log_debug, log_error, log_success};
use serde_json::{Map, Value};

const TYPE_FIELD: &str = "type";
const DEFAULT_VALUE_FIELD: &str = "default_value";
const MIN_VALUE_FIELD: &str = "minval";
const MAX_VALUE_FIELD: &str = "maxval";

/// Parse parameter descriptors from a parametric config object
///
/// Fails on the first schema violation; no partial result is returned.
pub fn parse_parameter_descriptors(
    parametric_config: &Value,
) -> SchemaResult<Vec<ParameterDescriptor>> {
    let definitions = parametric_config.as_object().ok_or_else(|| {
        report(SchemaError::not_an_object(get_json_type_name(
            parametric_config,
        )))
    })?;

    log_debug!(
        "Parsing parametric config",
        "parameter_count" => definitions.len()
    );

    let mut entries: Vec<(&String, &Value)> = definitions.iter().collect();
    entries.sort_by(|(left, _), (right, _)| left.cmp(right));

    let mut descriptors = Vec::with_capacity(entries.len());
    for (name, definition) in entries {
        let descriptor = parse_definition(name, definition).map_err(report)?;
        descriptors.push(descriptor);
    }

    log_success!(
        codes::success::PARAMETERS_PARSED,
        "Parameter descriptors parsed",
        "count" => descriptors.len()
    );

    Ok(descriptors)
}

fn parse_definition(name: &str, definition: &Value) -> SchemaResult<ParameterDescriptor> {
    let fields = definition.as_object().ok_or_else(|| {
        SchemaError::definition_not_object(name, get_json_type_name(definition))
    })?;

    let type_name = fields
        .get(TYPE_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| SchemaError::missing_type(name))?;

    let default_value = fields
        .get(DEFAULT_VALUE_FIELD)
        .ok_or_else(|| SchemaError::missing_default_value(name))?;

    match ParameterType::from_type_name(type_name) {
        Some(ParameterType::Boolean) => parse_boolean(name, default_value),
        Some(ParameterType::Continuous) => parse_continuous(name, default_value, fields),
        None => Err(SchemaError::unrecognized_type(name, type_name)),
    }
}

/// Booleans accept `true`/`false` or any number; only exactly zero is off
fn parse_boolean(name: &str, default_value: &Value) -> SchemaResult<ParameterDescriptor> {
    let enabled = if let Some(flag) = default_value.as_bool() {
        flag
    } else if let Some(number) = default_value.as_f64() {
        number != 0.0
    } else {
        return Err(SchemaError::invalid_boolean_default(
            name,
            get_json_type_name(default_value),
        ));
    };

    Ok(ParameterDescriptor::boolean(name, enabled))
}

fn parse_continuous(
    name: &str,
    default_value: &Value,
    fields: &Map<String, Value>,
) -> SchemaResult<ParameterDescriptor> {
    let mut value = default_value.as_f64().ok_or_else(|| {
        SchemaError::invalid_continuous_default(name, get_json_type_name(default_value))
    })?;

    let min_value = parse_bound(name, fields, MIN_VALUE_FIELD)?;
    let max_value = parse_bound(name, fields, MAX_VALUE_FIELD)?;

    if let (Some(min), Some(max)) = (min_value, max_value) {
        if min > max {
            return Err(SchemaError::inverted_bounds(name, min, max));
        }
    }

    // Out-of-range defaults are clamped, never rejected. Min is checked first.
    if let Some(min) = min_value {
        if value < min {
            log_debug!("Clamping default to minval", "parameter" => name, "default_value" => value, "minval" => min);
            value = min;
        }
    }
    if let Some(max) = max_value {
        if value > max {
            log_debug!("Clamping default to maxval", "parameter" => name, "default_value" => value, "maxval" => max);
            value = max;
        }
    }

    Ok(ParameterDescriptor {
        min_value,
        max_value,
        ..ParameterDescriptor::continuous(name, value)
    })
}

/// Absent and `null` bounds are both "unset"
fn parse_bound(
    name: &str,
    fields: &Map<String, Value>,
    bound: &str,
) -> SchemaResult<Option<f64>> {
    match fields.get(bound) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| SchemaError::non_numeric_bound(name, bound, get_json_type_name(value))),
    }
}

fn report(error: SchemaError) -> SchemaError {
    match error.parameter_name() {
        Some(name) => log_error!(
            error.error_code(),
            &error.to_string(),
            "parameter" => name,
            "error_type" => error.error_type()
        ),
        None => log_error!(
            error.error_code(),
            &error.to_string(),
            "error_type" => error.error_type()
        ),
    }
    error
}

/// JSON value type name for error messages
pub(crate) fn get_json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
