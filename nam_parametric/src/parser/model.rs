//! Locating the parametric block inside a model document

use super::{parse_parameter_descriptors, SchemaResult};
use crate::log_debug;
use crate::types::ParameterDescriptor;
use serde_json::Value;

/// Return `config.parametric` when the model declares one
///
/// A `null` block is treated the same as a missing one.
pub fn find_parametric_config(model: &Value) -> Option<&Value> {
    model
        .get("config")
        .and_then(|config| config.get("parametric"))
        .filter(|parametric| !parametric.is_null())
}

/// Parse the parameter descriptors of a whole model document
///
/// `Ok(None)` means the model is not parametric.
pub fn parse_model_parameter_descriptors(
    model: &Value,
) -> SchemaResult<Option<Vec<ParameterDescriptor>>> {
    match find_parametric_config(model) {
        Some(parametric_config) => parse_parameter_descriptors(parametric_config).map(Some),
        None => {
            log_debug!("Model has no parametric config block");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SchemaError;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_find_parametric_config() {
        let model = json!({
            "version": "0.5.4",
            "architecture": "WaveNet",
            "config": {
                "layers": [],
                "parametric": {"Gain": {"type": "continuous", "default_value": 0.5}}
            },
            "weights": [0.1, 0.2]
        });

        let block = find_parametric_config(&model).unwrap();
        assert!(block.get("Gain").is_some());
    }

    #[test]
    fn test_non_parametric_models() {
        let cases = [
            json!({"config": {"layers": []}}),
            json!({"config": {"parametric": null}}),
            json!({"weights": []}),
            json!({"config": "not an object"}),
            json!([]),
        ];

        for model in cases {
            assert!(find_parametric_config(&model).is_none());
            assert_matches!(parse_model_parameter_descriptors(&model), Ok(None));
        }
    }

    #[test]
    fn test_parse_model_descriptors() {
        let model = json!({
            "config": {
                "parametric": {
                    "Gain": {"type": "continuous", "default_value": 11, "minval": 0, "maxval": 10},
                    "Bright": {"type": "boolean", "default_value": false}
                }
            }
        });

        let descriptors = parse_model_parameter_descriptors(&model).unwrap().unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name, "Bright");
        assert_eq!(descriptors[1].default_value, 10.0);
    }

    #[test]
    fn test_malformed_parametric_block_is_an_error() {
        let model = json!({"config": {"parametric": [1, 2]}});

        assert_matches!(
            parse_model_parameter_descriptors(&model),
            Err(SchemaError::NotAnObject { ref actual_type }) if actual_type == "array"
        );
    }
}
