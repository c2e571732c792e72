use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a model parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    /// Two-state switch carried as `0.0` / `1.0`
    Boolean,
    /// Real value, optionally bounded by `minval`/`maxval`
    Continuous,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::Boolean => "boolean",
            ParameterType::Continuous => "continuous",
        }
    }

    /// Resolve a type name from a parametric config, ignoring ASCII case
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        match type_name.to_ascii_lowercase().as_str() {
            "boolean" => Some(ParameterType::Boolean),
            "continuous" => Some(ParameterType::Continuous),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated, normalized description of one model parameter
///
/// Produced by [`crate::parser::parse_parameter_descriptors`]. For boolean
/// parameters `default_value` is exactly `0.0` or `1.0` and both bounds are
/// `None`. For continuous parameters `default_value` already lies within
/// whichever bounds are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    pub default_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

impl ParameterDescriptor {
    /// Create a boolean descriptor
    pub fn boolean(name: &str, enabled: bool) -> Self {
        Self {
            name: name.to_string(),
            parameter_type: ParameterType::Boolean,
            default_value: if enabled { 1.0 } else { 0.0 },
            min_value: None,
            max_value: None,
        }
    }

    /// Create an unbounded continuous descriptor
    pub fn continuous(name: &str, default_value: f64) -> Self {
        Self {
            name: name.to_string(),
            parameter_type: ParameterType::Continuous,
            default_value,
            min_value: None,
            max_value: None,
        }
    }

    pub fn is_boolean(&self) -> bool {
        self.parameter_type == ParameterType::Boolean
    }

    pub fn is_continuous(&self) -> bool {
        self.parameter_type == ParameterType::Continuous
    }

    /// Both bounds are declared
    pub fn has_bounds(&self) -> bool {
        self.min_value.is_some() && self.max_value.is_some()
    }

    /// Check `value` against the declared bounds; a missing bound is open
    pub fn contains(&self, value: f64) -> bool {
        self.min_value.map_or(true, |min| value >= min)
            && self.max_value.map_or(true, |max| value <= max)
    }
}

impl fmt::Display for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} = {}",
            self.name, self.parameter_type, self.default_value
        )?;

        match (self.min_value, self.max_value) {
            (None, None) => Ok(()),
            (min, max) => write!(
                f,
                " [{}, {}]",
                min.map_or_else(|| "-inf".to_string(), |v| v.to_string()),
                max.map_or_else(|| "inf".to_string(), |v| v.to_string())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_ignore_case() {
        assert_eq!(
            ParameterType::from_type_name("Boolean"),
            Some(ParameterType::Boolean)
        );
        assert_eq!(
            ParameterType::from_type_name("CONTINUOUS"),
            Some(ParameterType::Continuous)
        );
        assert_eq!(ParameterType::from_type_name("knob"), None);
    }

    #[test]
    fn test_contains_with_partial_bounds() {
        let mut descriptor = ParameterDescriptor::continuous("Gain", 0.5);
        assert!(descriptor.contains(-1e9));
        assert!(!descriptor.has_bounds());

        descriptor.min_value = Some(0.0);
        assert!(!descriptor.contains(-0.1));
        assert!(descriptor.contains(100.0));

        descriptor.max_value = Some(1.0);
        assert!(descriptor.has_bounds());
        assert!(descriptor.contains(1.0));
        assert!(!descriptor.contains(1.5));
    }

    #[test]
    fn test_display() {
        let mut gain = ParameterDescriptor::continuous("Gain", 0.5);
        assert_eq!(gain.to_string(), "Gain: continuous = 0.5");

        gain.min_value = Some(0.0);
        assert_eq!(gain.to_string(), "Gain: continuous = 0.5 [0, inf]");

        gain.max_value = Some(1.0);
        assert_eq!(gain.to_string(), "Gain: continuous = 0.5 [0, 1]");

        let bright = ParameterDescriptor::boolean("Bright", true);
        assert_eq!(bright.to_string(), "Bright: boolean = 1");
    }

    #[test]
    fn test_serialized_shape() {
        let bright = ParameterDescriptor::boolean("Bright", false);
        let json = serde_json::to_value(&bright).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "Bright", "type": "boolean", "default_value": 0.0})
        );
    }
}
