//! # NAM parametric - parameter descriptors for parametric models
//!
//! ```
//! use nam_parametric::parse_parameter_descriptors;
//! use serde_json::json;
//!
//! let config = json!({
//!     "Gain": {"type": "continuous", "default_value": 12, "minval": 0, "maxval": 10},
//!     "Bright": {"type": "boolean", "default_value": true}
//! });
//!
//! let descriptors = parse_parameter_descriptors(&config).unwrap();
//! assert_eq!(descriptors[0].name, "Bright");
//! assert_eq!(descriptors[1].default_value, 10.0);
//! ```

pub mod config;
#[macro_use]
pub mod logging;
pub mod parser;
pub mod types;

// Re-export key types for library consumers
pub use parser::{
    find_parametric_config, parse_model_parameter_descriptors, parse_parameter_descriptors,
    SchemaError, SchemaResult,
};
pub use types::{ParameterDescriptor, ParameterType};

pub mod prelude {
    pub use crate::parser::{
        parse_model_parameter_descriptors, parse_parameter_descriptors, SchemaError,
        SchemaResult,
    };
    pub use crate::types::{ParameterDescriptor, ParameterType};
}
