pub mod descriptor;

pub use descriptor::{ParameterDescriptor, ParameterType};
