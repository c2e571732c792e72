//! Configuration for the parametric parser
//!
//! Compile-time limits live in [`constants`]; user preferences are read from
//! the environment by [`runtime`].

pub mod constants;
pub mod runtime;

pub use runtime::LoggingPreferences;
