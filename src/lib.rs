//! Trigger OpenAPI spec generation on a Salesforce org through anonymous Apex.

pub mod config;
pub mod error;
pub mod execute;
pub mod generator;
pub mod project;
pub mod tooling;

pub use error::GenerateError;
pub use generator::{resolve_version, SpecGenerator, SpecOptions};
