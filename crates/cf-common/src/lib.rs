//! Controller Facts common types and errors.
//!
//! This crate provides foundational types shared across cf-core modules:
//! - The fixed fact category taxonomy and gather-subset resolution
//! - Typed fact value shapes for the output document
//! - Common error types
//! - Output format specifications

pub mod error;
pub mod facts;
pub mod output;
pub mod subset;

pub use error::{Error, ErrorCategory, Result};
pub use facts::{
    ConfigFacts, ControllerFacts, FactsDocument, GroupFacts, InterpreterFacts, PipFacts,
    PythonFacts, UserFacts, VersionInfo,
};
pub use output::OutputFormat;
pub use subset::{resolve_subset, Category};
