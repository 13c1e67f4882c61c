//! Controller Facts Core Library
//!
//! This library gathers facts about the controller host running the
//! automation engine:
//! - Subset-driven collector orchestration (which categories to gather)
//! - Identity, configuration, and interpreter gatherers
//! - Safe external command execution
//! - Environment probing behind a testable surface
//! - Exit codes and structured logging for the CLI
//!
//! The binary entry point is in `main.rs`.

pub mod collect;
pub mod exit_codes;
pub mod logging;
pub mod probe;

pub use collect::{Collector, InvocationContext};
pub use probe::{EnvProbe, OsFamily, SystemProbe};
