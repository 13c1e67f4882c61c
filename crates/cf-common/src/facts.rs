//! Typed fact value shapes for the output document.
//!
//! Field declaration order matches the fixed category enumeration order
//! (`user`, `config`, `python`), so serialized documents carry a stable
//! key order suitable for diffing and snapshotting. Unselected categories
//! are skipped entirely; a selected category always serializes, even when
//! a best-effort field inside it (pip) is an explicit `null`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Primary group of the controller user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupFacts {
    /// Group ID, as reported by the identity tooling.
    pub id: String,
    /// Group name.
    pub name: String,
}

/// Identity of the user running the controller process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFacts {
    /// Effective user ID of the controller process.
    pub id: u32,
    /// Resolved username.
    pub name: String,
    /// Primary group info.
    pub group: GroupFacts,
}

/// Parsed controller configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFacts {
    /// Path the configuration was loaded from.
    pub path: String,
    /// Section name to key/value settings. All values are strings.
    pub settings: BTreeMap<String, BTreeMap<String, String>>,
}

/// A version identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version string, first whitespace-delimited token of the raw output.
    pub id: String,
}

/// Interpreter details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterFacts {
    /// Path supplied by the caller.
    pub path: String,
    /// Version of the ambient interpreter.
    pub version: VersionInfo,
}

/// Package manager details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipFacts {
    /// pip version metadata.
    pub version: VersionInfo,
}

/// Interpreter and package-manager facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonFacts {
    /// Interpreter details.
    pub interpreter: InterpreterFacts,
    /// pip details; `None` (serialized as `null`) when the best-effort
    /// version lookup failed.
    pub pip: Option<PipFacts>,
}

/// Facts gathered for the selected categories.
///
/// An entry is present iff its category was in the resolved subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<PythonFacts>,
}

impl ControllerFacts {
    /// True when no category was gathered.
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.config.is_none() && self.python.is_none()
    }
}

/// The namespaced document returned to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactsDocument {
    /// All controller facts live under this single namespace key.
    pub controller: ControllerFacts,
}
