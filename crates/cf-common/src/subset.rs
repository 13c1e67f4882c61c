//! Fact category taxonomy and gather-subset resolution.
//!
//! The controller can gather a fixed, closed set of fact categories.
//! Callers select which ones to run with a list of subset tokens:
//!
//! - `all` — select every category (overwrites the working set)
//! - `!all` — clear the working set
//! - `<name>` — add one category
//! - `!<name>` — remove one category if present
//!
//! Tokens are applied left to right, so `["user", "all", "!python"]`
//! selects everything except `python`: the `all` token overwrites the
//! earlier partial selection rather than unioning with it. Any token
//! outside this grammar fails the whole call before any gathering runs.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fact categories the controller can gather.
///
/// The declaration order is the fixed enumeration order: the orchestrator
/// dispatches gatherers in this order regardless of the order tokens were
/// supplied, which keeps output key ordering stable across calls and
/// across processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Identity of the user running the controller process.
    User,
    /// Parsed contents of the controller's configuration file.
    Config,
    /// Interpreter and package-manager details.
    Python,
}

impl Category {
    /// Get all category variants in fixed enumeration order.
    pub fn all() -> &'static [Category] {
        &[Category::User, Category::Config, Category::Python]
    }

    /// Get the wire name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::User => "user",
            Category::Config => "config",
            Category::Python => "python",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "user" => Ok(Category::User),
            "config" => Ok(Category::Config),
            "python" => Ok(Category::Python),
            _ => Err(format!("unknown fact category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a list of gather-subset tokens into a concrete category set.
///
/// An empty token list defaults to `["all"]`. A single malformed token
/// anywhere in the list invalidates the entire call; the error names the
/// offending token and nothing is gathered.
pub fn resolve_subset<S: AsRef<str>>(tokens: &[S]) -> Result<BTreeSet<Category>> {
    let mut subset = BTreeSet::new();

    if tokens.is_empty() {
        subset.extend(Category::all().iter().copied());
        return Ok(subset);
    }

    for token in tokens {
        let token = token.as_ref();
        match token {
            "all" => {
                subset = Category::all().iter().copied().collect();
            }
            "!all" => {
                subset.clear();
            }
            _ => {
                if let Some(name) = token.strip_prefix('!') {
                    let category: Category = name
                        .parse()
                        .map_err(|_| Error::InvalidSubset(token.to_string()))?;
                    subset.remove(&category);
                } else {
                    let category: Category = token
                        .parse()
                        .map_err(|_| Error::InvalidSubset(token.to_string()))?;
                    subset.insert(category);
                }
            }
        }
    }

    Ok(subset)
}
