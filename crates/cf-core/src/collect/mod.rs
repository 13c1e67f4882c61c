//! Fact collection and orchestration.
//!
//! This module provides the collection layer for controller facts:
//! - Subset-driven dispatch to the per-category gatherers
//! - Identity, configuration, and interpreter gatherers
//! - Safe external command execution
//!
//! Gatherers run in the fixed category enumeration order, never the
//! order the subset tokens were supplied, so output key ordering is
//! reproducible across calls and processes. A gatherer failure aborts
//! the invocation immediately: the result either contains every
//! requested category or nothing at all.

mod config;
mod python;
pub mod runner;
mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{gather_config, parse_ini_settings};
pub use python::{gather_python, AMBIENT_INTERPRETER};
pub use runner::{CommandRunner, RunnerError, ToolOutput, ToolRunner};
pub use user::gather_user;

use crate::probe::{EnvProbe, OsFamily};
use cf_common::{resolve_subset, Category, ControllerFacts, Error, FactsDocument, Result};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Caller-supplied ambient values required by the gatherers.
///
/// Constructed fresh per invocation; the core never mutates or retains
/// it.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Path to the controller configuration file (`config` category).
    pub config_file: Option<String>,
    /// Path to the target interpreter (`python` category).
    pub interpreter: Option<String>,
    /// Whether this invocation runs once per automation run. Gathering
    /// per-host is wasteful but not an error; a false value only emits
    /// a warning.
    pub run_once: bool,
}

impl Default for InvocationContext {
    fn default() -> Self {
        InvocationContext {
            config_file: None,
            interpreter: None,
            run_once: true,
        }
    }
}

/// Runs selected gatherers and assembles the namespaced fact document.
pub struct Collector<'a> {
    runner: &'a dyn CommandRunner,
    probe: &'a dyn EnvProbe,
}

impl<'a> Collector<'a> {
    pub fn new(runner: &'a dyn CommandRunner, probe: &'a dyn EnvProbe) -> Self {
        Collector { runner, probe }
    }

    /// Full gathering entry point: preconditions, subset resolution,
    /// dispatch, and namespacing.
    ///
    /// An empty token list defaults to `all`. Fails before any gatherer
    /// runs when a token is malformed or the controller platform is not
    /// POSIX-like.
    pub fn gather<S: AsRef<str>>(
        &self,
        tokens: &[S],
        ctx: &InvocationContext,
    ) -> Result<FactsDocument> {
        if !ctx.run_once {
            warn!(
                "controller facts are intended to be gathered once per automation run; \
                 gathering them per-host is unnecessary"
            );
        }

        let family = self.probe.os_family();
        if family != OsFamily::Posix {
            return Err(Error::UnsupportedPlatform(family.to_string()));
        }

        let subset = resolve_subset(tokens)?;
        let controller = self.collect(&subset, ctx)?;

        Ok(FactsDocument { controller })
    }

    /// Run each selected category's gatherer in fixed enumeration order.
    pub fn collect(
        &self,
        subset: &BTreeSet<Category>,
        ctx: &InvocationContext,
    ) -> Result<ControllerFacts> {
        let mut facts = ControllerFacts::default();

        for category in Category::all() {
            if !subset.contains(category) {
                continue;
            }
            debug!(category = %category, "gathering controller fact subset");
            match category {
                Category::User => facts.user = Some(gather_user(self.runner, self.probe)?),
                Category::Config => facts.config = Some(gather_config(ctx)?),
                Category::Python => facts.python = Some(gather_python(self.runner, ctx)?),
            }
        }

        Ok(facts)
    }
}
