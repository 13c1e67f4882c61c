//! Configuration gatherer: the controller's own INI config file.
//!
//! The caller must supply the config file path; that precondition is
//! checked before any file access. The parser itself is lenient: a path
//! that cannot be read yields an empty settings map rather than an
//! error, matching the reference parser's habit of ignoring unreadable
//! files.
//!
//! Dialect: `[section]` headers, `key = value` or `key: value` pairs,
//! `#`/`;` full-line comments, keys lowercased, later duplicates within
//! a section overwrite earlier ones. Keys before the first section
//! header are ignored. No interpolation, no line continuations.

use super::InvocationContext;
use cf_common::{ConfigFacts, Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Gather the controller configuration file path and parsed settings.
pub fn gather_config(ctx: &InvocationContext) -> Result<ConfigFacts> {
    debug!("collecting controller config info");

    let path = match ctx.config_file.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(Error::MissingContext("config_file")),
    };

    let settings = match std::fs::read_to_string(path) {
        Ok(text) => parse_ini_settings(&text),
        Err(e) => {
            debug!(path, error = %e, "config file not readable, treating as empty");
            BTreeMap::new()
        }
    };

    Ok(ConfigFacts {
        path: path.to_string(),
        settings,
    })
}

/// Parse INI-style text into section -> key -> value maps.
pub fn parse_ini_settings(text: &str) -> BTreeMap<String, BTreeMap<String, String>> {
    let mut settings: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    let mut section: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            let name = name.trim().to_string();
            settings.entry(name.clone()).or_default();
            section = Some(name);
            continue;
        }

        // key/value pair; `=` and `:` are both accepted, whichever
        // separator appears first wins
        let sep = match (line.find('='), line.find(':')) {
            (Some(eq), Some(colon)) => Some(eq.min(colon)),
            (Some(eq), None) => Some(eq),
            (None, Some(colon)) => Some(colon),
            (None, None) => None,
        };

        let Some(sep) = sep else { continue };
        let Some(ref section) = section else { continue };

        let key = line[..sep].trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        let value = line[sep + 1..].trim().to_string();

        settings
            .entry(section.clone())
            .or_default()
            .insert(key, value);
    }

    settings
}
