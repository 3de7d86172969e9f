//! Pipe registry: file loading, lenient parsing, and exact-match lookup.

mod scan;

pub use scan::parse_registry;

use pv_core::PipeError;
use pv_core::PipeResolver;
use pv_core::PipeResult;
use pv_core::Resolution;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Name-to-URL mapping projected from registry text.
///
/// Built fresh for every resolution request and discarded after use; the
/// source file is the only persistent state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, String>,
}

impl Registry {
    pub fn from_text(text: &str) -> Self {
        Self {
            entries: scan::parse_registry(text),
        }
    }

    /// Reads and parses the registry file, degrading every failure to an
    /// empty registry. Nothing fatal escapes to the caller.
    pub fn load_from(path: &Path) -> Self {
        match read_registry_text(path) {
            Ok(text) => Self::from_text(&text),
            Err(error) => {
                tracing::debug!("registry unavailable: {error}");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Exact-match lookup. No case folding, no trimming; an empty registry
    /// always answers not-found.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }
}

/// Reads the raw registry text.
///
/// Callers are expected to absorb the error; the distinct codes exist for
/// logging, not for control flow.
pub fn read_registry_text(path: &Path) -> PipeResult<String> {
    if !path.exists() {
        return Err(PipeError::new(
            "registry.missing",
            format!("no registry file at `{}`", path.display()),
        ));
    }

    fs::read_to_string(path).map_err(|error| {
        PipeError::new(
            "registry.read_failed",
            format!("failed to read `{}`: {error}", path.display()),
        )
    })
}

/// Registry-backed resolution strategy: load, parse, and look up on every
/// call, with no caching between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryLookup {
    registry_path: PathBuf,
}

impl RegistryLookup {
    pub fn new(registry_path: PathBuf) -> Self {
        Self { registry_path }
    }

    pub fn registry_path(&self) -> &Path {
        &self.registry_path
    }
}

impl PipeResolver for RegistryLookup {
    fn resolve(&self, input: &str) -> Resolution {
        let registry = Registry::load_from(&self.registry_path);
        tracing::debug!(
            "registry loaded with {} entries from `{}`",
            registry.len(),
            self.registry_path.display()
        );

        match registry.resolve(input) {
            Some(url) => Resolution::Resolved {
                url: url.to_owned(),
            },
            None => Resolution::NotFound,
        }
    }

    fn source_hint(&self) -> String {
        self.registry_path.display().to_string()
    }
}
