//! Shared primitives used across PipeView crates.

use core::fmt;

/// Result alias used across the workspace.
pub type PipeResult<T> = Result<T, PipeError>;

/// Top-level error type for the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeError {
    pub code: &'static str,
    pub message: String,
}

impl PipeError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for PipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PipeError {}

/// Outcome of running one pipe string through a resolution strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The input mapped to a concrete target URL.
    Resolved { url: String },
    /// The input was not a translatable pipe URI; the strategy substituted
    /// its fixed fallback URL so the shell still has something to show.
    Fallback { url: String },
    /// The registry had no entry for the name.
    NotFound,
}

/// A pipe-string resolution strategy.
///
/// Implementations must be pure with respect to process state: the result
/// depends only on the input string and the strategy's own configuration.
/// Registry file contents count as configuration read at call time.
pub trait PipeResolver {
    /// Resolves one trimmed, non-empty pipe string.
    fn resolve(&self, input: &str) -> Resolution;

    /// Where the mapping comes from, for "unknown pipe string" status text.
    fn source_hint(&self) -> String;
}

/// User-perceived result of one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; no resolution was attempted.
    EmptyInput,
    /// The strategy had no mapping for the input.
    UnknownPipe,
    /// Navigation should begin for `url`. Terminal from the core's
    /// perspective; the shell takes over display from here.
    Loading { url: String, used_fallback: bool },
}

/// Runs one submission through the strategy.
///
/// Empty input short-circuits before the resolver is consulted, so the
/// "please enter input" surface never depends on registry state.
pub fn submit(input: &str, resolver: &dyn PipeResolver) -> SubmitOutcome {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return SubmitOutcome::EmptyInput;
    }

    match resolver.resolve(trimmed) {
        Resolution::Resolved { url } => SubmitOutcome::Loading {
            url,
            used_fallback: false,
        },
        Resolution::Fallback { url } => SubmitOutcome::Loading {
            url,
            used_fallback: true,
        },
        Resolution::NotFound => SubmitOutcome::UnknownPipe,
    }
}
