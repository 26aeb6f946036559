//! Error types for property loading.
//!
//! Responsibilities:
//! - Define the failures that abort a load and cross the loader boundary.
//!
//! Does NOT handle:
//! - Parse failures (see `format::ParseError`); those are recovered inside
//!   the loader and never reach callers.
//!
//! Invariants:
//! - Every variant carries enough context to identify the offending
//!   location (variable name, resolved path, resource path).

use std::path::PathBuf;

use thiserror::Error;

/// Unrecoverable failures while loading application properties.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A classpath location was resolved without a resource context.
    ///
    /// This is a programming error in the embedding, not a runtime
    /// condition, and is never retried.
    #[error("cannot read classpath resource '{resource}' without a resource context")]
    MissingResourceContext { resource: String },

    /// The override variable names a file that does not exist or cannot be
    /// read. Distinct from the variable being unset, which is the normal
    /// not-configured case.
    #[error("properties file configured via '{variable}' cannot be found: {}", path.display())]
    OverrideFileNotFound { variable: String, path: PathBuf },
}
