//! Candidate locations for application properties.
//!
//! Responsibilities:
//! - Define `PropertyLocation`, the named descriptor of one candidate source.
//! - Resolve a location to an open byte stream, or to nothing when it is not
//!   configured or the resource is absent.
//! - Provide the default location set and the `ResourceContext` seam to the
//!   host container.
//!
//! Does NOT handle:
//! - Parsing resolved content (see `format`).
//! - Merge and publish policy (see `loader`).
//!
//! Invariants:
//! - Locations are immutable once constructed.
//! - An unset, empty, or whitespace-only override variable means "not
//!   configured" and resolves to no stream, silently.
//! - An override variable that is set but names an unreadable path is a
//!   configuration error carrying the resolved absolute path.
//! - XML detection for override locations follows the variable's current
//!   value and is re-evaluated on every call.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::constants::{CLASSPATH_PLAIN_SOURCE, CLASSPATH_XML_SOURCE, OVERRIDE_PATH_VARIABLE};
use crate::loader::LoadError;

/// Lookup kind of a property location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    /// A resource path resolved against the host's resource root.
    Classpath,
    /// An environment variable naming a filesystem path.
    OverrideVariable,
}

/// Resource lookup capability supplied by the host at startup.
///
/// Classpath locations resolve against whatever the host mounts as its
/// resource root. `DirResourceContext` covers the common case of a directory
/// on disk and keeps classpath locations testable without a host container.
pub trait ResourceContext {
    /// Open the resource at `path`, or `None` if it does not exist.
    fn open_resource(&self, path: &str) -> Option<Box<dyn Read>>;
}

/// A resource context rooted at a directory.
#[derive(Debug, Clone)]
pub struct DirResourceContext {
    root: PathBuf,
}

impl DirResourceContext {
    /// Create a context serving resources from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceContext for DirResourceContext {
    fn open_resource(&self, path: &str) -> Option<Box<dyn Read>> {
        let full = self.root.join(path.trim_start_matches('/'));
        if !full.is_file() {
            return None;
        }
        File::open(full)
            .ok()
            .map(|file| Box::new(file) as Box<dyn Read>)
    }
}

/// An open stream for one resolved location.
///
/// Owned by the loader for the duration of a single read and dropped on
/// every exit path, parse failure included.
pub struct ResolvedStream {
    reader: Box<dyn Read>,
    xml: bool,
}

impl std::fmt::Debug for ResolvedStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedStream")
            .field("xml", &self.xml)
            .finish_non_exhaustive()
    }
}

impl ResolvedStream {
    pub(crate) fn new(reader: Box<dyn Read>, xml: bool) -> Self {
        Self { reader, xml }
    }

    /// Whether the content should be parsed as XML properties.
    pub fn is_xml(&self) -> bool {
        self.xml
    }
}

impl Read for ResolvedStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

/// A named, ordered candidate source of configuration content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyLocation {
    name: String,
    source: String,
    kind: LocationKind,
}

impl PropertyLocation {
    /// A location read from the host's resource root.
    pub fn classpath(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            kind: LocationKind::Classpath,
        }
    }

    /// A location read from the file named by an environment variable.
    pub fn override_variable(name: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: variable.into(),
            kind: LocationKind::OverrideVariable,
        }
    }

    /// Display label for this location.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resource path or override variable name, depending on the kind.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Lookup kind of this location.
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// Whether this location currently resolves to XML content.
    ///
    /// Static for classpath locations. For override locations the answer
    /// follows the variable's current value, so it must be re-evaluated per
    /// call rather than cached.
    pub fn is_xml(&self) -> bool {
        match self.kind {
            LocationKind::Classpath => ends_with_xml(&self.source),
            LocationKind::OverrideVariable => {
                env_var_or_none(&self.source).is_some_and(|path| ends_with_xml(&path))
            }
        }
    }

    /// Resolve this location to an open stream.
    ///
    /// `Ok(None)` means the location is not configured or the resource is
    /// absent, which is not an error.
    ///
    /// # Errors
    ///
    /// - [`LoadError::MissingResourceContext`] when a classpath location is
    ///   resolved without a context. Programming error, never retried.
    /// - [`LoadError::OverrideFileNotFound`] when the override variable is
    ///   set but its path does not name a readable regular file.
    pub fn resolve(
        &self,
        ctx: Option<&dyn ResourceContext>,
    ) -> Result<Option<ResolvedStream>, LoadError> {
        match self.kind {
            LocationKind::Classpath => {
                let ctx = ctx.ok_or_else(|| LoadError::MissingResourceContext {
                    resource: self.source.clone(),
                })?;
                Ok(ctx
                    .open_resource(&self.source)
                    .map(|reader| ResolvedStream::new(reader, ends_with_xml(&self.source))))
            }
            LocationKind::OverrideVariable => {
                let Some(path) = env_var_or_none(&self.source) else {
                    return Ok(None);
                };
                let xml = ends_with_xml(&path);
                let file = open_override_file(&self.source, Path::new(&path))?;
                Ok(Some(ResolvedStream::new(Box::new(file), xml)))
            }
        }
    }
}

/// The default location set, evaluated strictly in this order: plain
/// classpath file, XML classpath file, override-variable file.
pub fn default_locations() -> Vec<PropertyLocation> {
    vec![
        PropertyLocation::classpath("classpath", CLASSPATH_PLAIN_SOURCE),
        PropertyLocation::classpath("classpath", CLASSPATH_XML_SOURCE),
        PropertyLocation::override_variable("environment", OVERRIDE_PATH_VARIABLE),
    ]
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value (leading/trailing whitespace
/// removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn ends_with_xml(source: &str) -> bool {
    let bytes = source.as_bytes();
    bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".xml")
}

fn open_override_file(variable: &str, path: &Path) -> Result<File, LoadError> {
    let not_found = || LoadError::OverrideFileNotFound {
        variable: variable.to_string(),
        path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
    };
    if !path.is_file() {
        return Err(not_found());
    }
    File::open(path).map_err(|_| not_found())
}
