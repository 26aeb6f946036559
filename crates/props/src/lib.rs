//! Application properties bootstrap loading.
//!
//! This crate probes an ordered list of candidate locations for a properties
//! file at application startup, merges everything it finds (later locations
//! win at merge time), and publishes the aggregate into a process-wide
//! property store without ever overwriting a value that is already set.
//! A file named by an environment variable is read last, so properties are
//! overridable per server.

pub mod constants;
mod format;
mod lifecycle;
mod loader;
mod location;
mod store;
mod types;

pub use format::{ParseError, parse_plain, parse_xml};
pub use lifecycle::PropertiesInitializer;
pub use loader::{LoadError, load_properties, load_properties_from};
pub use location::{
    DirResourceContext, LocationKind, PropertyLocation, ResolvedStream, ResourceContext,
    default_locations, env_var_or_none,
};
pub use store::{MemoryPropertyStore, ProcessPropertyStore, PropertyStore};
pub use types::PropertySet;
