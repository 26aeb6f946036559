//! Startup lifecycle hook.
//!
//! Responsibilities:
//! - Run the loader once at host startup and re-raise unrecoverable failures
//!   so the host aborts its own initialization.
//! - Provide the matching no-op teardown hook.
//!
//! Does NOT handle:
//! - Scheduling; the host decides when startup and shutdown run.
//!
//! Invariants:
//! - Failures are logged before they are re-raised.
//! - Publishing goes to the process-wide store.

use tracing::error;

use crate::loader::load_properties;
use crate::location::{PropertyLocation, ResourceContext, default_locations};
use crate::store::ProcessPropertyStore;

/// Loads application properties into the process-wide store at startup.
///
/// Hosts call [`on_startup`](Self::on_startup) exactly once with whatever
/// resource context they can provide, before serving any work. A returned
/// error is meant to abort host initialization: misconfiguration should block
/// startup rather than run the application silently degraded.
#[derive(Debug, Clone)]
pub struct PropertiesInitializer {
    locations: Vec<PropertyLocation>,
}

impl Default for PropertiesInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertiesInitializer {
    /// An initializer over the default location set.
    pub fn new() -> Self {
        Self {
            locations: default_locations(),
        }
    }

    /// An initializer over a caller-supplied location list.
    pub fn with_locations(locations: Vec<PropertyLocation>) -> Self {
        Self { locations }
    }

    /// Startup hook. Loads properties into the process-wide store.
    pub fn on_startup(&self, ctx: Option<&dyn ResourceContext>) -> anyhow::Result<()> {
        load_properties(&self.locations, ctx, &ProcessPropertyStore).map_err(|e| {
            error!(error = %e, "error during properties initialization");
            anyhow::Error::new(e).context("error during properties initialization")
        })
    }

    /// Teardown hook. Nothing to release.
    pub fn on_shutdown(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationKind;

    #[test]
    fn test_initializer_defaults_to_the_default_location_set() {
        let initializer = PropertiesInitializer::new();
        assert_eq!(initializer.locations.len(), 3);
        assert_eq!(initializer.locations[0].kind(), LocationKind::Classpath);
        assert_eq!(
            initializer.locations[2].kind(),
            LocationKind::OverrideVariable
        );
    }

    #[test]
    fn test_startup_without_context_fails_for_default_locations() {
        // Default locations start with a classpath lookup, which needs a
        // resource context.
        let initializer = PropertiesInitializer::new();
        let result = initializer.on_startup(None);
        assert!(result.is_err());
    }

    #[test]
    fn test_shutdown_is_a_no_op() {
        PropertiesInitializer::new().on_shutdown();
    }
}
