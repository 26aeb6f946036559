//! Property loading: ordered resolution, merge, conditional publish.
//!
//! Responsibilities:
//! - Resolve each location in order and parse whatever it yields.
//! - Merge per-location sets into one aggregate, later locations winning on
//!   key collision.
//! - Publish the aggregate into a store without overwriting existing keys.
//!
//! Does NOT handle:
//! - Location resolution details (see `location`).
//! - File format parsing (see `format`).
//!
//! Invariants:
//! - A resolution failure aborts the call before any store write; no partial
//!   merge is ever committed.
//! - A parse failure only costs the offending location its contribution and
//!   the load continues. Asymmetric with resolution failures on purpose: a
//!   misconfigured override path blocks startup, a malformed file does not.
//! - Store writes are conditional; existing values always win.

use tracing::{debug, info, warn};

use super::error::LoadError;
use crate::format::parse_stream;
use crate::location::{PropertyLocation, ResourceContext};
use crate::store::PropertyStore;
use crate::types::PropertySet;

/// Load properties from `locations`, in order, into `store`.
///
/// Locations that are not configured or whose resource is absent contribute
/// nothing. When several locations define the same key, the last one in
/// `locations` wins at merge time; keys already present in `store` are never
/// overwritten. Finding no properties anywhere is not an error, only a
/// warning.
///
/// # Errors
///
/// Returns an error if a classpath location is resolved without a context or
/// if the override variable points to an unreadable file. In both cases the
/// store has not been touched.
pub fn load_properties(
    locations: &[PropertyLocation],
    ctx: Option<&dyn ResourceContext>,
    store: &dyn PropertyStore,
) -> Result<(), LoadError> {
    let mut aggregate = PropertySet::new();
    for location in locations {
        aggregate.merge(read_location(location, ctx)?);
    }

    if aggregate.is_empty() {
        warn!("no property file found at any location, not publishing any properties");
        return Ok(());
    }

    publish(&aggregate, store);
    Ok(())
}

/// Load properties from a single location into `store`.
///
/// Convenience for [`load_properties`] with a one-element list.
pub fn load_properties_from(
    location: &PropertyLocation,
    ctx: Option<&dyn ResourceContext>,
    store: &dyn PropertyStore,
) -> Result<(), LoadError> {
    load_properties(std::slice::from_ref(location), ctx, store)
}

fn read_location(
    location: &PropertyLocation,
    ctx: Option<&dyn ResourceContext>,
) -> Result<PropertySet, LoadError> {
    debug!(
        location = location.name(),
        source = location.source(),
        "trying to read application properties"
    );

    let Some(stream) = location.resolve(ctx)? else {
        return Ok(PropertySet::new());
    };

    match parse_stream(stream) {
        Ok(set) => {
            debug!(
                location = location.name(),
                source = location.source(),
                count = set.len(),
                "read application properties"
            );
            Ok(set)
        }
        Err(error) => {
            warn!(
                location = location.name(),
                source = location.source(),
                %error,
                "failed to parse properties, location contributes nothing"
            );
            Ok(PropertySet::new())
        }
    }
}

fn publish(aggregate: &PropertySet, store: &dyn PropertyStore) {
    for (key, value) in aggregate.iter() {
        if store.set_if_absent(key, value) {
            debug!(key, value, "set property");
        } else {
            info!(key, "property already set, keeping the existing value");
        }
    }
}
