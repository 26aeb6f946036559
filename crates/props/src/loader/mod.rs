//! Property loader.
//!
//! Responsibilities:
//! - Load properties from an ordered location list and publish them into a
//!   property store without overwriting values that are already set.
//!
//! Invariants:
//! - Resolution failures abort the whole load before any store write.
//! - Parse failures are logged and recovered per location.

mod error;
mod load;

#[cfg(test)]
mod tests;

pub use error::LoadError;
pub use load::{load_properties, load_properties_from};
