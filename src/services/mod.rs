// Service exports
pub mod catalog;
pub mod runtime;

pub use catalog::{sample_profiles, CatalogError, ProfileSource, RemoteCatalog};
pub use runtime::{SessionRuntime, Timing, ACKNOWLEDGMENT_TTL, TRANSITION_DELAY};
