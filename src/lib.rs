//! Star-system generation requests: configure a star, generate its planets
//! once, and release the resulting body tree.
//!
//! The member crates are re-exported here so front-ends only need one
//! dependency.

pub mod scenario;

pub use stargen_bodies as bodies;
pub use stargen_config as config;
pub use stargen_core as astro;
pub use stargen_generator as generator;
pub use stargen_request as request;

pub use stargen_request::{
    ErrorKind, GeneratedSystem, GenerationError, GenerationRequest, GenerationState, Star,
};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
