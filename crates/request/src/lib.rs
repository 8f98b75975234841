//! Generation request façade: configure a star system, generate it once, release it.

pub mod error;
pub mod request;

pub use facade::*;
pub use stargen_bodies as bodies;
pub use stargen_generator as generator;

mod facade;
