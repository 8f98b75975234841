//! Star records and the owned planet/moon/atmosphere tree produced by generation.
//!
//! Every body exclusively owns its atmosphere and its moon list. Sibling order
//! is positional inside the owning [`BodyList`], so walking to the next planet
//! never carries responsibility for releasing it.

pub mod atmosphere;
pub mod body;
pub mod list;
pub mod release;
pub mod star;

pub use atmosphere::{Atmosphere, Gas};
pub use body::{BodyKind, CelestialBody};
pub use list::BodyList;
pub use release::ReleaseReport;
pub use star::Star;
