pub mod screen;
pub mod units;

// Foundation crate: small, well-tested primitives only.
pub use screen::*;
pub use units::*;
