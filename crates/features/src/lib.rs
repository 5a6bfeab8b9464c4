pub mod picked;
pub mod properties;

pub use picked::*;
pub use properties::*;
