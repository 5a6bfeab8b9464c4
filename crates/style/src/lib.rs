pub mod catalog;
pub mod document;
pub mod session;
pub mod units;

pub use document::*;
pub use session::*;
