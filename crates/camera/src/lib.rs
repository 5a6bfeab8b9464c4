pub mod fragment;
pub mod view_state;

pub use view_state::*;
