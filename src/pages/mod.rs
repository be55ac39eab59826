//! Panels behind the two tabs

mod feedback;
mod resources;

pub use feedback::*;
pub use resources::*;
