//! Reusable UI components

mod loading;
mod request_dialog;
mod resource_card;
mod tabs;

pub use loading::*;
pub use request_dialog::*;
pub use resource_card::*;
pub use tabs::*;
