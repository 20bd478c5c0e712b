//! Reusable UI components

mod content_sideline;
mod content_sideline_item;

pub use content_sideline::*;
pub use content_sideline_item::*;
