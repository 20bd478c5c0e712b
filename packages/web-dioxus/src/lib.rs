//! BrainSpread content sideline
//!
//! Dioxus components that present content items as preview cards, plus
//! helpers that render them to HTML on the server.
//!
//! ## Rendering
//!
//! ```bash
//! cargo run -p brainspread-web -- --input content.json --page > sideline.html
//! ```

#![allow(non_snake_case)]

pub mod components;
pub mod config;
pub mod error;
pub mod render;
pub mod types;

pub use components::{summary_preview, ContentSideline, ContentSidelineItem};
pub use config::Config;
pub use error::{Result, SidelineError};
pub use render::{
    render_content_sideline, render_content_sideline_item, render_page, write_rendered,
};
pub use types::{load_contents, parse_contents, Content};
