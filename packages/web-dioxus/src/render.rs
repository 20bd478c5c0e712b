//! Server-side rendering of content cards to HTML strings

use std::path::Path;

use dioxus::prelude::*;

use crate::components::{ContentSideline, ContentSidelineItem};
use crate::error::{Result, SidelineError};
use crate::types::Content;

/// Render a single card.
pub fn render_content_sideline_item(content: &Content) -> String {
    dioxus_ssr::render_element(rsx! {
        ContentSidelineItem { content: content.clone() }
    })
}

/// Render the sideline container with one card per item.
pub fn render_content_sideline(contents: &[Content]) -> String {
    dioxus_ssr::render_element(rsx! {
        ContentSideline { contents: contents.to_vec() }
    })
}

/// Render a standalone HTML document around the sideline.
pub fn render_page(contents: &[Content], stylesheet_href: &str) -> String {
    let document = dioxus_ssr::render_element(rsx! {
        head {
            meta { charset: "utf-8" }
            link { rel: "stylesheet", href: "{stylesheet_href}" }
        }
        body {
            section {
                class: "section",
                ContentSideline { contents: contents.to_vec() }
            }
        }
    });

    format!("<!DOCTYPE html><html>{document}</html>")
}

/// Write rendered markup to `path`, creating parent directories as needed.
pub fn write_rendered(path: impl AsRef<Path>, html: &str) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| SidelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, html).map_err(write_error)?;

    tracing::debug!(path = %path.display(), bytes = html.len(), "Wrote rendered markup");
    Ok(())
}
