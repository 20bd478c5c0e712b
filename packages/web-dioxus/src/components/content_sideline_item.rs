//! Content sideline card component

use dioxus::prelude::*;

use crate::types::Content;

/// Number of summary characters shown on a card.
pub const SUMMARY_PREVIEW_CHARS: usize = 100;

/// Suffix appended to every summary preview.
pub const SUMMARY_ELLIPSIS: &str = "...";

/// Props for ContentSidelineItem
#[derive(Props, Clone, PartialEq)]
pub struct ContentSidelineItemProps {
    pub content: Content,
}

/// Card showing a content title, a summary preview and its labels as tags
#[component]
pub fn ContentSidelineItem(props: ContentSidelineItemProps) -> Element {
    let content = &props.content;
    let summary = summary_preview(&content.summary);

    rsx! {
        div {
            class: "box content-sideline-item",
            div {
                class: "content",
                h3 {
                    class: "title is-4",
                    "{content.title}"
                }
                p { "{summary}" }
                div {
                    class: "tags",
                    for (index, label) in content.labels.iter().enumerate() {
                        span {
                            key: "{index}",
                            class: "tag",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// First [`SUMMARY_PREVIEW_CHARS`] characters of `summary` followed by
/// [`SUMMARY_ELLIPSIS`].
///
/// The ellipsis is appended even when nothing was cut off.
pub fn summary_preview(summary: &str) -> String {
    let mut preview: String = summary.chars().take(SUMMARY_PREVIEW_CHARS).collect();
    preview.push_str(SUMMARY_ELLIPSIS);
    preview
}
