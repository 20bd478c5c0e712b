//! Sideline list of content cards

use dioxus::prelude::*;

use crate::components::ContentSidelineItem;
use crate::types::Content;

/// Props for ContentSideline
#[derive(Props, Clone, PartialEq)]
pub struct ContentSidelineProps {
    pub contents: Vec<Content>,
}

/// Column of content cards, one per item, in the given order
#[component]
pub fn ContentSideline(props: ContentSidelineProps) -> Element {
    rsx! {
        div {
            class: "content-sideline",
            for content in props.contents.iter() {
                ContentSidelineItem {
                    key: "{content.id}",
                    content: content.clone(),
                }
            }
        }
    }
}
