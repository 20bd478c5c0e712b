use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

/// Bulma release the card class names are written against.
pub const DEFAULT_STYLESHEET_HREF: &str =
    "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css";

pub const DEFAULT_CONTENT_PATH: &str = "content.json";

/// Renderer configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub content_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub stylesheet_href: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source. Empty values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            content_path: var("SIDELINE_CONTENT_PATH")
                .unwrap_or_else(|| DEFAULT_CONTENT_PATH.to_string())
                .into(),
            output_path: var("SIDELINE_OUTPUT_PATH").map(PathBuf::from),
            stylesheet_href: var("SIDELINE_STYLESHEET_HREF")
                .unwrap_or_else(|| DEFAULT_STYLESHEET_HREF.to_string()),
        }
    }
}
