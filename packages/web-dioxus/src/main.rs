//! Render a content sideline to HTML from a JSON file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use brainspread_web::{load_contents, render_content_sideline, render_page, write_rendered, Config};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "brainspread-sideline")]
#[command(about = "Render BrainSpread content cards to HTML")]
struct Cli {
    /// JSON file with one content object or an array of them
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write HTML here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the sideline in a full HTML document
    #[arg(long)]
    page: bool,

    /// Stylesheet linked from the document (with --page)
    #[arg(long)]
    stylesheet: Option<String>,
}

/// Flags merged over configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RenderOptions {
    input: PathBuf,
    /// `None` writes to stdout
    output: Option<PathBuf>,
    page: bool,
    stylesheet: String,
}

impl Cli {
    /// Flags win; config fills anything not given on the command line.
    fn resolve(self, config: Config) -> RenderOptions {
        RenderOptions {
            input: self.input.unwrap_or(config.content_path),
            output: self.output.or(config.output_path),
            page: self.page,
            stylesheet: self.stylesheet.unwrap_or(config.stylesheet_href),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for markup
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,brainspread_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = Cli::parse().resolve(Config::from_env());

    let contents = load_contents(&options.input).with_context(|| {
        format!("Failed to load content from {}", options.input.display())
    })?;
    tracing::info!(count = contents.len(), "Rendering content sideline");

    let html = if options.page {
        render_page(&contents, &options.stylesheet)
    } else {
        render_content_sideline(&contents)
    };

    match options.output {
        Some(path) => {
            write_rendered(&path, &html)?;
            tracing::info!(path = %path.display(), "Sideline written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}").context("Failed to write markup to stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use brainspread_web::config::DEFAULT_STYLESHEET_HREF;

    use super::*;

    fn config(output_path: Option<&str>) -> Config {
        Config {
            content_path: PathBuf::from("env/content.json"),
            output_path: output_path.map(PathBuf::from),
            stylesheet_href: "https://env.example/style.css".to_string(),
        }
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "brainspread-sideline",
            "--input",
            "cli/content.json",
            "--output",
            "cli/out.html",
            "--page",
            "--stylesheet",
            "https://cli.example/style.css",
        ]);

        let options = cli.resolve(config(Some("env/out.html")));

        assert_eq!(
            options,
            RenderOptions {
                input: PathBuf::from("cli/content.json"),
                output: Some(PathBuf::from("cli/out.html")),
                page: true,
                stylesheet: "https://cli.example/style.css".to_string(),
            }
        );
    }

    #[test]
    fn config_fills_missing_flags() {
        let cli = Cli::parse_from(["brainspread-sideline"]);

        let options = cli.resolve(config(Some("env/out.html")));

        assert_eq!(options.input, PathBuf::from("env/content.json"));
        assert_eq!(options.output, Some(PathBuf::from("env/out.html")));
        assert_eq!(options.stylesheet, "https://env.example/style.css");
        assert!(!options.page);
    }

    #[test]
    fn no_output_anywhere_means_stdout() {
        let cli = Cli::parse_from(["brainspread-sideline", "-i", "a.json"]);

        let options = cli.resolve(config(None));

        assert_eq!(options.output, None);
    }

    #[test]
    fn page_without_stylesheet_uses_default_href() {
        let env = Config::from_lookup(|_| None);
        let options = Cli::parse_from(["brainspread-sideline", "--page"]).resolve(env);

        assert!(options.page);
        assert_eq!(options.stylesheet, DEFAULT_STYLESHEET_HREF);
        assert_eq!(options.input, PathBuf::from("content.json"));
    }
}
