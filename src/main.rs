#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use heartfall_core::SiteContent;

/// Global page content, resolved from command line before launch
static CONTENT: OnceLock<SiteContent> = OnceLock::new();

/// Get the page content (loaded from --content or the built-in page)
pub fn get_content() -> SiteContent {
    CONTENT.get().cloned().unwrap_or_default()
}

/// Heartfall - an animated proposal page
#[derive(Parser, Debug)]
#[command(name = "heartfall-desktop")]
#[command(about = "Heartfall - an animated Valentine's proposal page")]
struct Args {
    /// JSON file replacing the built-in page content
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window title
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let content = match args.content {
        Some(ref path) => match SiteContent::load(path) {
            Ok(content) => {
                tracing::info!("Loaded page content from {:?}", path);
                content
            }
            Err(e) => {
                tracing::error!("Failed to load content from {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SiteContent::default(),
    };

    // Store content globally
    let _ = CONTENT.set(content);

    // Tall portrait window, the page is a vertical scroll
    let window_width = 760.0;
    let window_height = 960.0;

    let title = args.title.unwrap_or_else(|| "Heartfall".to_string());

    tracing::info!("Starting '{}'", title);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
