use std::path::PathBuf;

use clap::Parser;
use reelnotes_core::paths::{get_root_data_dir, resolve_annotations_path};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{App, Config};

mod app;
mod bridge;
mod player;
mod view;

#[derive(Parser)]
#[command(name = "reelnotes-desktop")]
#[command(about = "Browse AI-generated video annotations next to the video")]
struct Cli {
    /// Annotation set JSON file. Falls back to REELNOTES_ANNOTATIONS, then the
    /// default data file, then the built-in sample.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelnotes_desktop=info,reelnotes_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let data_dir = get_root_data_dir();
    let config = Config {
        annotations_path: resolve_annotations_path(cli.file.as_deref(), &data_dir),
        data_dir,
    };
    tracing::info!(annotations = ?config.annotations_path, "starting desktop app");

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((1280.0, 820.0))
        .run()
}
