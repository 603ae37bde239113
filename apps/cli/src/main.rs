use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use reelnotes_core::{
    ConfidenceTier, QueuedExporter, ResultsView, confidence_tier, format::format_avg_confidence,
    format_confidence, format_duration, format_range, format_results_readable, load_or_sample,
    paths::{get_exports_dir, get_root_data_dir, resolve_annotations_path},
    save_export_request,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::player::TerminalPlayer;

mod player;

fn format_elapsed(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), (secs % 60.0).floor())
    }
}

#[derive(Parser)]
#[command(name = "reelnotes")]
#[command(about = "Search AI-generated video annotations and jump to segments")]
struct Cli {
    /// Annotation set JSON file. Falls back to REELNOTES_ANNOTATIONS, then the
    /// default data file, then the built-in sample.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Only list annotations whose title or description contains this text
    #[arg(short, long, default_value = "")]
    query: String,

    /// Seek the player to the start of the annotation with this id
    #[arg(long, value_name = "ID")]
    play: Option<String>,

    /// Write a segment extraction request for the annotation with this id
    #[arg(long, value_name = "ID")]
    export: Option<String>,

    /// Print the filtered list and stats as JSON instead of the readable page
    #[arg(long, conflicts_with_all = ["markdown", "play", "export"])]
    json: bool,

    /// Print the page as Markdown
    #[arg(long)]
    markdown: bool,
}

fn print_page(results: &ResultsView<TerminalPlayer>) {
    let page = results.view();
    let video = results.video();

    println!(
        "{} {}  {}",
        style(&video.title).bold(),
        style(format!("({})", format_duration(video.duration))).dim(),
        style(video.status.label()).green()
    );
    println!(
        "{} {}   {} {}   {} {}\n",
        style("Total duration").dim(),
        format_duration(page.stats.total_duration),
        style("Avg confidence").dim(),
        format_avg_confidence(&page.stats, results.annotations().len()),
        style("Topics").dim(),
        page.stats.topic_count
    );
    println!("Found {} relevant segments\n", page.filtered.len());

    for (index, annotation) in page.filtered.iter().enumerate() {
        let confidence = format!("{:>6}", format_confidence(annotation.confidence));
        let confidence = match confidence_tier(annotation.confidence) {
            ConfidenceTier::High => style(confidence).green(),
            ConfidenceTier::Medium => style(confidence).yellow(),
            ConfidenceTier::Low => style(confidence).red(),
        };
        println!(
            "{:>3}. {} {} {}  {}",
            index + 1,
            style(format!("[{}]", annotation.id)).dim(),
            style(format_range(annotation)).cyan(),
            confidence,
            style(&annotation.title).bold()
        );
        println!("     {}", annotation.description);
        let keywords = annotation.display_keywords();
        if !keywords.is_empty() {
            println!("     {}", style(keywords.join(" · ")).dim());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelnotes=info,reelnotes_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let data_dir = get_root_data_dir();
    let annotations_path = resolve_annotations_path(cli.file.as_deref(), &data_dir);

    let load_start = Instant::now();
    let set = load_or_sample(annotations_path.as_deref())
        .await
        .with_context(|| match &annotations_path {
            Some(path) => format!("failed to load {}", path.display()),
            None => "failed to load sample annotations".to_string(),
        })?;

    let mut results = ResultsView::new(set, TerminalPlayer::default());
    results.on_search_change(cli.query.clone());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results.view())?);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("reelnotes").cyan().bold(),
        style("Video Analysis Results").dim()
    );
    println!(
        "{} Loaded {} segments {}",
        style("✓").green().bold(),
        results.annotations().len(),
        match &annotations_path {
            Some(path) => style(format!("from {}", path.display())).dim(),
            None => style("(sample)".to_string()).dim(),
        }
    );
    println!(
        "{}",
        style(format!("[{}]", format_elapsed(load_start.elapsed()))).dim()
    );
    println!("{}", style("─".repeat(60)).dim());

    if cli.markdown {
        print!(
            "{}",
            format_results_readable(results.video(), results.annotations(), results.query())
        );
    } else {
        print_page(&results);
    }

    if let Some(empty) = results.empty_state() {
        println!(
            "{} No annotations found. {}",
            style("!").yellow().bold(),
            style(empty.hint()).dim()
        );
    }

    if let Some(id) = &cli.play {
        match results.on_play_segment(id) {
            Some(Ok(())) => println!(
                "{} Current time {}",
                style("▶").cyan().bold(),
                style(format_duration(results.current_time())).cyan()
            ),
            Some(Err(e)) => eprintln!("{} {}", style("Playback:").yellow().bold(), e),
            None => eprintln!("{} unknown segment id {}", style("Error:").red().bold(), id),
        }
    }

    if let Some(id) = &cli.export {
        let mut exporter = QueuedExporter::default();
        match results.download_segment(id, &mut exporter) {
            Some(Ok(())) => {
                let exports_dir = get_exports_dir(&data_dir);
                for request in exporter.drain() {
                    match save_export_request(&request, &exports_dir).await {
                        Ok(path) => println!(
                            "{} Export request for {} saved: {}",
                            style("✓").green().bold(),
                            style(&request.title).bold(),
                            style(path.display()).cyan()
                        ),
                        Err(e) => eprintln!("{} {}", style("Export failed:").yellow().bold(), e),
                    }
                }
            }
            Some(Err(e)) => eprintln!("{} {}", style("Export failed:").yellow().bold(), e),
            None => eprintln!("{} unknown segment id {}", style("Error:").red().bold(), id),
        }
    }

    Ok(())
}
