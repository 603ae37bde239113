use iced::widget::{
    Column, Row, button, column, container, progress_bar, row, scrollable, text, text_input,
};
use iced::{Alignment, Color, Element, Length};
use reelnotes_core::{
    Annotation, ConfidenceTier, ResultsView, confidence_tier, format::format_avg_confidence,
    format_confidence, format_duration, format_range,
};

use crate::{app::Message, player::SimulatedPlayer};

const MUTED: Color = Color::from_rgb(0.6, 0.62, 0.66);
const ACCENT: Color = Color::from_rgb(0.38, 0.56, 0.98);

fn tier_color(tier: ConfidenceTier) -> Color {
    match tier {
        ConfidenceTier::High => Color::from_rgb(0.29, 0.87, 0.5),
        ConfidenceTier::Medium => Color::from_rgb(0.98, 0.8, 0.08),
        ConfidenceTier::Low => Color::from_rgb(0.97, 0.44, 0.44),
    }
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> container::Container<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
}

fn labeled<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    column![text(label).size(13).color(MUTED), text(value).size(18)]
        .spacing(4)
        .into()
}

pub fn loading<'a>() -> Element<'a, Message> {
    container(text("Loading analysis results...").size(18))
        .center(Length::Fill)
        .into()
}

pub fn results_page<'a>(
    results: &'a ResultsView<SimulatedPlayer>,
    notice: Option<&'a str>,
) -> Element<'a, Message> {
    let header = column![
        text("Video Analysis Results").size(30),
        text(format!(
            "AI has analyzed your video and found {} relevant segments",
            results.annotations().len()
        ))
        .color(MUTED),
    ]
    .spacing(6);

    let body = row![
        column![player_panel(results), video_info(results)]
            .spacing(16)
            .width(Length::FillPortion(2)),
        annotation_list(results).width(Length::FillPortion(1)),
    ]
    .spacing(24)
    .height(Length::Fill);

    let mut page = column![header, body].spacing(24).padding(24);

    if let Some(notice) = notice {
        page = page.push(card(
            row![
                text(notice).width(Length::Fill),
                button(text("Dismiss")).on_press(Message::DismissNotice),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        ));
    }

    page.into()
}

fn player_panel<'a>(results: &'a ResultsView<SimulatedPlayer>) -> Element<'a, Message> {
    let player = results.player();
    let duration = results.video().duration;

    let now_playing = match results.active_annotation() {
        Some(annotation) => text(format!("Now playing: {}", annotation.title)).color(ACCENT),
        None => text(player.url()).size(13).color(MUTED),
    };

    let screen = container(
        column![
            text(format!(
                "{} / {}",
                format_duration(results.current_time()),
                format_duration(duration)
            ))
            .size(36),
            now_playing,
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(260.0))
    .align_y(Alignment::Center)
    .style(container::dark);

    let markers = Row::with_children(player.markers().iter().map(|marker| {
        button(text(format_duration(marker.start)).size(12))
            .on_press(Message::PlaySegment(marker.id.clone()))
            .style(button::secondary)
            .into()
    }))
    .spacing(6);

    let controls = row![
        button(text(if player.is_playing() { "Pause" } else { "Play" }))
            .on_press(Message::TogglePlayback),
        progress_bar(0.0..=1.0, results.progress()),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    card(column![screen, controls, markers].spacing(12)).into()
}

fn video_info<'a>(results: &'a ResultsView<SimulatedPlayer>) -> Element<'a, Message> {
    let video = results.video();

    let title_row = row![
        column![
            text(&video.title).size(20),
            text(format!("Uploaded: {}", video.uploaded)).color(MUTED),
        ]
        .spacing(4)
        .width(Length::Fill),
        labeled("Duration", format_duration(video.duration)),
    ]
    .align_y(Alignment::Center);

    let facts = row![
        labeled("File Size", format!("{} MB", video.file_size_mb)),
        labeled("Format", video.format.clone()),
        labeled("Resolution", video.resolution.clone()),
        labeled("Status", video.status.label().to_string()),
    ]
    .spacing(32);

    card(column![title_row, facts].spacing(16)).into()
}

fn stats_row<'a>(results: &'a ResultsView<SimulatedPlayer>) -> Row<'a, Message> {
    let stats = results.stats();

    row![
        card(labeled("Total Duration", format_duration(stats.total_duration))),
        card(labeled(
            "Avg Confidence",
            format_avg_confidence(&stats, results.annotations().len())
        )),
        card(labeled("Topics Found", stats.topic_count.to_string())),
    ]
    .spacing(8)
}

fn annotation_list<'a>(
    results: &'a ResultsView<SimulatedPlayer>,
) -> container::Container<'a, Message> {
    let filtered = results.filtered();
    let active_id = results.active_annotation().map(|a| a.id.as_str());

    let header = column![
        text("AI Analysis Results").size(22),
        text(format!("Found {} relevant segments", filtered.len())).color(MUTED),
        text_input("Search annotations...", results.query())
            .on_input(Message::SearchChanged)
            .padding(8),
        stats_row(results),
    ]
    .spacing(10);

    let items: Element<'a, Message> = match results.empty_state() {
        Some(empty) => column![
            text("No annotations found").size(18),
            text(empty.hint()).color(MUTED),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into(),
        None => scrollable(
            Column::with_children(filtered.into_iter().enumerate().map(|(index, annotation)| {
                annotation_item(
                    index,
                    annotation,
                    results.is_copied(&annotation.id),
                    active_id == Some(annotation.id.as_str()),
                )
            }))
            .spacing(10),
        )
        .height(Length::Fill)
        .into(),
    };

    card(column![header, items].spacing(16))
}

fn annotation_item<'a>(
    index: usize,
    annotation: &'a Annotation,
    copied: bool,
    active: bool,
) -> Element<'a, Message> {
    let tier = confidence_tier(annotation.confidence);

    let title = text(&annotation.title)
        .size(16)
        .color(if active { ACCENT } else { Color::WHITE });

    let meta = row![
        text(format_range(annotation)).size(13),
        text(format!("{} confidence", format_confidence(annotation.confidence)))
            .size(13)
            .color(tier_color(tier)),
        text(&annotation.topic).size(13).color(MUTED),
    ]
    .spacing(12);

    let keywords = Row::with_children(
        annotation
            .display_keywords()
            .iter()
            .map(|keyword| text(keyword).size(12).color(MUTED).into()),
    )
    .spacing(8);

    let actions = column![
        button(text("Play")).on_press(Message::PlaySegment(annotation.id.clone())),
        button(text(if copied { "Copied" } else { "Copy" }))
            .on_press(Message::Copy(annotation.id.clone()))
            .style(button::secondary),
        button(text("Download"))
            .on_press(Message::Download(annotation.id.clone()))
            .style(button::secondary),
    ]
    .spacing(6);

    let details = column![
        row![text(format!("{}.", index + 1)).size(16).color(ACCENT), title].spacing(8),
        meta,
        text(&annotation.description).size(14),
        keywords,
    ]
    .spacing(6)
    .width(Length::Fill);

    container(row![details, actions].spacing(12))
        .padding(12)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
