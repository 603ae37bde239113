use std::{path::PathBuf, time::Duration};

use iced::time::Instant;
use iced::{Element, Subscription, Task, Theme};
use reelnotes_core::{
    AnnotationSet, COPIED_RESET_DELAY, IndicatorToken, QueuedExporter, ResultsView, format_range,
    load_or_sample, paths, sample_set, save_export_request,
};

use crate::{bridge::PendingClipboard, player::SimulatedPlayer, view};

const PLAYER_TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct Config {
    pub annotations_path: Option<PathBuf>,
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<AnnotationSet, String>),
    SearchChanged(String),
    PlaySegment(String),
    TogglePlayback,
    Tick(Instant),
    Copy(String),
    CopiedExpired(IndicatorToken),
    Download(String),
    ExportFinished(Result<PathBuf, String>),
    DismissNotice,
}

pub struct App {
    results: Option<ResultsView<SimulatedPlayer>>,
    clipboard: PendingClipboard,
    exporter: QueuedExporter,
    exports_dir: PathBuf,
    notice: Option<String>,
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let app = Self {
            results: None,
            clipboard: PendingClipboard::default(),
            exporter: QueuedExporter::default(),
            exports_dir: paths::get_exports_dir(&config.data_dir),
            notice: None,
        };

        let path = config.annotations_path;
        let load = Task::perform(
            async move {
                load_or_sample(path.as_deref())
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::Loaded,
        );
        (app, load)
    }

    pub fn title(&self) -> String {
        match &self.results {
            Some(results) if !results.video().title.is_empty() => {
                format!("Reelnotes - {}", results.video().title)
            }
            _ => "Reelnotes".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match &self.results {
            Some(results) if results.player().is_playing() => {
                iced::time::every(PLAYER_TICK).map(Message::Tick)
            }
            _ => Subscription::none(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(result) => {
                let set = result.unwrap_or_else(|e| {
                    tracing::error!(error = %e, "failed to load annotations");
                    self.notice = Some(format!("Could not load annotations ({e}), showing sample"));
                    sample_set()
                });
                self.results = Some(ResultsView::new(set, SimulatedPlayer::new()));
            }
            Message::SearchChanged(query) => {
                if let Some(results) = &mut self.results {
                    results.on_search_change(query);
                }
            }
            Message::PlaySegment(id) => {
                if let Some(results) = &mut self.results
                    && let Some(Err(e)) = results.on_play_segment(&id)
                {
                    self.notice = Some(format!("Playback: {e}"));
                }
            }
            Message::TogglePlayback => {
                if let Some(results) = &mut self.results {
                    results.player_mut().toggle();
                }
            }
            Message::Tick(now) => {
                if let Some(results) = &mut self.results
                    && let Some(position) = results.player_mut().tick(now)
                {
                    results.on_playback_time_update(position);
                }
            }
            Message::Copy(id) => return self.copy(&id),
            Message::CopiedExpired(token) => {
                if let Some(results) = &mut self.results {
                    results.expire_copied(token);
                }
            }
            Message::Download(id) => return self.download(&id),
            Message::ExportFinished(result) => {
                self.notice = Some(match result {
                    Ok(path) => format!("Export request saved to {}", path.display()),
                    Err(e) => format!("Export failed: {e}"),
                });
            }
            Message::DismissNotice => self.notice = None,
        }
        Task::none()
    }

    fn copy(&mut self, id: &str) -> Task<Message> {
        let Some(results) = &mut self.results else {
            return Task::none();
        };

        match results.copy_annotation(id, &mut self.clipboard) {
            Some(Ok(token)) => {
                let writes = self.clipboard.drain().into_iter().map(iced::clipboard::write);
                let reset = Task::perform(
                    async { tokio::time::sleep(COPIED_RESET_DELAY).await },
                    move |()| Message::CopiedExpired(token),
                );
                Task::batch(writes.chain(std::iter::once(reset)))
            }
            Some(Err(e)) => {
                self.notice = Some(format!("Copy failed: {e}"));
                Task::none()
            }
            None => Task::none(),
        }
    }

    fn download(&mut self, id: &str) -> Task<Message> {
        let Some(results) = &mut self.results else {
            return Task::none();
        };

        match results.download_segment(id, &mut self.exporter) {
            Some(Ok(())) => {
                if let Some(annotation) = results.annotation(id) {
                    self.notice = Some(format!(
                        "Downloading segment: {} ({})",
                        annotation.title,
                        format_range(annotation)
                    ));
                }
                let saves = self.exporter.drain().into_iter().map(|request| {
                    let dir = self.exports_dir.clone();
                    Task::perform(
                        async move {
                            save_export_request(&request, &dir)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        Message::ExportFinished,
                    )
                });
                Task::batch(saves)
            }
            Some(Err(e)) => {
                self.notice = Some(format!("Export failed: {e}"));
                Task::none()
            }
            None => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.results {
            Some(results) => view::results_page(results, self.notice.as_deref()),
            None => view::loading(),
        }
    }
}
