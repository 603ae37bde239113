//! State behind the results page.
//!
//! `ResultsView` owns the annotation set, the search query and the playback
//! position. Derived data (filtered list, stats) is recomputed from the
//! filter model on each read.

use crate::{
    error::ServiceError,
    filter::{self, AnnotationFilterModel, FilterView, Stats},
    format::format_clipboard_text,
    indicator::{CopiedIndicator, IndicatorToken},
    services::{Clipboard, Playback, SegmentExporter},
    types::{Annotation, AnnotationSet, ExportRequest, SegmentMarker, VideoSource},
};

/// Why the list is empty, when it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The query filtered everything out.
    NoMatches,
    /// There is nothing to show at all.
    NoAnnotations,
}

impl EmptyState {
    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoMatches => "Try a different search term",
            EmptyState::NoAnnotations => "Upload a video to start analysis",
        }
    }
}

pub struct ResultsView<P: Playback> {
    set: AnnotationSet,
    query: String,
    current_time: f64,
    copied: CopiedIndicator,
    player: P,
}

impl<P: Playback> ResultsView<P> {
    /// Hand the video and segment markers to the player, then start with an
    /// empty query at time zero.
    pub fn new(set: AnnotationSet, mut player: P) -> Self {
        let markers: Vec<SegmentMarker> = set.annotations.iter().map(Annotation::marker).collect();
        player.load(&set.video, &markers);
        tracing::debug!(
            video = %set.video.url,
            segments = markers.len(),
            "results view ready"
        );

        Self {
            set,
            query: String::new(),
            current_time: 0.0,
            copied: CopiedIndicator::new(),
            player,
        }
    }

    pub fn on_search_change(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Jump to the start of the annotation and ask the player to seek there.
    ///
    /// Returns `None` for an unknown id. The stored time moves even if the
    /// player rejects the seek.
    pub fn on_play_segment(&mut self, id: &str) -> Option<Result<(), ServiceError>> {
        let start = self.annotation(id)?.start;
        self.current_time = start;

        let result = self.player.seek(start);
        match &result {
            Ok(()) => tracing::debug!(id, start, "seek requested"),
            Err(e) => tracing::warn!(id, start, error = %e, "seek request failed"),
        }
        Some(result)
    }

    pub fn on_playback_time_update(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        self.current_time = seconds.max(0.0);
    }

    /// Copy the annotation's text and show the copied badge on success.
    pub fn copy_annotation(
        &mut self,
        id: &str,
        clipboard: &mut dyn Clipboard,
    ) -> Option<Result<IndicatorToken, ServiceError>> {
        let text = format_clipboard_text(self.annotation(id)?);

        let result = match clipboard.write_text(&text) {
            Ok(()) => Ok(self.copied.trigger(id)),
            Err(e) => {
                tracing::warn!(id, error = %e, "copy failed");
                Err(e)
            }
        };
        Some(result)
    }

    pub fn download_segment(
        &mut self,
        id: &str,
        exporter: &mut dyn SegmentExporter,
    ) -> Option<Result<(), ServiceError>> {
        let request = ExportRequest::from(self.annotation(id)?);

        let result = exporter.export(&request);
        if let Err(e) = &result {
            tracing::warn!(id, error = %e, "segment export failed");
        }
        Some(result)
    }

    /// Delayed reset of the copied badge; stale tokens are ignored.
    pub fn expire_copied(&mut self, token: IndicatorToken) -> bool {
        self.copied.expire(token)
    }

    pub fn annotation(&self, id: &str) -> Option<&Annotation> {
        self.set.annotations.iter().find(|ann| ann.id == id)
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.set.annotations
    }

    pub fn video(&self) -> &VideoSource {
        &self.set.video
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn filtered(&self) -> Vec<&Annotation> {
        filter::filter(&self.set.annotations, &self.query)
    }

    pub fn stats(&self) -> Stats {
        filter::compute_stats(&self.set.annotations)
    }

    pub fn view(&self) -> FilterView<'_> {
        AnnotationFilterModel::derive(&self.set.annotations, &self.query)
    }

    /// The annotation playing right now, for highlighting.
    pub fn active_annotation(&self) -> Option<&Annotation> {
        self.set
            .annotations
            .iter()
            .find(|ann| ann.contains(self.current_time))
    }

    /// Playback position as a fraction of the video duration.
    pub fn progress(&self) -> f32 {
        if self.set.video.duration <= 0.0 {
            return 0.0;
        }
        (self.current_time / self.set.video.duration).clamp(0.0, 1.0) as f32
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.set.annotations.is_empty() {
            Some(EmptyState::NoAnnotations)
        } else if self.filtered().is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }

    pub fn is_copied(&self, id: &str) -> bool {
        self.copied.is_copied(id)
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::sample_set;

    #[derive(Default)]
    struct RecordingPlayer {
        loaded: Vec<SegmentMarker>,
        seeks: Vec<f64>,
        fail: bool,
    }

    impl Playback for RecordingPlayer {
        fn load(&mut self, _video: &VideoSource, segments: &[SegmentMarker]) {
            self.loaded = segments.to_vec();
        }

        fn seek(&mut self, seconds: f64) -> Result<(), ServiceError> {
            self.seeks.push(seconds);
            if self.fail {
                Err(ServiceError::SeekFailed {
                    seconds,
                    reason: "no media".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ServiceError> {
            Err(ServiceError::ClipboardUnavailable {
                reason: "denied".into(),
            })
        }
    }

    #[derive(Default)]
    struct MemoryClipboard(Vec<String>);

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ServiceError> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    fn view() -> ResultsView<RecordingPlayer> {
        ResultsView::new(sample_set(), RecordingPlayer::default())
    }

    #[test]
    fn starts_at_zero_values_and_loads_markers() {
        let view = view();

        assert_eq!(view.query(), "");
        assert_eq!(view.current_time(), 0.0);
        assert_eq!(view.player().loaded.len(), 4);
        assert_eq!(view.player().loaded[1].start, 520.0);
        assert!(view.player().seeks.is_empty());
    }

    #[test]
    fn play_segment_sets_time_and_seeks_once() {
        let mut view = view();

        assert_eq!(view.on_play_segment("2"), Some(Ok(())));
        assert_eq!(view.current_time(), 520.0);
        assert_eq!(view.player().seeks, vec![520.0]);
        assert_eq!(view.active_annotation().map(|a| a.id.as_str()), Some("2"));
    }

    #[test]
    fn failed_seek_still_moves_time() {
        let mut view = ResultsView::new(
            sample_set(),
            RecordingPlayer {
                fail: true,
                ..Default::default()
            },
        );

        assert!(matches!(view.on_play_segment("3"), Some(Err(_))));
        assert_eq!(view.current_time(), 850.0);
    }

    #[test]
    fn unknown_segment_is_ignored() {
        let mut view = view();

        assert_eq!(view.on_play_segment("nope"), None);
        assert_eq!(view.current_time(), 0.0);
        assert!(view.player().seeks.is_empty());
    }

    #[test]
    fn search_is_stored_verbatim() {
        let mut view = view();
        view.on_search_change("  Hooks ");

        assert_eq!(view.query(), "  Hooks ");
        assert!(view.filtered().is_empty());
        assert_eq!(view.empty_state(), Some(EmptyState::NoMatches));

        view.on_search_change("hooks");
        assert_eq!(view.filtered().len(), 2);
        assert_eq!(view.empty_state(), None);
    }

    #[test]
    fn time_updates_guard_bad_values() {
        let mut view = view();

        view.on_playback_time_update(12.5);
        assert_eq!(view.current_time(), 12.5);

        view.on_playback_time_update(f64::NAN);
        assert_eq!(view.current_time(), 12.5);

        view.on_playback_time_update(-3.0);
        assert_eq!(view.current_time(), 0.0);
    }

    #[test]
    fn progress_is_fraction_of_duration() {
        let mut view = view();
        view.on_playback_time_update(650.0);
        assert!((view.progress() - 0.5).abs() < 1e-6);

        view.on_playback_time_update(5000.0);
        assert_eq!(view.progress(), 1.0);
    }

    #[test]
    fn empty_collection_has_zero_stats() {
        let mut set = sample_set();
        set.annotations.clear();
        let view = ResultsView::new(set, RecordingPlayer::default());

        assert_eq!(view.stats(), Stats::default());
        assert!(view.filtered().is_empty());
        assert_eq!(view.empty_state(), Some(EmptyState::NoAnnotations));
    }

    #[test]
    fn copy_triggers_badge_until_expired() {
        let mut view = view();
        let mut clipboard = MemoryClipboard::default();

        let token = view
            .copy_annotation("1", &mut clipboard)
            .expect("known id")
            .expect("copy succeeds");

        assert!(view.is_copied("1"));
        assert!(clipboard.0[0].starts_with("React Hooks Introduction [3:40 - 5:40]"));
        assert!(view.expire_copied(token));
        assert!(!view.is_copied("1"));
    }

    #[test]
    fn copy_failure_leaves_state_alone() {
        let mut view = view();
        view.on_search_change("state");
        view.on_playback_time_update(42.0);

        let result = view.copy_annotation("3", &mut BrokenClipboard);

        assert!(matches!(result, Some(Err(ServiceError::ClipboardUnavailable { .. }))));
        assert!(!view.is_copied("3"));
        assert_eq!(view.query(), "state");
        assert_eq!(view.current_time(), 42.0);
    }
}
