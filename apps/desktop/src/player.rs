use std::time::Duration;

use iced::time::Instant;
use reelnotes_core::{Playback, SegmentMarker, ServiceError, VideoSource};

/// Stand-in for a real media pipeline: a clock that advances while playing
/// and reports its position through `tick`.
#[derive(Debug, Default)]
pub struct SimulatedPlayer {
    url: String,
    duration: f64,
    position: f64,
    playing: bool,
    markers: Vec<SegmentMarker>,
    last_tick: Option<Instant>,
}

impl SimulatedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn markers(&self) -> &[SegmentMarker] {
        &self.markers
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn toggle(&mut self) {
        if self.duration <= 0.0 {
            return;
        }
        if !self.playing && self.position >= self.duration {
            self.position = 0.0;
        }
        self.playing = !self.playing;
        self.last_tick = None;
    }

    /// Advance by the wall time since the previous tick and report the new
    /// position. Returns `None` while paused.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        if !self.playing {
            return None;
        }
        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_tick = Some(now);
        Some(self.advance_by(elapsed))
    }

    pub fn advance_by(&mut self, elapsed: Duration) -> f64 {
        self.position = (self.position + elapsed.as_secs_f64()).min(self.duration);
        if self.position >= self.duration {
            self.playing = false;
        }
        self.position
    }
}

impl Playback for SimulatedPlayer {
    fn load(&mut self, video: &VideoSource, segments: &[SegmentMarker]) {
        tracing::info!(url = %video.url, segments = segments.len(), "player loaded");
        self.url = video.url.clone();
        self.duration = video.duration.max(0.0);
        self.position = 0.0;
        self.playing = false;
        self.markers = segments.to_vec();
        self.last_tick = None;
    }

    fn seek(&mut self, seconds: f64) -> Result<(), ServiceError> {
        if self.duration <= 0.0 {
            return Err(ServiceError::SeekFailed {
                seconds,
                reason: "no video loaded".to_string(),
            });
        }
        self.position = seconds.clamp(0.0, self.duration);
        self.playing = true;
        self.last_tick = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> SimulatedPlayer {
        let mut player = SimulatedPlayer::new();
        let video = VideoSource {
            url: "file:///talk.mp4".into(),
            title: String::new(),
            uploaded: String::new(),
            duration,
            file_size_mb: 0,
            format: String::new(),
            resolution: String::new(),
            status: Default::default(),
        };
        player.load(&video, &[]);
        player
    }

    #[test]
    fn seek_without_video_fails() {
        let mut player = SimulatedPlayer::new();
        assert!(player.seek(10.0).is_err());
        assert!(!player.is_playing());
    }

    #[test]
    fn seek_starts_playback_at_offset() {
        let mut player = loaded(100.0);
        player.seek(40.0).expect("seek");

        assert!(player.is_playing());
        assert_eq!(player.advance_by(Duration::from_secs(5)), 45.0);
    }

    #[test]
    fn first_tick_only_anchors_the_clock() {
        let mut player = loaded(100.0);
        player.toggle();

        let start = Instant::now();
        assert_eq!(player.tick(start), Some(0.0));
        assert_eq!(player.tick(start + Duration::from_secs(2)), Some(2.0));
    }

    #[test]
    fn stops_at_end_and_restarts_on_toggle() {
        let mut player = loaded(10.0);
        player.seek(9.0).expect("seek");

        assert_eq!(player.advance_by(Duration::from_secs(5)), 10.0);
        assert!(!player.is_playing());
        assert_eq!(player.tick(Instant::now()), None);

        player.toggle();
        assert!(player.is_playing());
        assert_eq!(player.advance_by(Duration::ZERO), 0.0);
    }
}
