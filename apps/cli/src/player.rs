use console::style;
use reelnotes_core::{Playback, SegmentMarker, ServiceError, VideoSource, format_duration};

/// Playback collaborator for the terminal: there is no picture, so seeks are
/// acknowledged and echoed back.
#[derive(Default)]
pub struct TerminalPlayer {
    url: String,
    duration: f64,
}

impl Playback for TerminalPlayer {
    fn load(&mut self, video: &VideoSource, segments: &[SegmentMarker]) {
        tracing::debug!(url = %video.url, segments = segments.len(), "terminal player loaded");
        self.url = video.url.clone();
        self.duration = video.duration;
    }

    fn seek(&mut self, seconds: f64) -> Result<(), ServiceError> {
        if seconds > self.duration {
            return Err(ServiceError::SeekFailed {
                seconds,
                reason: format!("video is only {} long", format_duration(self.duration)),
            });
        }
        println!(
            "{} Seeking {} to {}",
            style("▶").cyan().bold(),
            style(&self.url).dim(),
            style(format_duration(seconds)).cyan()
        );
        Ok(())
    }
}
