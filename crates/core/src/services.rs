//! Capabilities the results view depends on but does not implement.

use crate::{
    error::ServiceError,
    types::{ExportRequest, SegmentMarker, VideoSource},
};

/// Media playback collaborator. Seeks are requests; the player decides
/// whether they succeed.
pub trait Playback {
    fn load(&mut self, video: &VideoSource, segments: &[SegmentMarker]);
    fn seek(&mut self, seconds: f64) -> Result<(), ServiceError>;
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ServiceError>;
}

pub trait SegmentExporter {
    fn export(&mut self, request: &ExportRequest) -> Result<(), ServiceError>;
}

/// Exporter that only records requests; the caller drains and persists them.
#[derive(Debug, Default)]
pub struct QueuedExporter {
    pending: Vec<ExportRequest>,
}

impl QueuedExporter {
    pub fn drain(&mut self) -> Vec<ExportRequest> {
        std::mem::take(&mut self.pending)
    }
}

impl SegmentExporter for QueuedExporter {
    fn export(&mut self, request: &ExportRequest) -> Result<(), ServiceError> {
        self.pending.push(request.clone());
        Ok(())
    }
}
