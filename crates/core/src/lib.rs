//! Reelnotes Core Library
//!
//! Annotation model, search/aggregation and the results view state behind
//! the reelnotes desktop app and CLI.

pub mod error;
pub mod filter;
pub mod format;
pub mod indicator;
pub mod paths;
pub mod results;
pub mod services;
pub mod source;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ReelnotesError, Result, ServiceError};
pub use filter::{
    AnnotationFilterModel, ConfidenceTier, FilterView, Stats, compute_stats, confidence_tier,
    filter,
};
pub use format::{format_confidence, format_duration, format_range, format_results_readable};
pub use indicator::{COPIED_RESET_DELAY, CopiedIndicator, IndicatorToken};
pub use results::{EmptyState, ResultsView};
pub use services::{Clipboard, Playback, QueuedExporter, SegmentExporter};
pub use source::{load_annotation_set, load_or_sample, sample_set, save_export_request, validate};
pub use types::{
    AnalysisStatus, Annotation, AnnotationSet, ExportRequest, SegmentMarker, VideoSource,
};
