use serde::{Deserialize, Serialize};

/// Maximum number of keywords rendered per annotation.
pub const MAX_DISPLAY_KEYWORDS: usize = 5;

/// One AI-identified video segment with its descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start: f64,
    pub end: f64,
    pub confidence: f64,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Annotation {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True when `seconds` falls inside `[start, end)`.
    pub fn contains(&self, seconds: f64) -> bool {
        self.start <= seconds && seconds < self.end
    }

    pub fn display_keywords(&self) -> &[String] {
        let n = self.keywords.len().min(MAX_DISPLAY_KEYWORDS);
        &self.keywords[..n]
    }

    pub fn marker(&self) -> SegmentMarker {
        SegmentMarker {
            id: self.id.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

/// Segment boundaries handed to the player for timeline markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentMarker {
    pub id: String,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Pending,
    Analyzing,
    #[default]
    Analyzed,
    Failed,
}

impl AnalysisStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisStatus::Pending => "Pending",
            AnalysisStatus::Analyzing => "Analyzing",
            AnalysisStatus::Analyzed => "Analyzed",
            AnalysisStatus::Failed => "Failed",
        }
    }
}

/// The analyzed video the annotations refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSource {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub uploaded: String,
    pub duration: f64,
    #[serde(default)]
    pub file_size_mb: u32,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub status: AnalysisStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    pub video: VideoSource,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// Fire-and-forget segment extraction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub id: String,
    pub title: String,
    pub start: f64,
    pub end: f64,
}

impl From<&Annotation> for ExportRequest {
    fn from(annotation: &Annotation) -> Self {
        Self {
            id: annotation.id.clone(),
            title: annotation.title.clone(),
            start: annotation.start,
            end: annotation.end,
        }
    }
}
