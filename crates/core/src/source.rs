use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use tokio::fs;

use crate::{
    error::{ReelnotesError, Result},
    types::{AnalysisStatus, Annotation, AnnotationSet, ExportRequest, VideoSource},
};

const SAMPLE_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

fn sample_annotation(
    id: &str,
    title: &str,
    description: &str,
    (start, end): (f64, f64),
    confidence: f64,
    keywords: &[&str],
) -> Annotation {
    Annotation {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        start,
        end,
        confidence,
        topic: "React".to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Built-in seed data used when no annotation file is configured.
pub fn sample_set() -> AnnotationSet {
    AnnotationSet {
        video: VideoSource {
            url: SAMPLE_VIDEO_URL.to_string(),
            title: "React Tutorial Video".to_string(),
            uploaded: "Today at 14:30".to_string(),
            duration: 1300.0,
            file_size_mb: 156,
            format: "MP4".to_string(),
            resolution: "1080p".to_string(),
            status: AnalysisStatus::Analyzed,
        },
        annotations: vec![
            sample_annotation(
                "1",
                "React Hooks Introduction",
                "Learn about useState and useEffect hooks with practical examples and common use cases.",
                (220.0, 340.0),
                0.95,
                &["useState", "useEffect", "hooks", "functional components"],
            ),
            sample_annotation(
                "2",
                "Custom Hooks Creation",
                "Building reusable custom hooks for API calls, form handling, and state management.",
                (520.0, 620.0),
                0.88,
                &["custom hooks", "API", "forms", "reusability"],
            ),
            sample_annotation(
                "3",
                "State Management Patterns",
                "Exploring different state management patterns including Context API and Redux.",
                (850.0, 950.0),
                0.92,
                &["state", "Context API", "Redux", "patterns"],
            ),
            sample_annotation(
                "4",
                "Performance Optimization",
                "Techniques for optimizing React application performance with memoization.",
                (1100.0, 1250.0),
                0.85,
                &["performance", "memo", "useMemo", "optimization"],
            ),
        ],
    }
}

fn invalid(annotation: &Annotation, reason: impl Into<String>) -> ReelnotesError {
    ReelnotesError::InvalidAnnotation {
        id: annotation.id.clone(),
        reason: reason.into(),
    }
}

/// Check the structural contract of every annotation in the set.
pub fn validate(set: &AnnotationSet) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for annotation in &set.annotations {
        if annotation.id.trim().is_empty() {
            return Err(invalid(annotation, "empty id"));
        }
        if !seen.insert(annotation.id.as_str()) {
            return Err(ReelnotesError::DuplicateId {
                id: annotation.id.clone(),
            });
        }
        if !annotation.start.is_finite() || !annotation.end.is_finite() {
            return Err(invalid(annotation, "non-finite segment bounds"));
        }
        if annotation.start < 0.0 {
            return Err(invalid(
                annotation,
                format!("negative start {}", annotation.start),
            ));
        }
        if annotation.start >= annotation.end {
            return Err(invalid(
                annotation,
                format!("start {} is not before end {}", annotation.start, annotation.end),
            ));
        }
        if !(0.0..=1.0).contains(&annotation.confidence) {
            return Err(invalid(
                annotation,
                format!("confidence {} outside [0, 1]", annotation.confidence),
            ));
        }
    }

    Ok(())
}

/// Load and validate an annotation set from a JSON file
pub async fn load_annotation_set(path: &Path) -> Result<AnnotationSet> {
    let json_content = fs::read_to_string(path).await?;
    let set: AnnotationSet = serde_json::from_str(&json_content)?;
    validate(&set)?;
    tracing::debug!(
        path = %path.display(),
        annotations = set.annotations.len(),
        "loaded annotation set"
    );
    Ok(set)
}

/// Load the configured annotation file, or fall back to the sample set.
pub async fn load_or_sample(path: Option<&Path>) -> Result<AnnotationSet> {
    match path {
        Some(path) => load_annotation_set(path).await,
        None => {
            tracing::info!("no annotation file configured, using built-in sample");
            Ok(sample_set())
        }
    }
}

/// Save a segment extraction request next to the others in `dir`
pub async fn save_export_request(request: &ExportRequest, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).await?;
    let file_name: String = request
        .id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let path = dir.join(format!("segment-{}.json", file_name));
    let pretty_json = serde_json::to_string_pretty(request)?;
    fs::write(&path, &pretty_json).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sample_set_is_valid() {
        validate(&sample_set()).expect("sample data must pass validation");
    }

    #[test]
    fn rejects_inverted_segment() {
        let mut set = sample_set();
        set.annotations[1].end = set.annotations[1].start;

        let err = validate(&set).unwrap_err();
        assert!(matches!(err, ReelnotesError::InvalidAnnotation { ref id, .. } if id == "2"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut set = sample_set();
        set.annotations[3].id = "1".into();

        assert!(matches!(
            validate(&set),
            Err(ReelnotesError::DuplicateId { ref id }) if id == "1"
        ));
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        let mut set = sample_set();
        set.annotations[0].confidence = 1.2;

        assert!(validate(&set).is_err());
    }

    #[test]
    fn empty_set_is_valid() {
        let mut set = sample_set();
        set.annotations.clear();

        assert!(validate(&set).is_ok());
    }

    #[tokio::test]
    async fn loads_set_from_json_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("annotations.json");
        std::fs::write(
            &path,
            r#"{
                "video": { "url": "file:///tmp/talk.mp4", "duration": 600.0 },
                "annotations": [
                    { "id": "x", "title": "Opening", "start": 0.0, "end": 30.0, "confidence": 0.8 }
                ]
            }"#,
        )
        .expect("failed to write fixture");

        let set = load_annotation_set(&path).await.expect("load failed");
        assert_eq!(set.annotations.len(), 1);
        assert_eq!(set.annotations[0].description, "");
        assert_eq!(set.video.status, AnalysisStatus::Analyzed);
    }

    #[tokio::test]
    async fn load_rejects_invalid_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{ "video": { "url": "v", "duration": 10.0 },
                 "annotations": [ { "id": "x", "start": 5.0, "end": 1.0, "confidence": 0.8 } ] }"#,
        )
        .expect("failed to write fixture");

        assert!(load_annotation_set(&path).await.is_err());
    }

    #[tokio::test]
    async fn missing_file_falls_back_only_when_unconfigured() {
        let set = load_or_sample(None).await.expect("sample fallback");
        assert_eq!(set.annotations.len(), 4);

        let missing = Path::new("/definitely/not/here.json");
        assert!(matches!(
            load_or_sample(Some(missing)).await,
            Err(ReelnotesError::IoError(_))
        ));
    }

    #[tokio::test]
    async fn export_request_is_written_as_json() {
        let dir = tempdir().expect("failed to create temp dir");
        let set = sample_set();
        let request = ExportRequest::from(&set.annotations[1]);

        let path = save_export_request(&request, &dir.path().join("exports"))
            .await
            .expect("save failed");

        assert_eq!(path.file_name().unwrap(), "segment-2.json");
        let written: ExportRequest =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, request);
    }
}
