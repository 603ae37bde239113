use crate::{
    filter::{AnnotationFilterModel, Stats},
    types::{Annotation, VideoSource},
};

/// Format seconds as M:SS. Negative or non-finite input renders as 0:00.
pub fn format_duration(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

/// "3:40 - 5:40"
pub fn format_range(annotation: &Annotation) -> String {
    format!(
        "{} - {}",
        format_duration(annotation.start),
        format_duration(annotation.end)
    )
}

/// Format a confidence score as a percentage with one decimal, e.g. "95.0%"
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Average confidence for the stats card; an empty collection shows "0%".
pub fn format_avg_confidence(stats: &Stats, annotation_count: usize) -> String {
    if annotation_count == 0 {
        "0%".to_string()
    } else {
        format_confidence(stats.avg_confidence)
    }
}

/// Text placed on the clipboard when an annotation is copied.
pub fn format_clipboard_text(annotation: &Annotation) -> String {
    let mut output = format!("{} [{}]", annotation.title, format_range(annotation));
    if !annotation.description.is_empty() {
        output.push('\n');
        output.push_str(&annotation.description);
    }
    output
}

/// Markdown rendering of the results page for `query`.
pub fn format_results_readable(
    video: &VideoSource,
    annotations: &[Annotation],
    query: &str,
) -> String {
    let page = AnnotationFilterModel::derive(annotations, query);
    let stats = &page.stats;

    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", video.title));
    output.push_str(&format!(
        "**Duration:** {} | **Segments:** {} | **Avg confidence:** {} | **Topics:** {}\n\n",
        format_duration(stats.total_duration),
        annotations.len(),
        format_avg_confidence(stats, annotations.len()),
        stats.topic_count
    ));

    output.push_str(&format!("## Found {} relevant segments\n\n", page.filtered.len()));
    for (index, annotation) in page.filtered.iter().enumerate() {
        output.push_str(&format!(
            "### {}. [{}] {}\n\n",
            index + 1,
            format_range(annotation),
            annotation.title
        ));
        output.push_str(&format!(
            "{} confidence | {}\n\n",
            format_confidence(annotation.confidence),
            annotation.topic
        ));
        output.push_str(&format!("{}\n\n", annotation.description));
        let keywords = annotation.display_keywords();
        if !keywords.is_empty() {
            output.push_str(&format!("Keywords: {}\n\n", keywords.join(", ")));
        }
    }

    output
}
