//! Search and aggregation over an annotation collection.
//!
//! Everything here is a pure function of `(annotations, query)`; the results
//! view calls into it on every read rather than caching derived state.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::Annotation;

const HIGH_CONFIDENCE: f64 = 0.90;
const MEDIUM_CONFIDENCE: f64 = 0.70;

/// Aggregate numbers shown in the stats cards. Always computed over the full
/// collection, never the filtered subset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Stats {
    pub total_duration: f64,
    pub avg_confidence: f64,
    pub topic_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterView<'a> {
    pub filtered: Vec<&'a Annotation>,
    pub stats: Stats,
}

pub struct AnnotationFilterModel;

impl AnnotationFilterModel {
    pub fn derive<'a>(annotations: &'a [Annotation], query: &str) -> FilterView<'a> {
        FilterView {
            filtered: filter(annotations, query),
            stats: compute_stats(annotations),
        }
    }
}

/// Annotations whose title or description contains `query`, ignoring case,
/// in their original order. An empty query matches everything.
pub fn filter<'a>(annotations: &'a [Annotation], query: &str) -> Vec<&'a Annotation> {
    let needle = query.to_lowercase();
    annotations
        .iter()
        .filter(|ann| {
            ann.title.to_lowercase().contains(&needle)
                || ann.description.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn compute_stats(annotations: &[Annotation]) -> Stats {
    if annotations.is_empty() {
        return Stats::default();
    }

    let total_duration = annotations.iter().map(Annotation::duration).sum();
    let avg_confidence =
        annotations.iter().map(|ann| ann.confidence).sum::<f64>() / annotations.len() as f64;
    let topic_count = annotations
        .iter()
        .map(|ann| ann.topic.as_str())
        .collect::<HashSet<_>>()
        .len();

    Stats {
        total_duration,
        avg_confidence,
        topic_count,
    }
}

pub fn confidence_tier(confidence: f64) -> ConfidenceTier {
    if confidence >= HIGH_CONFIDENCE {
        ConfidenceTier::High
    } else if confidence >= MEDIUM_CONFIDENCE {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}
