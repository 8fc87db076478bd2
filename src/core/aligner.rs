// File: src/core/aligner.rs
use crate::core::types::{AlignmentCounts, WordToken};
use crate::error::MetricError;
use rayon::prelude::*;
use serde::Serialize;

/// Length of the longest common subsequence of `reference` and `hypothesis`
/// under exact equality.
/// O(n*m) time, O(m) space: only the previous row of the table is kept.
pub fn lcs_length<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> usize {
    let mut previous = vec![0usize; hypothesis.len() + 1];
    let mut current = vec![0usize; hypothesis.len() + 1];

    for ref_item in reference {
        for (col, hyp_item) in hypothesis.iter().enumerate() {
            current[col + 1] = if ref_item == hyp_item {
                previous[col] + 1
            } else {
                current[col].max(previous[col + 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[hypothesis.len()]
}

pub fn align_sentence(reference: &[WordToken], hypothesis: &[WordToken]) -> AlignmentCounts {
    AlignmentCounts {
        reference: reference.len(),
        hypothesis: hypothesis.len(),
        correct: lcs_length(reference, hypothesis),
    }
}

/// Sums per-sentence alignments. Sentence `i` of each list must describe the
/// same source sentence.
pub fn align_corpus(
    reference: &[Vec<WordToken>],
    hypothesis: &[Vec<WordToken>],
) -> Result<CorpusCounts, MetricError> {
    if reference.len() != hypothesis.len() {
        return Err(MetricError::SentenceCountMismatch {
            reference: reference.len(),
            hypothesis: hypothesis.len(),
        });
    }
    let totals: AlignmentCounts = reference
        .par_iter()
        .zip(hypothesis.par_iter())
        .map(|(r, h)| align_sentence(r, h))
        .reduce(AlignmentCounts::default, |a, b| a + b);

    Ok(CorpusCounts { sentences: reference.len(), totals })
}

/// Micro-averaged totals over a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusCounts {
    pub sentences: usize,
    pub totals: AlignmentCounts,
}

impl CorpusCounts {
    pub fn precision(&self) -> Result<f64, MetricError> {
        if self.totals.hypothesis == 0 {
            return Err(MetricError::EmptyHypothesis);
        }
        Ok(self.totals.correct as f64 / self.totals.hypothesis as f64)
    }

    pub fn recall(&self) -> Result<f64, MetricError> {
        if self.totals.reference == 0 {
            return Err(MetricError::EmptyReference);
        }
        Ok(self.totals.correct as f64 / self.totals.reference as f64)
    }

    pub fn f_ratio(&self) -> Result<f64, MetricError> {
        let precision = self.precision()?;
        let recall = self.recall()?;
        if precision + recall == 0.0 {
            return Err(MetricError::ZeroPrecisionAndRecall);
        }
        Ok(2.0 * precision * recall / (precision + recall))
    }

    pub fn scores(&self) -> Result<Scores, MetricError> {
        Ok(Scores {
            precision: self.precision()?,
            recall: self.recall()?,
            f_ratio: self.f_ratio()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    pub precision: f64,
    pub recall: f64,
    pub f_ratio: f64,
}

/// `x.xxx`, or `undefined` for a degenerate metric.
pub fn format_metric(metric: &Result<f64, MetricError>) -> String {
    match metric {
        Ok(value) => format!("{:.3}", value),
        Err(_) => "undefined".to_string(),
    }
}

/// `P = x.xxx, R = x.xxx, F = x.xxx`
pub fn format_report(counts: &CorpusCounts) -> String {
    format!(
        "P = {}, R = {}, F = {}",
        format_metric(&counts.precision()),
        format_metric(&counts.recall()),
        format_metric(&counts.f_ratio())
    )
}
