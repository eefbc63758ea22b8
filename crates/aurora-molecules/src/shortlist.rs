//! Toxicity filtering and top-N truncation of a ranked batch.

use aurora_common::CandidateRecord;
use serde::{Deserialize, Serialize};

/// Slack for slider values such as 0.6000000000000001.
const CEILING_EPSILON: f64 = 1e-9;

/// A shortlisted candidate with its 1-based display rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub record: CandidateRecord,
}

/// Keep candidates with `toxicity <= max_toxicity`, in ranked order, then take
/// the first `top_n`. Ranks are assigned after filtering.
pub fn shortlist(records: &[CandidateRecord], max_toxicity: f64, top_n: usize) -> Vec<ShortlistEntry> {
    records
        .iter()
        .filter(|r| r.toxicity <= max_toxicity + CEILING_EPSILON)
        .take(top_n)
        .enumerate()
        .map(|(i, record)| ShortlistEntry {
            rank: i + 1,
            record: record.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    #[test]
    fn test_filter_then_truncate() {
        // seed 7: toxicities in ranked order 0.28 0.35 0.15 0.25 0.22 0.47 0.61 0.37 0.69 0.79
        let pool = generate(10, 7).unwrap();
        let picked = shortlist(&pool, 0.30, 3);
        let names: Vec<_> = picked.iter().map(|e| e.record.name.as_str()).collect();
        assert_eq!(names, vec!["Mol-007", "Mol-009", "Mol-010"]);
        assert_eq!(picked.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        let pool = generate(10, 7).unwrap();
        let picked = shortlist(&pool, 0.6 + 0.0000000000000001, 10);
        assert!(picked.iter().all(|e| e.record.toxicity <= 0.6));
        assert_eq!(picked.len(), 7);
        let exact = shortlist(&pool, 0.61, 10);
        assert_eq!(exact.len(), 8);
    }

    #[test]
    fn test_empty_when_nothing_passes() {
        let pool = generate(10, 7).unwrap();
        assert!(shortlist(&pool, 0.05, 5).is_empty());
        assert!(shortlist(&pool, 1.0, 0).is_empty());
    }
}
