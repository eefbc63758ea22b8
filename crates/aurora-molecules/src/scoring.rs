//! Composite scoring and ranking of candidates.

use aurora_common::entities::{round2, CandidateStatus};
use aurora_common::CandidateRecord;

/// Scorer for evaluating and ranking candidates.
#[derive(Debug, Clone)]
pub struct CandidateScorer {
    /// Multiplier applied to activity × safety before clamping
    pub scale: f64,
    /// Minimum activity for the priority bucket
    pub priority_min_activity: f64,
    /// Maximum toxicity for the priority bucket
    pub priority_max_toxicity: f64,
}

impl Default for CandidateScorer {
    fn default() -> Self {
        Self {
            scale: 1.25,
            priority_min_activity: 0.70,
            priority_max_toxicity: 0.50,
        }
    }
}

impl CandidateScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// activity × (1 − toxicity) × scale, clamped to [0, 1] and rounded.
    pub fn composite_score(&self, activity: f64, toxicity: f64) -> f64 {
        let raw = activity * (1.0 - toxicity) * self.scale;
        round2(raw.clamp(0.0, 1.0))
    }

    pub fn status(&self, activity: f64, toxicity: f64) -> CandidateStatus {
        if activity >= self.priority_min_activity && toxicity <= self.priority_max_toxicity {
            CandidateStatus::Priority
        } else {
            CandidateStatus::Reserve
        }
    }

    /// Build a record from already-rounded activity and toxicity.
    pub fn score(&self, name: String, activity: f64, toxicity: f64) -> CandidateRecord {
        CandidateRecord {
            name,
            activity,
            toxicity,
            composite_score: self.composite_score(activity, toxicity),
            status: self.status(activity, toxicity),
        }
    }

    /// Rank by composite score, highest first. Ties keep their input order.
    pub fn rank(&self, mut records: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
        records.sort_by(|a, b| {
            b.composite_score
                .partial_cmp(&a.composite_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_score_formula() {
        let scorer = CandidateScorer::new();
        assert_eq!(scorer.composite_score(0.74, 0.77), 0.21);
        assert_eq!(scorer.composite_score(0.49, 0.20), 0.49);
        // 0.95 × 0.9 × 1.25 = 1.06875 → clamped
        assert_eq!(scorer.composite_score(0.95, 0.10), 1.0);
    }

    #[test]
    fn test_status_thresholds_are_inclusive() {
        let scorer = CandidateScorer::new();
        assert_eq!(scorer.status(0.70, 0.50), CandidateStatus::Priority);
        assert_eq!(scorer.status(0.69, 0.10), CandidateStatus::Reserve);
        assert_eq!(scorer.status(0.95, 0.51), CandidateStatus::Reserve);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let scorer = CandidateScorer::new();
        let records = vec![
            scorer.score("Mol-001".into(), 0.35, 0.69),
            scorer.score("Mol-002".into(), 0.64, 0.28),
            scorer.score("Mol-003".into(), 0.54, 0.79),
        ];
        let ranked = scorer.rank(records);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        // Mol-001 and Mol-003 both score 0.14
        assert_eq!(names, vec!["Mol-002", "Mol-001", "Mol-003"]);
    }
}
