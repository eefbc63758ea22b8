//! Seeded generation of synthetic candidate batches.

use aurora_common::entities::round2;
use aurora_common::{AuroraError, CandidateRecord, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;
use tracing::debug;

use crate::scoring::CandidateScorer;

/// Activity draw range, upper bound exclusive before rounding.
pub const ACTIVITY_RANGE: Range<f64> = 0.30..0.95;
/// Toxicity draw range, upper bound exclusive before rounding.
pub const TOXICITY_RANGE: Range<f64> = 0.10..0.80;

/// Produces ranked batches of fabricated candidates.
/// Each call seeds its own `ChaCha8Rng`; nothing is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct CandidateGenerator {
    scorer: CandidateScorer,
}

impl CandidateGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate `count` candidates from `seed`, sorted by composite score
    /// (descending, stable). Pure function of `(count, seed)`.
    pub fn generate(&self, count: usize, seed: u64) -> Result<Vec<CandidateRecord>> {
        if count == 0 {
            return Err(AuroraError::invalid("candidate count must be positive"));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut records = Vec::with_capacity(count);

        for i in 1..=count {
            let activity = round2(rng.gen_range(ACTIVITY_RANGE));
            let toxicity = round2(rng.gen_range(TOXICITY_RANGE));
            records.push(self.scorer.score(format!("Mol-{i:03}"), activity, toxicity));
        }

        debug!("Generated {} candidates for seed {}", count, seed);
        Ok(self.scorer.rank(records))
    }
}

/// Generate with the default scorer.
pub fn generate(count: usize, seed: u64) -> Result<Vec<CandidateRecord>> {
    CandidateGenerator::new().generate(count, seed)
}
