//! Orchestrator for a search run: target → seed → batch → shortlist.

use aurora_common::config::SearchConfig;
use aurora_common::hash::target_seed;
use aurora_common::{AuroraError, CandidateRecord, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::generator::CandidateGenerator;
use crate::shortlist::{shortlist, ShortlistEntry};

/// Timestamp format shown in badges and reports.
pub const STARTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Target display label, e.g. "EGFR (non-small cell lung cancer)"
    pub target: String,
    pub max_toxicity: f64,
    pub top_n: usize,
}

/// Result of one search run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRun {
    pub run_id: String,
    pub seed: u64,
    pub target: String,
    pub max_toxicity: f64,
    pub top_n: usize,
    pub started_at: NaiveDateTime,
    /// Full ranked batch before filtering
    pub pool: Vec<CandidateRecord>,
    pub shortlist: Vec<ShortlistEntry>,
}

impl SearchRun {
    pub fn started_at_display(&self) -> String {
        self.started_at.format(STARTED_AT_FORMAT).to_string()
    }

    pub fn records(&self) -> impl Iterator<Item = &CandidateRecord> {
        self.shortlist.iter().map(|e| &e.record)
    }
}

pub struct SearchPipeline {
    generator: CandidateGenerator,
    pool_size: usize,
    min_top_n: usize,
    max_top_n: usize,
}

impl SearchPipeline {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            generator: CandidateGenerator::new(),
            pool_size: config.pool_size,
            min_top_n: config.min_top_n,
            max_top_n: config.max_top_n,
        }
    }

    pub fn validate(&self, request: &SearchRequest) -> Result<()> {
        if request.target.trim().is_empty() {
            return Err(AuroraError::invalid("target must not be empty"));
        }
        if !(0.0..=1.0).contains(&request.max_toxicity) {
            return Err(AuroraError::invalid(format!(
                "max_toxicity {} outside [0, 1]",
                request.max_toxicity
            )));
        }
        if !(self.min_top_n..=self.max_top_n).contains(&request.top_n) {
            return Err(AuroraError::invalid(format!(
                "top_n {} outside {}..={}",
                request.top_n, self.min_top_n, self.max_top_n
            )));
        }
        Ok(())
    }

    /// Generate the batch for the request's target and shortlist it.
    /// Synchronous and pure apart from the caller-supplied timestamp.
    pub fn run(&self, request: &SearchRequest, started_at: NaiveDateTime) -> Result<SearchRun> {
        self.validate(request)?;

        let seed = target_seed(&request.target);
        let pool = self.generator.generate(self.pool_size, seed)?;
        let picked = shortlist(&pool, request.max_toxicity, request.top_n);

        info!(
            "Search run {} for {}: {} of {} candidates pass toxicity <= {:.2}",
            seed, request.target, picked.len(), pool.len(), request.max_toxicity
        );

        Ok(SearchRun {
            run_id: seed.to_string(),
            seed,
            target: request.target.clone(),
            max_toxicity: request.max_toxicity,
            top_n: request.top_n,
            started_at,
            pool,
            shortlist: picked,
        })
    }
}
