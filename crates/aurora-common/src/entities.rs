/// Core record types shared by the generator, the exporters, and the web layer.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Candidate status
// ---------------------------------------------------------------------------

/// Triage bucket derived from activity and toxicity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Priority,
    Reserve,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Priority => "priority",
            CandidateStatus::Reserve => "reserve",
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Candidate record
// ---------------------------------------------------------------------------

/// One synthetic molecule in a generated batch.
/// All numeric fields are already rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,          // Mol-001 … Mol-999
    pub activity: f64,         // [0.30, 0.95]
    pub toxicity: f64,         // [0.10, 0.80]
    pub composite_score: f64,  // [0.0, 1.0]
    pub status: CandidateStatus,
}

impl CandidateRecord {
    /// Safety as shown in the charts: 1 − toxicity, two decimals.
    pub fn safety(&self) -> f64 {
        round2(1.0 - self.toxicity)
    }

    /// Generation sequence number parsed back out of the name.
    pub fn sequence(&self) -> Option<u32> {
        self.name.strip_prefix("Mol-")?.parse().ok()
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
