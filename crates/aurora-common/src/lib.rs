//! aurora-common — Shared types, errors, and configuration used across all Aurora crates.

pub mod error;
pub mod entities;
pub mod hash;
pub mod config;

// Re-export commonly used types
pub use config::{AuroraConfig, ReportConfig, SearchConfig, ServerConfig, Target};
pub use entities::{CandidateRecord, CandidateStatus};
pub use error::{AuroraError, Result};
