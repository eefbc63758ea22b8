//! Aurora Molecules - synthetic candidate pipeline.
//!
//! Everything here is deterministic for a given seed or name:
//! 1. Generating a seeded batch of candidate records
//! 2. Scoring and status triage
//! 3. Ranking and shortlisting
//! 4. Drawing schematic hexagon icons per candidate

pub mod scoring;
pub mod generator;
pub mod shortlist;
pub mod icon;
pub mod pipeline;

pub use generator::{generate, CandidateGenerator};
pub use icon::{synthesize, IconGeometry, MoleculeIcon};
pub use pipeline::{SearchPipeline, SearchRequest, SearchRun};
