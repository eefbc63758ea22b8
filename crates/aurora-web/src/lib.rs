//! aurora-web — Web front end for the Aurora candidate demo.
//! Provides a single search page with:
//!   - Target selection and filter sliders
//!   - Shortlist table, molecule icon grid, and bar charts
//!   - CSV and PDF downloads
//!   - A small JSON API and an SSE event stream

pub mod error;
pub mod router;
pub mod handlers;
pub mod session;
pub mod state;
pub mod sse;
pub mod templates;
