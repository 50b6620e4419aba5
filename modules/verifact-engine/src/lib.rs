//! Credibility analysis aggregation engine.
//!
//! Dispatches a fixed set of heterogeneous analysis probes concurrently over
//! one piece of news content, tolerates partial failure of any model-backed
//! probe, and merges everything into a single immutable
//! [`Report`](verifact_common::Report).

pub mod analyzer;
pub mod config;
pub mod content;
pub mod format;
pub mod probes;
pub mod render;
pub mod signals;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use analyzer::CredibilityAnalyzer;
pub use config::EngineConfig;
pub use content::{Content, PageMetadata};
pub use verifact_common::{Report, VerifactError};
