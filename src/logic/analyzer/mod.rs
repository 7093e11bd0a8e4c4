//! Analyzer Orchestration
//!
//! One submission at a time: guard the input, dispatch exactly one backend
//! call, classify the failure or hold the typed outcome.

pub mod session;

pub use session::{AnalysisMode, AnalyzerSession, Phase, SubmitError, AUTO_MODEL};
