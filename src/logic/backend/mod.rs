//! Backend Module - Dashboard to Inference Service Communication
//!
//! This module handles:
//! - Typed requests to the analysis backend (health, models, catalog, analysis)
//! - Normalizing connection failures into a single "unreachable" error
//! - Request/response logging
//!
//! Every call maps 1:1 onto one HTTP exchange: no retries, no request
//! deduplication, no caching.

pub mod client;
pub mod types;


pub use client::{ApiError, BackendClient, BackendConfig};
pub use types::{
    AnalysisOutcome, AnalyzeFunctionRequest, AnalyzeRequest, AnalyzeResponse, ApiInfo,
    FunctionAnalysis, FunctionPredictionResponse, HealthStatus, ModelInfo, ModelPerformance,
    ModelsListResponse, VulnerabilitiesListResponse, VulnerabilityInfo, VulnerabilityType,
};
