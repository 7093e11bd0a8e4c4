//! Backend Wire Types
//!
//! Request/response records exchanged with the inference backend.
//! Plain data only: each record is built from a single backend response,
//! handed to the view that requested it, and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// READ-ONLY SNAPSHOTS (health, models, catalog, info)
// ============================================================================

/// Backend health snapshot, fetched once per probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub models_loaded: bool,
    pub device: String,
    pub version: String,
}

/// Performance metrics for a trained model, all in [0, 1]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub accuracy: f64,
    pub f1_score: f64,
    pub precision: f64,
    pub recall: f64,
}

/// One model the backend can run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub model_type: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<ModelPerformance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsListResponse {
    pub models: Vec<ModelInfo>,
    pub default_model: String,
    pub total_models: usize,
}

/// One vulnerability class the backend reports it can detect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub severity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilitiesListResponse {
    pub total_types: usize,
    pub vulnerabilities: Vec<VulnerabilityInfo>,
}

/// Backend self-description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub model_loaded: bool,
    pub device: String,
    pub current_model: String,
    pub supported_vulnerabilities: Vec<String>,
    pub api_endpoints: HashMap<String, String>,
}

// ============================================================================
// ANALYSIS REQUESTS
// ============================================================================

/// Whole-contract analysis request
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,
    /// `None` lets the backend auto-select its best model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Single-function analysis request
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeFunctionRequest {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

// ============================================================================
// ANALYSIS RESPONSES
// ============================================================================

/// One vulnerability hit inside a function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityType {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_matched: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Per-function verdict inside a contract analysis.
///
/// `vulnerabilities` is expected to be empty when `vulnerable` is false;
/// the backend owns that invariant and it is not re-checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionAnalysis {
    pub name: String,
    pub code: String,
    pub vulnerable: bool,
    pub risk_level: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
    pub vulnerabilities: Vec<VulnerabilityType>,
    pub start_line: u32,
    pub code_length: usize,
}

/// Whole-contract analysis response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub contract_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub functions_analyzed: usize,
    pub vulnerabilities_found: usize,
    pub vulnerable_functions: usize,
    pub functions: Vec<FunctionAnalysis>,
    pub overall_risk: String,
    pub average_confidence: f64,
    pub model_used: String,
}

/// Single-function analysis response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionPredictionResponse {
    pub status: String,
    pub function_code: String,
    pub prediction: String,
    pub confidence: f64,
    pub vulnerability_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vulnerability_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
    pub model_used: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Result of one analysis submission.
///
/// The variant is fixed by which endpoint was invoked, never inferred from
/// the shape of the payload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Contract(AnalyzeResponse),
    Function(FunctionPredictionResponse),
}
