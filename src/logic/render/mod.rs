//! Results Rendering
//!
//! Pure presentation over analysis responses. Aggregate numbers are shown
//! verbatim from the backend; nothing is recomputed on this side.

pub mod report;
pub mod view;

pub use report::{
    render_contract_report, render_function_report, render_outcome, success_notification,
};
pub use view::ResultsView;

use colored::Color;

/// Presentation tier for risk levels and severities.
///
/// Unrecognized strings fall to `Default`; they are never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    High,
    Medium,
    Low,
    Default,
}

impl RiskTier {
    /// Case-insensitive mapping from a backend-supplied string.
    pub fn from_level(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "high" => RiskTier::High,
            "medium" => RiskTier::Medium,
            "low" => RiskTier::Low,
            _ => RiskTier::Default,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            RiskTier::High => Color::Red,
            RiskTier::Medium => Color::Yellow,
            RiskTier::Low => Color::Green,
            RiskTier::Default => Color::White,
        }
    }
}

/// `0.873` -> `"87.3%"`
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// `"reentrancy_attack"` -> `"Reentrancy Attack"`
pub fn format_vulnerability_kind(kind: &str) -> String {
    kind.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Missing timestamps render as "just now"; RFC 3339 values are reformatted,
/// anything else is shown as the backend sent it.
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    match timestamp {
        None => "just now".to_string(),
        Some(ts) => chrono::DateTime::parse_from_rfc3339(ts)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| ts.to_string()),
    }
}

/// Clip long code previews for collapsed rows.
pub fn truncate_code(code: &str, max_chars: usize) -> String {
    if code.chars().count() <= max_chars {
        code.to_string()
    } else {
        let clipped: String = code.chars().take(max_chars).collect();
        format!("{}...", clipped)
    }
}
