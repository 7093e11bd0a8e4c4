//! Report Rendering
//!
//! Turns typed analysis responses into terminal reports. Every aggregate
//! number comes straight from the response; the only decisions made here are
//! which rows to show expanded and how to color them.

use colored::Colorize;
use std::fmt::Write;

use super::view::ResultsView;
use super::{format_confidence, format_timestamp, format_vulnerability_kind, RiskTier};
use crate::logic::backend::{
    AnalysisOutcome, AnalyzeResponse, FunctionAnalysis, FunctionPredictionResponse,
};

const RULE_WIDTH: usize = 56;

/// One-line notification printed after a successful submission
pub fn success_notification(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Contract(response) => {
            format!("Analysis complete! Found {} vulnerabilities", response.vulnerabilities_found)
        }
        AnalysisOutcome::Function(response) => {
            format!("Function analysis complete! Result: {}", response.prediction)
        }
    }
}

pub fn render_outcome(outcome: &AnalysisOutcome, view: &ResultsView) -> String {
    match outcome {
        AnalysisOutcome::Contract(response) => render_contract_report(response, view),
        AnalysisOutcome::Function(response) => render_function_report(response),
    }
}

/// Render a whole-contract report. `view` decides which function rows are
/// expanded; everything else is shown verbatim from the response.
pub fn render_contract_report(response: &AnalyzeResponse, view: &ResultsView) -> String {
    let mut out = String::new();
    let tier = RiskTier::from_level(&response.overall_risk);

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Contract Analysis: {}", response.contract_name.bold());
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "  Functions analyzed: {}", response.functions_analyzed);
    let _ = writeln!(out, "  Vulnerabilities found: {}", response.vulnerabilities_found);
    let _ = writeln!(out, "  Vulnerable functions: {}", response.vulnerable_functions);
    let _ = writeln!(
        out,
        "  Overall risk: {}",
        response.overall_risk.color(tier.color()).bold()
    );
    let _ = writeln!(
        out,
        "  Average confidence: {}",
        format_confidence(response.average_confidence)
    );
    let _ = writeln!(out, "  Model used: {}", response.model_used);
    let _ = writeln!(out, "  Analyzed: {}", format_timestamp(response.timestamp.as_deref()));

    if response.functions.is_empty() {
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Function Details");
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for (index, function) in response.functions.iter().enumerate() {
        render_function_row(&mut out, index, function, view.is_expanded(index));
    }

    out
}

fn render_function_row(
    out: &mut String,
    index: usize,
    function: &FunctionAnalysis,
    expanded: bool,
) {
    let tier = RiskTier::from_level(&function.risk_level);
    let marker = if function.vulnerable { "●".red() } else { "●".green() };

    let issues = if function.vulnerable && !function.vulnerabilities.is_empty() {
        let n = function.vulnerabilities.len();
        format!(" ({} issue{})", n, if n == 1 { "" } else { "s" })
    } else {
        String::new()
    };

    let _ = writeln!(
        out,
        "  [{}] {} {} [{}]{} - {} confident",
        index + 1,
        marker,
        function.name.bold(),
        function.risk_level.color(tier.color()),
        issues,
        format_confidence(function.confidence)
    );

    if !expanded {
        return;
    }

    if !function.vulnerabilities.is_empty() {
        let _ = writeln!(out, "      Detected vulnerabilities:");
        for vulnerability in &function.vulnerabilities {
            let severity_tier = RiskTier::from_level(&vulnerability.severity);
            let _ = writeln!(
                out,
                "        - {} [{}]",
                format_vulnerability_kind(&vulnerability.kind).bold(),
                vulnerability.severity.color(severity_tier.color())
            );
            let _ = writeln!(out, "          {}", vulnerability.description);
            if let Some(line) = vulnerability.line_number {
                let _ = writeln!(out, "          Line {}", line);
            }
            if let Some(pattern) = &vulnerability.pattern_matched {
                let _ = writeln!(out, "          Pattern: {}", super::truncate_code(pattern, 60));
            }
            if let Some(recommendation) = &vulnerability.recommendation {
                let _ = writeln!(out, "          Recommendation: {}", recommendation);
            }
        }
    }

    let _ = writeln!(out, "      Function code:");
    for (offset, line) in function.code.lines().enumerate() {
        let _ = writeln!(out, "        {:>4} | {}", function.start_line as usize + offset, line);
    }

    let _ = writeln!(
        out,
        "      {} characters - starts at line {} - risk {} - confidence {}",
        function.code_length,
        function.start_line,
        function.risk_level,
        format_confidence(function.confidence)
    );
}

/// Render a single-function prediction report.
pub fn render_function_report(response: &FunctionPredictionResponse) -> String {
    let mut out = String::new();
    let vulnerable = response.prediction.eq_ignore_ascii_case("vulnerable");
    let verdict = if vulnerable {
        response.prediction.red().bold()
    } else {
        response.prediction.green().bold()
    };

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Function Analysis Result: {}", verdict);
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "  Confidence score: {}", format_confidence(response.confidence));
    let _ = writeln!(
        out,
        "  Vulnerability probability: {}",
        format_confidence(response.vulnerability_probability)
    );

    if let Some(kind) = &response.vulnerability_type {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Detected vulnerability: {}", format_vulnerability_kind(kind));
        if let Some(recommendations) = &response.recommendations {
            let _ = writeln!(out, "  Recommendations: {}", recommendations);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Model used: {} - Analyzed: {}",
        response.model_used,
        format_timestamp(response.timestamp.as_deref())
    );

    out
}
