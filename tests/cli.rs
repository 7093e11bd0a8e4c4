//! End-to-end tests for the `solguard` binary.
//!
//! Offline commands run against a deliberately closed port; networked
//! commands run against a stub backend spawned on an ephemeral port.

use std::io::Write;
use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::{Json, Router};
use predicates::prelude::*;
use serde_json::{json, Value};

/// An address nothing is listening on.
fn closed_backend() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Spawn the stub backend on a background thread and return its base URL.
fn spawn_stub_backend() -> String {
    let (tx, rx) = std::sync::mpsc::channel::<SocketAddr>();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("stub runtime");

        runtime.block_on(async move {
            let app = Router::new()
                .route("/health", get(health))
                .route("/models", get(models_listing))
                .route("/info", get(info))
                .route("/analyze", post(analyze));

            let listener =
                tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
            tx.send(listener.local_addr().expect("stub addr")).expect("send addr");
            axum::serve(listener, app).await.expect("serve stub");
        });
    });

    format!("http://{}", rx.recv().expect("stub addr"))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "operational",
        "models_loaded": true,
        "device": "cpu",
        "version": "1.0.0",
    }))
}

async fn models_listing() -> Json<Value> {
    Json(json!({
        "models": [
            { "name": "cnn", "type": "cnn", "available": false },
            {
                "name": "codebert",
                "type": "transformer",
                "available": true,
                "performance": {
                    "accuracy": 0.92, "f1_score": 0.91, "precision": 0.90, "recall": 0.93
                },
                "description": "Best single model"
            }
        ],
        "default_model": "codebert",
        "total_models": 2,
    }))
}

async fn info() -> Json<Value> {
    Json(json!({
        "name": "Smart Contract Vulnerability API",
        "version": "1.0.0",
        "description": "ML-based Solidity vulnerability detection",
        "model_loaded": true,
        "device": "cpu",
        "current_model": "codebert",
        "supported_vulnerabilities": [
            "reentrancy", "integer_overflow", "unchecked_send",
            "timestamp_dependency", "tx_origin", "delegatecall", "denial_of_service"
        ],
        "api_endpoints": { "analyze": "/analyze" },
    }))
}

async fn analyze(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({
        "status": "success",
        "contract_name": "VulnerableBank",
        "functions_analyzed": 3,
        "vulnerabilities_found": 2,
        "vulnerable_functions": 1,
        "functions": [{
            "name": "withdraw",
            "code": "function withdraw(uint amount) public {}",
            "vulnerable": true,
            "risk_level": "High",
            "confidence": 0.91,
            "vulnerabilities": [{
                "type": "reentrancy",
                "severity": "high",
                "description": "External call before state update",
                "line_number": 12,
                "recommendation": "Apply checks-effects-interactions"
            }],
            "start_line": 10,
            "code_length": 42
        }],
        "overall_risk": "High",
        "average_confidence": 0.87,
        "model_used": "codebert",
    }))
}

#[test]
fn help_prints_usage() {
    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn samples_list_contract_fixtures_offline() {
    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("samples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vulnerable Bank"))
        .stdout(predicate::str::contains("Safe Contract"));
}

#[test]
fn samples_list_function_fixtures_offline() {
    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("samples")
        .arg("--function")
        .assert()
        .success()
        .stdout(predicate::str::contains("Integer Overflow"))
        .stdout(predicate::str::contains("tx.origin Usage"));
}

#[test]
fn analyze_rejects_whitespace_only_sources() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = dir.path().join("empty.sol");
    let mut file = std::fs::File::create(&source).expect("create source");
    writeln!(file, "   ").expect("write source");

    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("analyze")
        .arg(&source)
        .arg("--backend")
        .arg(closed_backend())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter some Solidity code to analyze"));
}

#[test]
fn analyze_names_available_samples_on_unknown_sample() {
    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("analyze")
        .arg("--sample")
        .arg("No Such Sample")
        .arg("--backend")
        .arg(closed_backend())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown contract sample"))
        .stderr(predicate::str::contains("Vulnerable Bank"));
}

#[test]
fn analyze_reports_unreachable_backend() {
    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("analyze")
        .arg("--sample")
        .arg("Vulnerable Bank")
        .arg("--backend")
        .arg(closed_backend())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backend server is not running"));
}

#[test]
fn vulnerabilities_fall_back_to_builtin_catalog_offline() {
    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("vulnerabilities")
        .arg("--backend")
        .arg(closed_backend())
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in catalog"))
        .stdout(predicate::str::contains("Reentrancy"))
        .stdout(predicate::str::contains("tx.origin Authentication"));
}

#[test]
fn models_listing_renders_sorted_panel() {
    let backend = spawn_stub_backend();

    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("models")
        .arg("--backend")
        .arg(&backend)
        .assert()
        .success()
        .stdout(predicate::str::contains("codebert"))
        .stdout(predicate::str::contains("not available"))
        .stdout(predicate::str::contains("1 available - 1 unavailable"))
        .stdout(predicate::str::contains("default model: codebert"));
}

#[test]
fn status_renders_dashboard_header() {
    let backend = spawn_stub_backend();

    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("status")
        .arg("--backend")
        .arg(&backend)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard Status"))
        .stdout(predicate::str::contains("Mode: Ready"))
        .stdout(predicate::str::contains("Device: cpu"))
        .stdout(predicate::str::contains("Vulnerability types: 7"));
}

#[test]
fn analyze_sample_prints_report_with_backend_numbers() {
    let backend = spawn_stub_backend();

    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("analyze")
        .arg("--sample")
        .arg("Vulnerable Bank")
        .arg("--backend")
        .arg(&backend)
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis complete! Found 2 vulnerabilities"))
        .stdout(predicate::str::contains("Functions analyzed: 3"))
        .stdout(predicate::str::contains("Vulnerable functions: 1"))
        .stdout(predicate::str::contains("withdraw"));
}

#[test]
fn analyze_json_emits_raw_response() {
    let backend = spawn_stub_backend();

    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("analyze")
        .arg("--sample")
        .arg("Vulnerable Bank")
        .arg("--json")
        .arg("--backend")
        .arg(&backend)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"functions_analyzed\": 3"))
        .stdout(predicate::str::contains("\"model_used\": \"codebert\""));
}

#[test]
fn analyze_reads_from_stdin_dash() {
    let backend = spawn_stub_backend();

    assert_cmd::cargo::cargo_bin_cmd!("solguard")
        .arg("analyze")
        .arg("-")
        .arg("--backend")
        .arg(&backend)
        .write_stdin("contract A { function f() public {} }")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis complete!"));
}
