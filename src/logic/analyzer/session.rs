//! Analyzer Session
//!
//! Orchestrates analysis submissions against the backend client:
//! Idle -> Submitting -> (Success | Failed) -> Idle.
//!
//! The session owns at most one outcome; a new success discards the previous
//! one. Only one request may be in flight per session - a second submission
//! is rejected instead of racing the first.

use crate::logic::backend::{
    AnalysisOutcome, AnalyzeFunctionRequest, AnalyzeRequest, ApiError, BackendClient,
};

/// Sentinel model selection meaning "let the backend pick"
pub const AUTO_MODEL: &str = "auto";

/// Which endpoint a submission targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    Contract,
    Function,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Contract => "contract",
            AnalysisMode::Function => "function",
        }
    }
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Why a submission did not produce a result.
///
/// Every variant maps to one distinct user-facing notification; see
/// [`SubmitError::notification`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
    /// Guard: empty or whitespace-only input. Nothing was sent.
    #[error("no code to analyze")]
    EmptyCode,
    /// Guard: a submission is already in flight on this session.
    #[error("a submission is already in progress")]
    Busy,
    /// Backend reachable but its models are not loaded (HTTP 503).
    #[error("models not loaded on the backend")]
    ModelsNotLoaded,
    /// Backend rejected the input (HTTP 400); message from the payload.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Connection refused or timed out.
    #[error("backend unreachable")]
    BackendUnreachable,
    /// Anything else.
    #[error("analysis failed: {0}")]
    Unknown(String),
}

impl SubmitError {
    /// User-facing notification text.
    pub fn notification(&self) -> String {
        match self {
            SubmitError::EmptyCode => "Please enter some Solidity code to analyze".to_string(),
            SubmitError::Busy => {
                "An analysis is already running. Wait for it to finish".to_string()
            }
            SubmitError::ModelsNotLoaded => {
                "Models not loaded. Please train the models first".to_string()
            }
            SubmitError::InvalidInput(detail) => detail.clone(),
            SubmitError::BackendUnreachable => {
                "Backend server is not running. Please start it first".to_string()
            }
            SubmitError::Unknown(_) => "Analysis failed. Please try again".to_string(),
        }
    }

    fn classify(err: ApiError) -> Self {
        match err.status() {
            Some(503) => SubmitError::ModelsNotLoaded,
            Some(400) => SubmitError::InvalidInput(
                err.detail().unwrap_or_else(|| "Invalid code format".to_string()),
            ),
            _ => match err {
                ApiError::Unreachable(_) => SubmitError::BackendUnreachable,
                other => SubmitError::Unknown(other.to_string()),
            },
        }
    }
}

/// One dashboard's analysis orchestration over an injected client.
pub struct AnalyzerSession<'a> {
    client: &'a BackendClient,
    phase: Phase,
    last_outcome: Option<AnalysisOutcome>,
}

impl<'a> AnalyzerSession<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client, phase: Phase::Idle, last_outcome: None }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_outcome(&self) -> Option<&AnalysisOutcome> {
        self.last_outcome.as_ref()
    }

    /// Submit code for analysis.
    ///
    /// Guards reject empty input before any network traffic and reject
    /// re-entry while a prior submission is in flight. Exactly one client
    /// call is issued per accepted submission, chosen by `mode`, with the
    /// code trimmed of surrounding whitespace. Every failure is terminal for
    /// this submission; the session is resubmittable afterwards.
    pub async fn submit(
        &mut self,
        mode: AnalysisMode,
        code: &str,
        contract_name: Option<&str>,
        model: Option<&str>,
    ) -> Result<&AnalysisOutcome, SubmitError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(SubmitError::EmptyCode);
        }
        if self.phase == Phase::Submitting {
            return Err(SubmitError::Busy);
        }

        self.phase = Phase::Submitting;
        self.last_outcome = None;

        let model = model
            .filter(|m| !m.is_empty() && !m.eq_ignore_ascii_case(AUTO_MODEL))
            .map(String::from);

        log::info!("Submitting {} analysis ({} bytes)", mode.as_str(), code.len());

        let result = match mode {
            AnalysisMode::Contract => {
                let request = AnalyzeRequest {
                    code: code.to_string(),
                    contract_name: contract_name.filter(|n| !n.is_empty()).map(String::from),
                    model,
                };
                self.client.analyze_contract(&request).await.map(AnalysisOutcome::Contract)
            }
            AnalysisMode::Function => {
                let request = AnalyzeFunctionRequest { code: code.to_string(), model };
                self.client.analyze_function(&request).await.map(AnalysisOutcome::Function)
            }
        };

        // Terminal either way: back to a resubmittable state.
        self.phase = Phase::Idle;

        match result {
            Ok(outcome) => Ok(&*self.last_outcome.insert(outcome)),
            Err(err) => {
                log::warn!("Analysis submission failed: {}", err);
                Err(SubmitError::classify(err))
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn force_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::backend::BackendConfig;

    fn offline_client() -> BackendClient {
        // Nothing listens here; guard tests must fail before any dispatch.
        BackendClient::new(BackendConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        })
    }

    #[tokio::test]
    async fn whitespace_only_code_is_rejected_before_dispatch() {
        let client = offline_client();
        let mut session = AnalyzerSession::new(&client);

        let err = session
            .submit(AnalysisMode::Contract, "   \n\t  ", None, None)
            .await
            .expect_err("empty code must be rejected");

        assert!(matches!(err, SubmitError::EmptyCode));
        assert_eq!(err.notification(), "Please enter some Solidity code to analyze");
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn resubmission_while_in_flight_is_rejected() {
        let client = offline_client();
        let mut session = AnalyzerSession::new(&client);
        session.force_phase(Phase::Submitting);

        let err = session
            .submit(AnalysisMode::Function, "function f() public {}", None, None)
            .await
            .expect_err("busy session must reject");

        assert!(matches!(err, SubmitError::Busy));
        // The guard must not knock the session out of its in-flight phase.
        assert_eq!(session.phase(), Phase::Submitting);
    }

    #[tokio::test]
    async fn refused_connection_classifies_as_backend_unreachable() {
        let client = offline_client();
        let mut session = AnalyzerSession::new(&client);

        let err = session
            .submit(AnalysisMode::Contract, "contract A {}", None, None)
            .await
            .expect_err("nothing is listening");

        assert!(matches!(err, SubmitError::BackendUnreachable));
        assert_eq!(err.notification(), "Backend server is not running. Please start it first");
        assert_eq!(session.phase(), Phase::Idle, "session must be resubmittable after failure");
        assert!(session.last_outcome().is_none());
    }

    #[test]
    fn each_failure_class_has_a_distinct_notification() {
        let messages = [
            SubmitError::EmptyCode.notification(),
            SubmitError::Busy.notification(),
            SubmitError::ModelsNotLoaded.notification(),
            SubmitError::InvalidInput("Invalid code format".to_string()).notification(),
            SubmitError::BackendUnreachable.notification(),
            SubmitError::Unknown("boom".to_string()).notification(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
