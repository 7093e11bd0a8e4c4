//! Vulnerability Catalog
//!
//! Static reference data for the vulnerability classes the dashboard can
//! explain. Display copy only; detection itself happens on the backend.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One catalog entry
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    pub kind: &'static str,
    pub title: &'static str,
    pub severity: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
}

/// The seven vulnerability classes the reference models are trained on
pub static VULNERABILITY_CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    vec![
        CatalogEntry {
            kind: "reentrancy",
            title: "Reentrancy",
            severity: "high",
            description: "An external call is made before state is updated, letting the \
                          callee re-enter the function and drain funds.",
            recommendation: "Follow checks-effects-interactions: update balances before any \
                             external call, or guard the function with a reentrancy lock.",
        },
        CatalogEntry {
            kind: "integer_overflow",
            title: "Integer Overflow/Underflow",
            severity: "high",
            description: "Arithmetic wraps around silently, corrupting balances or counters \
                          in contracts compiled without checked math.",
            recommendation: "Compile with Solidity >= 0.8 (checked arithmetic) or wrap \
                             arithmetic in a SafeMath-style library.",
        },
        CatalogEntry {
            kind: "unchecked_send",
            title: "Unchecked External Call",
            severity: "medium",
            description: "The return value of send/call is ignored, so a failed transfer \
                          leaves the contract in an inconsistent state.",
            recommendation: "Require the call to succeed, or switch to a withdrawal (pull \
                             payment) pattern.",
        },
        CatalogEntry {
            kind: "timestamp_dependency",
            title: "Timestamp Dependency",
            severity: "medium",
            description: "Control flow depends on block.timestamp, which miners can skew by \
                          several seconds to influence outcomes.",
            recommendation: "Avoid tight timestamp windows; use block numbers or an oracle \
                             when ordering matters.",
        },
        CatalogEntry {
            kind: "tx_origin",
            title: "tx.origin Authentication",
            severity: "high",
            description: "Authorization checks tx.origin, so any contract the owner calls \
                          can act on the owner's behalf (phishing).",
            recommendation: "Authenticate with msg.sender; reserve tx.origin for \
                             EOA-detection at most.",
        },
        CatalogEntry {
            kind: "delegatecall",
            title: "Unsafe Delegatecall",
            severity: "high",
            description: "delegatecall into an untrusted target executes foreign code with \
                          this contract's storage and balance.",
            recommendation: "Only delegatecall into audited, immutable library addresses; \
                             never derive the target from user input.",
        },
        CatalogEntry {
            kind: "denial_of_service",
            title: "Denial of Service",
            severity: "medium",
            description: "Unbounded loops or a single failing external call can block every \
                          caller, freezing the contract.",
            recommendation: "Bound iteration, isolate per-user state, and prefer pull over \
                             push payments.",
        },
    ]
});

/// Case-insensitive lookup by type identifier
pub fn find(kind: &str) -> Option<&'static CatalogEntry> {
    VULNERABILITY_CATALOG.iter().find(|entry| entry.kind.eq_ignore_ascii_case(kind))
}
