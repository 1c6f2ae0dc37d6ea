//! Shared fixtures for the litzip demo binaries.
//!
//! Each binary under `src/bin/` exercises one paired flow end to end against
//! the in-process [`litzip_bundle::LocalEncryptionClient`]. The fixtures
//! here stand in for what a real deployment gets from its wallet and
//! session tooling: a chain name, a wallet-gated condition set, and session
//! credentials. The binaries take no arguments; `RUST_LOG` controls
//! verbosity.

use litzip_bundle::{AccessControlConditions, SessionCredentials};
use serde_json::json;
use sha2::{Digest, Sha256};

/// Chain all demos gate on.
pub const CHAIN: &str = "ethereum";

/// Wallet allowed through the demo condition set.
pub const DEMO_WALLET: &str = "0x50e2dac5e78B5905CB09495547452cEE64426db2";

/// Condition set admitting only [`DEMO_WALLET`].
pub fn demo_conditions() -> AccessControlConditions {
    AccessControlConditions::Default(vec![json!({
        "contractAddress": "",
        "standardContractType": "",
        "chain": CHAIN,
        "method": "",
        "parameters": [":userAddress"],
        "returnValueTest": {
            "comparator": "=",
            "value": DEMO_WALLET
        }
    })])
}

/// Stand-in session credentials for [`DEMO_WALLET`].
pub fn demo_session() -> SessionCredentials {
    SessionCredentials(json!({
        "sig": "0x4ed752f1b45f4be85ac1a7a9a3d1b44042968cc7",
        "derivedVia": "web3.eth.personal.sign",
        "signedMessage": "litzip demo session",
        "address": DEMO_WALLET
    }))
}

/// Lowercase hex SHA-256, for demo-side verification.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Console logging, `RUST_LOG` driven, `info` by default.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
