//! Encryption service seam.
//!
//! Every bundle flow delegates the actual cryptography to an
//! [`EncryptionClient`] implementation. The client owns key management and
//! condition checking; this crate only shapes requests, moves ciphertext in
//! and out of archives, and surfaces client failures unchanged.

use crate::conditions::AccessControlConditions;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque authentication material forwarded to the decryption service.
///
/// The shape is whatever the service expects (wallet signature, session
/// signatures). This crate never inspects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionCredentials(pub Value);

impl SessionCredentials {
    /// No credentials attached.
    pub fn none() -> Self {
        Self(Value::Null)
    }

    /// True when no credentials were attached.
    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }
}

/// What to encrypt and under which gate.
#[derive(Debug, Clone)]
pub struct EncryptRequest {
    /// Plaintext bytes.
    pub data_to_encrypt: Vec<u8>,
    /// Condition set gating later decryption.
    pub conditions: AccessControlConditions,
    /// Chain the conditions are evaluated on.
    pub chain: String,
}

/// Successful encryption result.
#[derive(Debug, Clone)]
pub struct EncryptResponse {
    /// Ciphertext in base64 transport encoding.
    pub ciphertext: String,
    /// Hex SHA-256 of the plaintext, required again at decryption time.
    pub data_to_encrypt_hash: String,
}

/// Ciphertext plus everything the service needs to release the plaintext.
#[derive(Debug, Clone)]
pub struct DecryptRequest {
    /// Ciphertext in base64 transport encoding.
    pub ciphertext: String,
    /// Condition set the caller claims to satisfy.
    pub conditions: AccessControlConditions,
    /// Chain the conditions are evaluated on.
    pub chain: String,
    /// Hex SHA-256 the plaintext must hash to.
    pub data_to_encrypt_hash: String,
    /// Caller authentication material.
    pub session: SessionCredentials,
}

/// Service-level error, surfaced to bundle callers unchanged.
#[derive(Debug, Clone)]
pub struct ClientError {
    pub message: String,
    pub kind: ClientErrorKind,
}

/// Broad failure category reported by the encryption service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    /// Caller does not satisfy the condition set.
    AccessDenied,
    /// Plaintext hash check failed.
    HashMismatch,
    /// Authentication material missing or rejected.
    InvalidSession,
    /// Transport-level failure talking to the service.
    Network,
    /// Anything else.
    Other,
}

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ClientErrorKind::Other,
        }
    }

    pub fn with_kind(message: impl Into<String>, kind: ClientErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ClientError {}

/// Asynchronous encryption service.
///
/// Implementations must be shareable across tasks. The built-in
/// [`crate::LocalEncryptionClient`] serves tests and offline use; real
/// deployments implement this against the network service.
#[async_trait]
pub trait EncryptionClient: Send + Sync {
    /// Encrypt plaintext under a condition set.
    async fn encrypt(
        &self,
        request: EncryptRequest,
    ) -> std::result::Result<EncryptResponse, ClientError>;

    /// Recover plaintext, provided the service accepts the conditions,
    /// session and hash.
    async fn decrypt(
        &self,
        request: DecryptRequest,
    ) -> std::result::Result<Vec<u8>, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_credentials_empty() {
        assert!(SessionCredentials::none().is_empty());
        assert!(SessionCredentials::default().is_empty());

        let creds = SessionCredentials(serde_json::json!({"sig": "0xabc"}));
        assert!(!creds.is_empty());
    }

    #[test]
    fn test_client_error_display_is_message_only() {
        let err = ClientError::with_kind("node unreachable", ClientErrorKind::Network);
        assert_eq!(err.to_string(), "node unreachable");
        assert_eq!(err.kind, ClientErrorKind::Network);
    }

    #[test]
    fn test_client_error_default_kind() {
        assert_eq!(ClientError::new("boom").kind, ClientErrorKind::Other);
    }
}
