//! In-process encryption client for tests and offline use.
//!
//! Seals plaintext with AES-256-GCM under a key held by the client, binding
//! the condition set and chain as associated data. That makes the gating
//! fields tamper-evident without evaluating any condition semantics, which
//! stay the realm of a real service. The wire shapes match the trait
//! contract exactly: base64 ciphertext with the nonce prepended, lowercase
//! hex SHA-256 plaintext hashes.

use crate::client::{
    ClientError, ClientErrorKind, DecryptRequest, EncryptRequest, EncryptResponse,
    EncryptionClient,
};
use crate::conditions::AccessControlConditions;
use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng, Payload},
    Aes256Gcm, Key, Nonce,
};
use async_trait::async_trait;
use base64::Engine;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Nonce length prepended to every ciphertext.
const NONCE_LEN: usize = 12;

/// Reference [`EncryptionClient`] backed by a single in-memory key.
///
/// Decryption enforces three of the contract's failure modes: a null
/// session is rejected, a conditions/chain mismatch reads as access denial,
/// and the plaintext hash is verified after unsealing.
pub struct LocalEncryptionClient {
    key: [u8; 32],
}

impl LocalEncryptionClient {
    /// Client with a freshly generated random key.
    pub fn new() -> Self {
        let key = Aes256Gcm::generate_key(&mut OsRng);
        Self { key: key.into() }
    }

    /// Client with a fixed key, for deterministic tests.
    pub fn with_key(key: [u8; 32]) -> Self {
        Self { key }
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.key))
    }
}

impl Default for LocalEncryptionClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Associated data binding a ciphertext to its gate.
///
/// Key order is deterministic, so the same conditions and chain always
/// produce the same bytes.
fn binding(conditions: &AccessControlConditions, chain: &str) -> Vec<u8> {
    let mut doc = serde_json::Map::new();
    doc.insert("chain".to_string(), Value::String(chain.to_string()));
    doc.insert(
        conditions.key().to_string(),
        Value::Array(conditions.conditions().to_vec()),
    );
    Value::Object(doc).to_string().into_bytes()
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[async_trait]
impl EncryptionClient for LocalEncryptionClient {
    async fn encrypt(
        &self,
        request: EncryptRequest,
    ) -> std::result::Result<EncryptResponse, ClientError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let aad = binding(&request.conditions, &request.chain);

        let sealed = self
            .cipher()
            .encrypt(
                &nonce,
                Payload {
                    msg: &request.data_to_encrypt,
                    aad: &aad,
                },
            )
            .map_err(|_| ClientError::new("encryption failed"))?;

        let mut ciphertext = nonce.to_vec();
        ciphertext.extend_from_slice(&sealed);

        debug!(bytes = request.data_to_encrypt.len(), "Sealed plaintext");

        Ok(EncryptResponse {
            ciphertext: base64::engine::general_purpose::STANDARD.encode(&ciphertext),
            data_to_encrypt_hash: sha256_hex(&request.data_to_encrypt),
        })
    }

    async fn decrypt(
        &self,
        request: DecryptRequest,
    ) -> std::result::Result<Vec<u8>, ClientError> {
        if request.session.is_empty() {
            return Err(ClientError::with_kind(
                "session credentials required",
                ClientErrorKind::InvalidSession,
            ));
        }

        let raw = base64::engine::general_purpose::STANDARD
            .decode(&request.ciphertext)
            .map_err(|e| ClientError::new(format!("ciphertext is not valid base64: {e}")))?;
        if raw.len() < NONCE_LEN {
            return Err(ClientError::new("ciphertext shorter than the nonce"));
        }

        let (nonce, sealed) = raw.split_at(NONCE_LEN);
        let aad = binding(&request.conditions, &request.chain);

        let plaintext = self
            .cipher()
            .decrypt(
                Nonce::from_slice(nonce),
                Payload {
                    msg: sealed,
                    aad: &aad,
                },
            )
            .map_err(|_| {
                ClientError::with_kind(
                    "conditions not satisfied for this ciphertext",
                    ClientErrorKind::AccessDenied,
                )
            })?;

        let actual = sha256_hex(&plaintext);
        if actual != request.data_to_encrypt_hash {
            return Err(ClientError::with_kind(
                format!(
                    "plaintext hash mismatch: expected {}, got {actual}",
                    request.data_to_encrypt_hash
                ),
                ClientErrorKind::HashMismatch,
            ));
        }

        debug!(bytes = plaintext.len(), "Unsealed plaintext");
        Ok(plaintext)
    }
}
