//! Encrypted zip bundle flows for litzip.
//!
//! This crate composes the in-memory archive from `litzip-archive` with an
//! external encryption service reached through the [`EncryptionClient`]
//! trait. Three paired flows cover the common shapes: a single string, a set
//! of files, and one file packed next to its own decryption metadata.
//!
//! # Bundle layouts
//!
//! All three flows build ZIP archives:
//! - string flow: `string.txt`; the whole archive is encrypted.
//! - files flow: one `encryptedAssets/<name>` entry per file; the whole
//!   archive is encrypted as a unit.
//! - metadata flow: the archive travels in the clear and only the payload is
//!   encrypted. It contains `lit_protocol_metadata.json` (file identity,
//!   condition set, chain, plaintext hash), `encryptedAssets/<name>` (raw
//!   ciphertext bytes) and an optional `readme.txt`.
//!
//! # Example
//!
//! ```no_run
//! use litzip_bundle::{
//!     decrypt_zipped_string, zip_and_encrypt_string, AccessControlConditions,
//!     DecryptRequest, LocalEncryptionClient, SessionCredentials,
//! };
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LocalEncryptionClient::new();
//! let conditions = AccessControlConditions::Default(vec![serde_json::json!({
//!     "chain": "ethereum",
//! })]);
//!
//! let sealed = zip_and_encrypt_string("Hello World!", &conditions, "ethereum", &client).await?;
//!
//! let text = decrypt_zipped_string(
//!     DecryptRequest {
//!         ciphertext: sealed.ciphertext,
//!         conditions: conditions.clone(),
//!         chain: "ethereum".to_string(),
//!         data_to_encrypt_hash: sealed.data_to_encrypt_hash,
//!         session: SessionCredentials(serde_json::json!({"sig": "0x00"})),
//!     },
//!     &client,
//! )
//! .await?;
//! assert_eq!(text, "Hello World!");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod conditions;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod local;
pub mod metadata;

/// Entry holding the payload in the string flow.
pub const STRING_ENTRY: &str = "string.txt";

/// Entry holding the metadata document in the metadata flow.
pub const METADATA_ENTRY: &str = "lit_protocol_metadata.json";

/// Optional human-readable note in the metadata flow.
pub const README_ENTRY: &str = "readme.txt";

/// Folder prefix under which payload entries live.
pub const ASSETS_PREFIX: &str = "encryptedAssets/";

pub use client::{
    ClientError, ClientErrorKind, DecryptRequest, EncryptRequest, EncryptResponse,
    EncryptionClient, SessionCredentials,
};
pub use conditions::AccessControlConditions;
pub use decrypt::{
    decrypt_file_with_metadata, decrypt_zipped_files, decrypt_zipped_string, UnbundledFile,
};
pub use encrypt::{
    encrypt_file_and_bundle_metadata, zip_and_encrypt_files, zip_and_encrypt_string,
};
pub use error::{BundleError, Result};
pub use local::LocalEncryptionClient;
pub use metadata::{BundleFile, BundleMetadata};
