//! Bundle metadata schema.
//!
//! `lit_protocol_metadata.json` describes the encrypted file riding next to
//! it: identity fields, the gating condition set, the chain, and the
//! plaintext hash the decryption service verifies against. The wire format
//! spreads the condition set over four optional fields; decoding accepts a
//! document only when exactly one of them is present.

use crate::conditions::AccessControlConditions;
use crate::error::BundleError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A file handed to the bundling flows.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleFile {
    /// File name recorded in metadata and used as the archive entry name.
    pub name: String,
    /// MIME type recorded in metadata.
    pub content_type: String,
    /// Raw file contents.
    pub data: Vec<u8>,
}

impl BundleFile {
    /// New file with the default `application/octet-stream` type.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content_type: "application/octet-stream".to_string(),
            data: data.into(),
        }
    }

    /// Override the MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Size in bytes, as recorded in metadata.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Decoded `lit_protocol_metadata.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMetadata", into = "RawMetadata")]
pub struct BundleMetadata {
    /// Original file name.
    pub name: String,
    /// Original MIME type (`type` on the wire).
    pub content_type: String,
    /// Original size in bytes.
    pub size: u64,
    /// The single condition set gating decryption.
    pub conditions: AccessControlConditions,
    /// Chain the conditions are evaluated on.
    pub chain: String,
    /// Hex SHA-256 of the plaintext, verified by the decryption service.
    pub data_to_encrypt_hash: String,
}

impl BundleMetadata {
    /// Parse a metadata document.
    ///
    /// Unlike going through `serde_json::from_str` directly, the cardinality
    /// rule surfaces as [`BundleError::ConditionCount`] instead of being
    /// flattened into a generic JSON error.
    pub fn from_json(text: &str) -> crate::error::Result<Self> {
        let raw: RawMetadata = serde_json::from_str(text)?;
        Self::try_from(raw)
    }

    /// Metadata describing `file` after encryption.
    pub fn for_file(
        file: &BundleFile,
        conditions: AccessControlConditions,
        chain: impl Into<String>,
        data_to_encrypt_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: file.name.clone(),
            content_type: file.content_type.clone(),
            size: file.size(),
            conditions,
            chain: chain.into(),
            data_to_encrypt_hash: data_to_encrypt_hash.into(),
        }
    }
}

/// Wire layout: the condition set is one of four optional fields.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetadata {
    name: String,
    #[serde(rename = "type")]
    content_type: String,
    size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_control_conditions: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evm_contract_conditions: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sol_rpc_conditions: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unified_access_control_conditions: Option<Vec<Value>>,
    chain: String,
    data_to_encrypt_hash: String,
}

impl TryFrom<RawMetadata> for BundleMetadata {
    type Error = BundleError;

    fn try_from(raw: RawMetadata) -> Result<Self, Self::Error> {
        let conditions = AccessControlConditions::from_fields(
            raw.access_control_conditions,
            raw.evm_contract_conditions,
            raw.sol_rpc_conditions,
            raw.unified_access_control_conditions,
        )
        .map_err(|found| BundleError::ConditionCount { found })?;

        Ok(Self {
            name: raw.name,
            content_type: raw.content_type,
            size: raw.size,
            conditions,
            chain: raw.chain,
            data_to_encrypt_hash: raw.data_to_encrypt_hash,
        })
    }
}

impl From<BundleMetadata> for RawMetadata {
    fn from(meta: BundleMetadata) -> Self {
        let mut raw = Self {
            name: meta.name,
            content_type: meta.content_type,
            size: meta.size,
            access_control_conditions: None,
            evm_contract_conditions: None,
            sol_rpc_conditions: None,
            unified_access_control_conditions: None,
            chain: meta.chain,
            data_to_encrypt_hash: meta.data_to_encrypt_hash,
        };

        match meta.conditions {
            AccessControlConditions::Default(c) => raw.access_control_conditions = Some(c),
            AccessControlConditions::EvmContract(c) => raw.evm_contract_conditions = Some(c),
            AccessControlConditions::SolRpc(c) => raw.sol_rpc_conditions = Some(c),
            AccessControlConditions::Unified(c) => raw.unified_access_control_conditions = Some(c),
        }

        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_conditions() -> AccessControlConditions {
        AccessControlConditions::Default(vec![json!({
            "chain": "ethereum",
            "method": "",
            "parameters": [":userAddress"],
        })])
    }

    fn sample_metadata() -> BundleMetadata {
        BundleMetadata {
            name: "report.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            size: 1234,
            conditions: sample_conditions(),
            chain: "ethereum".to_string(),
            data_to_encrypt_hash: "ab".repeat(32),
        }
    }

    #[test]
    fn test_roundtrip() {
        let meta = sample_metadata();
        let json = serde_json::to_string(&meta).unwrap();
        let back: BundleMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample_metadata()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["name"], "report.pdf");
        assert_eq!(obj["type"], "application/pdf");
        assert_eq!(obj["size"], 1234);
        assert_eq!(obj["chain"], "ethereum");
        assert!(obj.contains_key("dataToEncryptHash"));
        assert!(obj.contains_key("accessControlConditions"));

        // Absent condition kinds are omitted, not serialized as null.
        assert!(!obj.contains_key("evmContractConditions"));
        assert!(!obj.contains_key("solRpcConditions"));
        assert!(!obj.contains_key("unifiedAccessControlConditions"));
    }

    #[test]
    fn test_decode_no_conditions_rejected() {
        let doc = json!({
            "name": "a.bin",
            "type": "application/octet-stream",
            "size": 1,
            "chain": "ethereum",
            "dataToEncryptHash": "00",
        });

        let err = serde_json::from_value::<BundleMetadata>(doc).unwrap_err();
        assert!(err.to_string().contains("exactly one condition set"));
        assert!(err.to_string().contains("found 0"));
    }

    #[test]
    fn test_decode_several_conditions_rejected() {
        let doc = json!({
            "name": "a.bin",
            "type": "application/octet-stream",
            "size": 1,
            "accessControlConditions": [],
            "solRpcConditions": [],
            "chain": "ethereum",
            "dataToEncryptHash": "00",
        });

        let err = serde_json::from_value::<BundleMetadata>(doc).unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_decode_null_condition_field_treated_as_absent() {
        let doc = json!({
            "name": "a.bin",
            "type": "application/octet-stream",
            "size": 1,
            "accessControlConditions": null,
            "unifiedAccessControlConditions": [{"chain": "solana"}],
            "chain": "solana",
            "dataToEncryptHash": "00",
        });

        let meta: BundleMetadata = serde_json::from_value(doc).unwrap();
        assert_eq!(meta.conditions.key(), "unifiedAccessControlConditions");
    }

    #[test]
    fn test_from_json_surfaces_condition_count() {
        let doc = r#"{
            "name": "a.bin",
            "type": "application/octet-stream",
            "size": 1,
            "chain": "ethereum",
            "dataToEncryptHash": "00"
        }"#;

        let err = BundleMetadata::from_json(doc).unwrap_err();
        assert!(matches!(err, BundleError::ConditionCount { found: 0 }));
    }

    #[test]
    fn test_from_json_malformed_is_json_error() {
        let err = BundleMetadata::from_json("not json at all").unwrap_err();
        assert!(matches!(err, BundleError::Json(_)));
    }

    #[test]
    fn test_bundle_file_defaults() {
        let file = BundleFile::new("notes.txt", b"hi".to_vec());
        assert_eq!(file.content_type, "application/octet-stream");
        assert_eq!(file.size(), 2);

        let file = file.with_content_type("text/plain");
        assert_eq!(file.content_type, "text/plain");
    }
}
