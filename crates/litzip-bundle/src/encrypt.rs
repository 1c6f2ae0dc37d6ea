//! Encrypt-side bundle flows.
//!
//! Each flow stages entries in an in-memory archive, serializes once, and
//! makes exactly one call to the encryption service. No partial archives are
//! ever returned: staging and serialization happen before the service call,
//! and any failure drops the archive on the floor.

use crate::client::{EncryptRequest, EncryptResponse, EncryptionClient};
use crate::conditions::AccessControlConditions;
use crate::error::{BundleError, Result};
use crate::metadata::{BundleFile, BundleMetadata};
use crate::{ASSETS_PREFIX, METADATA_ENTRY, README_ENTRY, STRING_ENTRY};
use base64::Engine;
use litzip_archive::{is_dir_marker, Compressor, ZipCompressor};
use tracing::{debug, info};

/// Zip a string payload and encrypt the whole archive.
///
/// The text is stored at [`STRING_ENTRY`]; the serialized archive bytes are
/// what gets encrypted. Returns the service response unchanged, with the
/// ciphertext and the plaintext hash needed for later decryption.
pub async fn zip_and_encrypt_string<C>(
    text: &str,
    conditions: &AccessControlConditions,
    chain: &str,
    client: &C,
) -> Result<EncryptResponse>
where
    C: EncryptionClient + ?Sized,
{
    let mut archive = ZipCompressor::new();
    archive.add_entry(STRING_ENTRY, text.into());
    let bytes = archive.to_bytes()?;

    debug!(bytes = bytes.len(), "Encrypting string archive");
    let response = client.encrypt(encrypt_request(bytes, conditions, chain)).await?;

    info!(
        hash = %response.data_to_encrypt_hash,
        "String archive encrypted"
    );
    Ok(response)
}

/// Zip a set of files under `encryptedAssets/` and encrypt the whole archive.
///
/// File names must be unique; a duplicate name overwrites the earlier entry,
/// matching the archive's last-write-wins rule. The archive is encrypted as
/// one unit, so decryption later is all-or-nothing. Fails with
/// [`BundleError::NoFiles`] on empty input and with
/// [`BundleError::InvalidFileName`] when a name is empty or ends in `/`.
pub async fn zip_and_encrypt_files<C>(
    files: &[BundleFile],
    conditions: &AccessControlConditions,
    chain: &str,
    client: &C,
) -> Result<EncryptResponse>
where
    C: EncryptionClient + ?Sized,
{
    if files.is_empty() {
        return Err(BundleError::NoFiles);
    }

    let mut archive = ZipCompressor::new();
    for file in files {
        ensure_packable(file)?;
        let entry = format!("{ASSETS_PREFIX}{}", file.name);
        debug!(entry = %entry, bytes = file.data.len(), "Staged file");
        archive.add_entry(&entry, file.data.clone().into());
    }
    let bytes = archive.to_bytes()?;

    let response = client.encrypt(encrypt_request(bytes, conditions, chain)).await?;

    info!(
        files = files.len(),
        hash = %response.data_to_encrypt_hash,
        "File archive encrypted"
    );
    Ok(response)
}

/// Encrypt one file and pack the ciphertext together with its metadata.
///
/// Unlike the other flows, the archive itself is returned in the clear; only
/// the file contents are encrypted. The archive carries:
/// - [`METADATA_ENTRY`]: JSON describing the file, its condition set, chain
///   and plaintext hash (the decrypt side treats this as authoritative);
/// - `encryptedAssets/<name>`: the raw ciphertext bytes;
/// - [`README_ENTRY`]: optional plain-text note for humans opening the zip.
///
/// Fails with [`BundleError::InvalidFileName`] when the file's name is empty
/// or ends in `/`.
pub async fn encrypt_file_and_bundle_metadata<C>(
    file: &BundleFile,
    conditions: &AccessControlConditions,
    chain: &str,
    readme: Option<&str>,
    client: &C,
) -> Result<Vec<u8>>
where
    C: EncryptionClient + ?Sized,
{
    ensure_packable(file)?;

    let response = client
        .encrypt(encrypt_request(file.data.clone(), conditions, chain))
        .await?;
    let ciphertext = base64::engine::general_purpose::STANDARD.decode(&response.ciphertext)?;

    let metadata = BundleMetadata::for_file(
        file,
        conditions.clone(),
        chain,
        response.data_to_encrypt_hash,
    );

    let mut archive = ZipCompressor::new();
    archive.add_entry(METADATA_ENTRY, serde_json::to_string(&metadata)?.into());
    if let Some(readme) = readme {
        archive.add_entry(README_ENTRY, readme.into());
    }
    archive.add_entry(
        &format!("{ASSETS_PREFIX}{}", file.name),
        ciphertext.into(),
    );

    let bytes = archive.to_bytes()?;
    info!(
        name = %metadata.name,
        bytes = bytes.len(),
        "Metadata bundle written"
    );
    Ok(bytes)
}

// An empty or `/`-terminated name would store as a directory marker and
// lose its content.
fn ensure_packable(file: &BundleFile) -> Result<()> {
    if file.name.is_empty() || is_dir_marker(&file.name) {
        return Err(BundleError::InvalidFileName(file.name.clone()));
    }
    Ok(())
}

fn encrypt_request(
    data_to_encrypt: Vec<u8>,
    conditions: &AccessControlConditions,
    chain: &str,
) -> EncryptRequest {
    EncryptRequest {
        data_to_encrypt,
        conditions: conditions.clone(),
        chain: chain.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::LocalEncryptionClient;
    use serde_json::json;

    fn conditions() -> AccessControlConditions {
        AccessControlConditions::Default(vec![json!({"chain": "ethereum"})])
    }

    #[tokio::test]
    async fn test_empty_file_set_rejected() {
        let client = LocalEncryptionClient::new();
        let result = zip_and_encrypt_files(&[], &conditions(), "ethereum", &client).await;
        assert!(matches!(result, Err(BundleError::NoFiles)));
    }

    #[tokio::test]
    async fn test_empty_file_name_rejected() {
        let client = LocalEncryptionClient::new();
        let files = [BundleFile::new("", vec![1u8])];

        let err = zip_and_encrypt_files(&files, &conditions(), "ethereum", &client)
            .await
            .unwrap_err();
        assert!(matches!(err, BundleError::InvalidFileName(ref name) if name.is_empty()));
    }

    #[tokio::test]
    async fn test_folder_file_name_rejected() {
        let client = LocalEncryptionClient::new();
        let file = BundleFile::new("notes/", b"would vanish as a marker".to_vec());

        let err = encrypt_file_and_bundle_metadata(&file, &conditions(), "ethereum", None, &client)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "file name 'notes/' is empty or names a folder"
        );
        assert!(matches!(err, BundleError::InvalidFileName(_)));
    }

    #[tokio::test]
    async fn test_string_flow_returns_service_response() {
        let client = LocalEncryptionClient::new();
        let response = zip_and_encrypt_string("hi", &conditions(), "ethereum", &client)
            .await
            .unwrap();

        assert!(!response.ciphertext.is_empty());
        // Hex SHA-256 of the archive plaintext.
        assert_eq!(response.data_to_encrypt_hash.len(), 64);
    }

    #[tokio::test]
    async fn test_files_flow_returns_service_response() {
        let client = LocalEncryptionClient::new();
        let files = [BundleFile::new("a.bin", vec![1u8, 2, 3])];
        let response = zip_and_encrypt_files(&files, &conditions(), "ethereum", &client)
            .await
            .unwrap();

        assert!(!response.ciphertext.is_empty());
        assert_eq!(response.data_to_encrypt_hash.len(), 64);
    }

    #[tokio::test]
    async fn test_metadata_bundle_is_a_plain_zip() {
        let client = LocalEncryptionClient::new();
        let file = BundleFile::new("doc.bin", vec![7u8; 64]);
        let bytes = encrypt_file_and_bundle_metadata(
            &file,
            &conditions(),
            "ethereum",
            Some("decrypt with the bundled metadata"),
            &client,
        )
        .await
        .unwrap();

        // The returned artifact is unencrypted zip data.
        assert_eq!(&bytes[0..2], b"PK");

        let archive = ZipCompressor::load(&bytes).unwrap();
        assert!(archive.has_entry(METADATA_ENTRY));
        assert!(archive.has_entry(README_ENTRY));
        assert!(archive.has_entry("encryptedAssets/doc.bin"));
    }

    #[tokio::test]
    async fn test_metadata_bundle_readme_is_optional() {
        let client = LocalEncryptionClient::new();
        let file = BundleFile::new("doc.bin", vec![7u8; 8]);
        let bytes =
            encrypt_file_and_bundle_metadata(&file, &conditions(), "ethereum", None, &client)
                .await
                .unwrap();

        let archive = ZipCompressor::load(&bytes).unwrap();
        assert!(!archive.has_entry(README_ENTRY));
    }

    #[tokio::test]
    async fn test_metadata_entry_decodes() {
        let client = LocalEncryptionClient::new();
        let file = BundleFile::new("doc.pdf", vec![1u8, 2, 3]).with_content_type("application/pdf");
        let bytes =
            encrypt_file_and_bundle_metadata(&file, &conditions(), "ethereum", None, &client)
                .await
                .unwrap();

        let archive = ZipCompressor::load(&bytes).unwrap();
        let text = archive.read_text(METADATA_ENTRY).unwrap().unwrap();
        let metadata = BundleMetadata::from_json(&text).unwrap();

        assert_eq!(metadata.name, "doc.pdf");
        assert_eq!(metadata.content_type, "application/pdf");
        assert_eq!(metadata.size, 3);
        assert_eq!(metadata.chain, "ethereum");
        assert_eq!(metadata.data_to_encrypt_hash.len(), 64);
    }
}
