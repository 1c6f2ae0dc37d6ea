//! Decrypt-side bundle flows.
//!
//! Counterparts to the flows in [`crate::encrypt`]. Service errors pass
//! through unchanged; everything found after decryption is validated against
//! the bundle layout (expected entries present, metadata well formed) before
//! any data is handed back.

use crate::client::{DecryptRequest, EncryptionClient, SessionCredentials};
use crate::error::{BundleError, Result};
use crate::metadata::BundleMetadata;
use crate::{ASSETS_PREFIX, METADATA_ENTRY, STRING_ENTRY};
use base64::Engine;
use litzip_archive::{is_dir_marker, Compressor, ZipCompressor};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// A file recovered from a metadata bundle.
#[derive(Debug, Clone)]
pub struct UnbundledFile {
    /// Decrypted file contents.
    pub data: Vec<u8>,
    /// The metadata record the bundle carried.
    pub metadata: BundleMetadata,
}

/// Decrypt an archive produced by [`crate::zip_and_encrypt_string`] and read
/// the string payload back.
///
/// Fails with [`BundleError::MissingEntry`] when the decrypted archive has
/// no `string.txt`, which usually means the ciphertext came from a different
/// flow.
pub async fn decrypt_zipped_string<C>(request: DecryptRequest, client: &C) -> Result<String>
where
    C: EncryptionClient + ?Sized,
{
    let plaintext = client.decrypt(request).await?;
    let archive = ZipCompressor::load(&plaintext)?;

    archive
        .read_text(STRING_ENTRY)?
        .ok_or_else(|| BundleError::MissingEntry(STRING_ENTRY.to_string()))
}

/// Decrypt an archive produced by [`crate::zip_and_encrypt_files`] and map
/// each file back to its original name.
///
/// Only entries under `encryptedAssets/` are returned, with the prefix
/// stripped; directory markers and entries outside the prefix are skipped.
pub async fn decrypt_zipped_files<C>(
    request: DecryptRequest,
    client: &C,
) -> Result<BTreeMap<String, Vec<u8>>>
where
    C: EncryptionClient + ?Sized,
{
    let plaintext = client.decrypt(request).await?;
    let archive = ZipCompressor::load(&plaintext)?;

    let mut files = BTreeMap::new();
    for (path, content) in archive.entries() {
        if is_dir_marker(&path) {
            continue;
        }

        let Some(name) = path.strip_prefix(ASSETS_PREFIX) else {
            warn!(path = %path, "Skipping entry outside the assets folder");
            continue;
        };

        debug!(name = %name, bytes = content.len(), "Recovered file");
        files.insert(name.to_string(), content);
    }

    info!(files = files.len(), "File archive decrypted");
    Ok(files)
}

/// Unpack a metadata bundle produced by
/// [`crate::encrypt_file_and_bundle_metadata`] and decrypt the file inside.
///
/// The bundle's metadata is authoritative: conditions, chain and plaintext
/// hash all come from `lit_protocol_metadata.json`, and only the session
/// credentials are supplied by the caller. A zip without that entry fails
/// with [`BundleError::MissingEntry`] up front, before any service call.
pub async fn decrypt_file_with_metadata<C>(
    bundle: &[u8],
    session: SessionCredentials,
    client: &C,
) -> Result<UnbundledFile>
where
    C: EncryptionClient + ?Sized,
{
    let archive = ZipCompressor::load(bundle)?;

    let metadata_json = archive
        .read_text(METADATA_ENTRY)?
        .ok_or_else(|| BundleError::MissingEntry(METADATA_ENTRY.to_string()))?;
    let metadata = BundleMetadata::from_json(&metadata_json)?;

    let entry = format!("{ASSETS_PREFIX}{}", metadata.name);
    let ciphertext = archive
        .read_bytes(&entry)
        .ok_or_else(|| BundleError::MissingEntry(entry.clone()))?;

    debug!(
        name = %metadata.name,
        chain = %metadata.chain,
        bytes = ciphertext.len(),
        "Decrypting bundled file"
    );

    let request = DecryptRequest {
        ciphertext: base64::engine::general_purpose::STANDARD.encode(ciphertext),
        conditions: metadata.conditions.clone(),
        chain: metadata.chain.clone(),
        data_to_encrypt_hash: metadata.data_to_encrypt_hash.clone(),
        session,
    };
    let data = client.decrypt(request).await?;

    info!(name = %metadata.name, bytes = data.len(), "Bundled file decrypted");
    Ok(UnbundledFile { data, metadata })
}
