//! Round-trips a single file through the metadata flow.
//!
//! Encrypts this demo's own source, packs the ciphertext next to its
//! metadata and a readme, then unpacks the bundle and verifies both the
//! decrypted bytes and the metadata record.

use litzip_bundle::{
    decrypt_file_with_metadata, encrypt_file_and_bundle_metadata, BundleFile,
    LocalEncryptionClient,
};
use litzip_demos::{demo_conditions, demo_session, init_logging, sha256_hex, CHAIN};

const README: &str = "This zip contains an encrypted file and the metadata needed to decrypt it.";

#[tokio::main]
async fn main() -> litzip_bundle::Result<()> {
    init_logging();

    let client = LocalEncryptionClient::new();
    let conditions = demo_conditions();

    let source = include_bytes!("encrypt_file_with_metadata.rs").to_vec();
    let file = BundleFile::new("encrypt_file_with_metadata.rs", source.clone())
        .with_content_type("text/x-rust");
    println!("bundling {} ({} bytes)", file.name, file.size());

    let bundle =
        encrypt_file_and_bundle_metadata(&file, &conditions, CHAIN, Some(README), &client).await?;
    println!("bundle: {} bytes (plain zip, payload encrypted)", bundle.len());

    let unbundled = decrypt_file_with_metadata(&bundle, demo_session(), &client).await?;

    assert_eq!(unbundled.metadata.name, file.name, "metadata name");
    assert_eq!(unbundled.metadata.chain, CHAIN, "metadata chain");
    assert_eq!(
        unbundled.metadata.data_to_encrypt_hash,
        sha256_hex(&source),
        "metadata hash"
    );
    assert_eq!(unbundled.data, source, "decrypted bytes");

    println!(
        "verified {} ({} bytes, hash {})",
        unbundled.metadata.name,
        unbundled.data.len(),
        unbundled.metadata.data_to_encrypt_hash
    );

    Ok(())
}
