//! Round-trips a set of files through the files flow.
//!
//! Bundles three project files (embedded at compile time so the demo needs
//! no working directory), encrypts the archive, decrypts it, and verifies
//! every file by length and SHA-256.

use litzip_bundle::{
    decrypt_zipped_files, zip_and_encrypt_files, BundleFile, DecryptRequest,
    LocalEncryptionClient,
};
use litzip_demos::{demo_conditions, demo_session, init_logging, sha256_hex, CHAIN};

#[tokio::main]
async fn main() -> litzip_bundle::Result<()> {
    init_logging();

    let client = LocalEncryptionClient::new();
    let conditions = demo_conditions();

    let files = [
        BundleFile::new("Cargo.toml", include_bytes!("../../Cargo.toml").to_vec())
            .with_content_type("text/plain"),
        BundleFile::new("lib.rs", include_bytes!("../lib.rs").to_vec())
            .with_content_type("text/x-rust"),
        BundleFile::new(
            "zip_and_encrypt_files.rs",
            include_bytes!("zip_and_encrypt_files.rs").to_vec(),
        )
        .with_content_type("text/x-rust"),
    ];
    for file in &files {
        println!("bundling {} ({} bytes)", file.name, file.data.len());
    }

    let sealed = zip_and_encrypt_files(&files, &conditions, CHAIN, &client).await?;
    assert!(!sealed.ciphertext.is_empty(), "encrypt must return a ciphertext");
    assert!(
        !sealed.data_to_encrypt_hash.is_empty(),
        "encrypt must return the plaintext hash"
    );
    println!("ciphertext: {} base64 chars", sealed.ciphertext.len());
    println!("dataToEncryptHash: {}", sealed.data_to_encrypt_hash);

    let recovered = decrypt_zipped_files(
        DecryptRequest {
            ciphertext: sealed.ciphertext,
            conditions: conditions.clone(),
            chain: CHAIN.to_string(),
            data_to_encrypt_hash: sealed.data_to_encrypt_hash,
            session: demo_session(),
        },
        &client,
    )
    .await?;

    assert_eq!(recovered.len(), files.len(), "every file must come back");
    for file in &files {
        let data = &recovered[&file.name];
        assert_eq!(data.len(), file.data.len(), "length of {}", file.name);
        assert_eq!(
            sha256_hex(data),
            sha256_hex(&file.data),
            "hash of {}",
            file.name
        );
        println!("verified {} ({} bytes)", file.name, data.len());
    }

    Ok(())
}
