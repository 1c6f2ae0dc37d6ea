//! Round-trips a string payload through the string flow.
//!
//! Zips `"Hello World!"`, encrypts the archive, decrypts it with the same
//! conditions and session, and checks the payload came back intact.

use litzip_bundle::{
    decrypt_zipped_string, zip_and_encrypt_string, DecryptRequest, LocalEncryptionClient,
};
use litzip_demos::{demo_conditions, demo_session, init_logging, CHAIN};

#[tokio::main]
async fn main() -> litzip_bundle::Result<()> {
    init_logging();

    let client = LocalEncryptionClient::new();
    let conditions = demo_conditions();
    let payload = "Hello World!";

    let sealed = zip_and_encrypt_string(payload, &conditions, CHAIN, &client).await?;
    assert!(!sealed.ciphertext.is_empty(), "encrypt must return a ciphertext");
    assert!(
        !sealed.data_to_encrypt_hash.is_empty(),
        "encrypt must return the plaintext hash"
    );
    println!("ciphertext: {} base64 chars", sealed.ciphertext.len());
    println!("dataToEncryptHash: {}", sealed.data_to_encrypt_hash);

    let text = decrypt_zipped_string(
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

    assert_eq!(text, payload, "decrypted string must match the original");
    println!("roundtrip ok: {text:?}");

    Ok(())
}
