//! Encrypts and decrypts one block with the checked entry point.

use aes128_core::{cipher_block, Mode};

fn main() -> Result<(), aes128_core::Error> {
    let key = *b"sixteen byte key";
    let plaintext = *b"first block here";

    let ciphertext = cipher_block(Mode::Encrypt, &key, &plaintext)?;
    let decrypted = cipher_block(Mode::Decrypt, &key, &ciphertext)?;
    assert_eq!(decrypted, plaintext);

    // A 15-byte key is reported, not truncated.
    let err = cipher_block(Mode::Encrypt, &key[..15], &plaintext).unwrap_err();
    println!("rejected short key: {err}");

    println!("example succeeded; round trip restored the plaintext");
    Ok(())
}
