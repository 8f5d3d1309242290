//! Property-based tests for single-block AES-128.

use aes128_core::{cipher_block, expand_key, Aes128Key, Error, Mode, SCHEDULE_SIZE};
use proptest::prelude::*;

fn differing_bits(a: &[u8; 16], b: &[u8; 16]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(key in any::<[u8; 16]>(), plaintext in any::<[u8; 16]>()) {
        let ct = cipher_block(Mode::Encrypt, &key, &plaintext).unwrap();
        let pt = cipher_block(Mode::Decrypt, &key, &ct).unwrap();
        prop_assert_eq!(pt, plaintext);
    }

    #[test]
    fn encrypt_inverts_decrypt(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let pt = cipher_block(Mode::Decrypt, &key, &block).unwrap();
        let ct = cipher_block(Mode::Encrypt, &key, &pt).unwrap();
        prop_assert_eq!(ct, block);
    }

    #[test]
    fn schedule_prefix_is_the_key(key in any::<[u8; 16]>()) {
        let rks = expand_key(&Aes128Key::from(key));
        prop_assert_eq!(rks.as_bytes().len(), SCHEDULE_SIZE);
        prop_assert_eq!(&rks.as_bytes()[..16], &key[..]);
    }

    #[test]
    fn wrong_key_lengths_are_rejected(key in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(key.len() != 16);
        let result = cipher_block(Mode::Encrypt, &key, &[0u8; 16]);
        prop_assert_eq!(result, Err(Error::InvalidKeyLength { actual: key.len() }));
    }

    #[test]
    fn wrong_block_lengths_are_rejected(block in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(block.len() != 16);
        let result = cipher_block(Mode::Decrypt, &[0u8; 16], &block);
        prop_assert_eq!(result, Err(Error::InvalidBlockLength { actual: block.len() }));
    }
}

#[test]
fn repeated_encryption_is_deterministic() {
    let key = [0x2bu8; 16];
    let plaintext = *b"determinism test";
    let first = cipher_block(Mode::Encrypt, &key, &plaintext).unwrap();
    for _ in 0..1000 {
        assert_eq!(cipher_block(Mode::Encrypt, &key, &plaintext).unwrap(), first);
    }
}

#[test]
fn single_bit_flip_changes_many_output_bits() {
    let key = *b"avalanche key 01";
    let plaintext = *b"avalanche block!";
    let base = cipher_block(Mode::Encrypt, &key, &plaintext).unwrap();

    let mut total = 0u32;
    for bit in 0..128 {
        let mut flipped = plaintext;
        flipped[bit / 8] ^= 1 << (bit % 8);
        let ct = cipher_block(Mode::Encrypt, &key, &flipped).unwrap();
        let diff = differing_bits(&base, &ct);
        assert!(diff > 20, "bit {bit} changed only {diff} output bits");
        total += diff;
    }
    // Expect close to 64 of 128 bits on average.
    let mean = total / 128;
    assert!((56..=72).contains(&mean), "mean diffusion {mean}");
}
