//! Concurrent callers share only the read-only tables.

use std::thread;

use aes128_core::{cipher_block, Mode};

const KEY: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];
const PLAIN: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];
const CIPHER: [u8; 16] = [
    0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a,
];

#[test]
fn parallel_calls_agree_with_known_answer() {
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                scope.spawn(move || {
                    for _ in 0..200 {
                        // Alternate direction per worker so both paths run at once.
                        if worker % 2 == 0 {
                            let ct = cipher_block(Mode::Encrypt, &KEY, &PLAIN).unwrap();
                            assert_eq!(ct, CIPHER);
                        } else {
                            let pt = cipher_block(Mode::Decrypt, &KEY, &CIPHER).unwrap();
                            assert_eq!(pt, PLAIN);
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn distinct_keys_do_not_interfere() {
    thread::scope(|scope| {
        let handles: Vec<_> = (0u8..8)
            .map(|seed| {
                scope.spawn(move || {
                    let key = [seed; 16];
                    let block = [seed.wrapping_mul(31); 16];
                    let expected = cipher_block(Mode::Encrypt, &key, &block).unwrap();
                    for _ in 0..200 {
                        let ct = cipher_block(Mode::Encrypt, &key, &block).unwrap();
                        assert_eq!(ct, expected);
                        assert_eq!(cipher_block(Mode::Decrypt, &key, &ct).unwrap(), block);
                    }
                    expected
                })
            })
            .collect();
        let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for (i, a) in outputs.iter().enumerate() {
            for b in &outputs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    });
}
