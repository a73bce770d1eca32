//! Cross-implementation tests against the RustCrypto `sha1` crate

use chdigest_algorithms::hash::Sha1Digest;
use sha1::Digest as _;
use std::io::Write;

fn reference(data: &[u8]) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(&sha1::Sha1::digest(data));
    out
}

fn patterned(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(167).wrapping_add(seed))
        .collect()
}

#[test]
fn test_every_length_up_to_three_blocks() {
    for len in 0..=192 {
        let data = patterned(len, 0x5c);
        assert_eq!(
            Sha1Digest::hash(&data),
            reference(&data),
            "length {} ({})",
            len,
            hex::encode(&data)
        );
    }
}

#[test]
fn test_padding_edges() {
    for len in [55usize, 56, 57, 64] {
        for fill in [0x00u8, 0x80, 0xff] {
            let data = vec![fill; len];
            assert_eq!(
                Sha1Digest::hash(&data),
                reference(&data),
                "length {} fill {:#04x}",
                len,
                fill
            );
        }
    }
}

#[test]
fn test_large_input_through_io_write() {
    let data = patterned(1 << 20, 0x11);
    let mut hasher = Sha1Digest::new();
    for chunk in data.chunks(4093) {
        hasher.write_all(chunk).unwrap();
    }
    assert_eq!(hasher.digest(), reference(&data));
}

#[test]
fn test_reused_instance_matches_reference() {
    let mut hasher = Sha1Digest::new();
    for len in [0usize, 3, 64, 100, 1000] {
        let data = patterned(len, len as u8);
        hasher.update(&data, 0, data.len());
        assert_eq!(hasher.digest(), reference(&data), "length {}", len);
    }
}
