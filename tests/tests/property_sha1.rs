//! Property-based tests for the streaming SHA-1 implementation

use chdigest_algorithms::hash::Sha1Digest;
use chdigest_algorithms::Error;
use proptest::prelude::*;
use sha1::Digest as _;

fn reference(data: &[u8]) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(&sha1::Sha1::digest(data));
    out
}

/// A message together with sorted split points inside it
fn message_with_splits() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    prop::collection::vec(any::<u8>(), 0..400).prop_flat_map(|data| {
        let len = data.len();
        (
            Just(data),
            prop::collection::vec(0..=len, 0..8).prop_map(|mut cuts| {
                cuts.sort_unstable();
                cuts
            }),
        )
    })
}

proptest! {
    #[test]
    fn matches_reference(data in prop::collection::vec(any::<u8>(), 0..600)) {
        prop_assert_eq!(Sha1Digest::hash(&data), reference(&data));
    }

    #[test]
    fn deterministic_across_instances(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let mut first = Sha1Digest::new();
        let mut second = Sha1Digest::new();
        first.update(&data, 0, data.len());
        second.update(&data, 0, data.len());
        prop_assert_eq!(first.digest(), second.digest());
    }

    #[test]
    fn chunking_invariance((data, cuts) in message_with_splits()) {
        let mut hasher = Sha1Digest::new();
        let mut start = 0;
        for &cut in cuts.iter().chain(core::iter::once(&data.len())) {
            hasher.update(&data, start, cut - start);
            start = cut;
        }
        prop_assert_eq!(hasher.digest(), Sha1Digest::hash(&data));
    }

    #[test]
    fn reuse_after_digest(
        first in prop::collection::vec(any::<u8>(), 0..200),
        second in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let mut hasher = Sha1Digest::new();
        hasher.update_slice(&first);
        let _ = hasher.digest();
        hasher.update_slice(&second);
        prop_assert_eq!(hasher.digest(), Sha1Digest::hash(&second));
    }

    #[test]
    fn reset_discards_prefix(
        prefix in prop::collection::vec(any::<u8>(), 0..200),
        message in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let mut hasher = Sha1Digest::new();
        hasher.update_slice(&prefix);
        hasher.reset();
        hasher.update_slice(&message);
        prop_assert_eq!(hasher.digest(), Sha1Digest::hash(&message));
    }

    #[test]
    fn bit_count_tracks_bytes(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let mut hasher = Sha1Digest::new();
        hasher.update_slice(&data);
        prop_assert_eq!(hasher.bit_count(), data.len() as u64 * 8);
        prop_assert_eq!(hasher.pending_len(), data.len() % 64);
    }

    #[test]
    fn try_update_checks_bounds(
        data in prop::collection::vec(any::<u8>(), 0..64),
        offset in 0usize..80,
        length in 0usize..80,
    ) {
        let mut hasher = Sha1Digest::new();
        let result = hasher.try_update(&data, offset, length);

        if offset + length <= data.len() {
            prop_assert!(result.is_ok());
            prop_assert_eq!(hasher.digest(), reference(&data[offset..offset + length]));
        } else {
            prop_assert_eq!(
                result,
                Err(Error::Range {
                    context: "Sha1Digest::try_update",
                    offset,
                    length,
                    available: data.len(),
                })
            );
            prop_assert_eq!(hasher, Sha1Digest::new());
        }
    }
}
