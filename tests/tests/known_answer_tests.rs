// tests/known_answer_tests.rs
use chdigest_tests::{sha1_vector, sha1_vectors, VectorError};

#[test]
fn test_sha1_vectors_one_shot() {
    for vector in sha1_vectors() {
        vector
            .check_one_shot()
            .unwrap_or_else(|e| panic!("{}", e));
    }
}

#[test]
fn test_sha1_vectors_streaming() {
    for vector in sha1_vectors() {
        vector
            .check_streaming()
            .unwrap_or_else(|e| panic!("{}", e));
    }
}

#[test]
fn test_canonical_vectors_are_bundled() {
    for required in ["empty", "abc", "448-bit", "million-a"] {
        assert!(sha1_vector(required).is_some(), "missing vector {}", required);
    }
    assert!(sha1_vector("no-such-vector").is_none());
}

#[test]
fn test_mismatch_is_reported() {
    let mut vector = sha1_vector("abc").cloned().unwrap();
    vector.text = "abd".into();

    match vector.check_one_shot() {
        Err(VectorError::Mismatch {
            name,
            expected,
            actual,
        }) => {
            assert_eq!(name, "abc");
            assert_eq!(expected, "a9993e364706816aba3e25717850c26c9cd0d89d");
            assert_ne!(actual, expected);
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
}

#[test]
fn test_malformed_digest_is_reported() {
    let mut vector = sha1_vector("empty").cloned().unwrap();
    vector.digest = "da39".into();
    assert!(matches!(
        vector.check_one_shot(),
        Err(VectorError::Digest(_))
    ));
}
