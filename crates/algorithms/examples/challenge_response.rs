// Shows how a challenge-response login can splice protocol bytes into a
// running SHA-1 hash and compare the result against a peer's answer.

use chdigest_algorithms::hash::Sha1Digest;
use chdigest_algorithms::types::{ConstantTimeEq, Digest};

fn answer(challenge: &[u8], password: &[u8]) -> Digest<20> {
    let mut hasher = Sha1Digest::new();

    // Hash the password, then feed the challenge one byte at a time with a
    // separator after every fourth byte.
    hasher.update(password, 0, password.len());
    for i in 0..challenge.len() {
        hasher.update(challenge, i, 1);
        if i % 4 == 3 {
            hasher.update(b":", 0, 1);
        }
    }
    hasher.digest()
}

// What the server expects for this challenge and password
const EXPECTED: &str = "7a6f343a87474f0c0f57a9c769c09d20ef5655bc";

fn main() -> chdigest_algorithms::Result<()> {
    let challenge = b"Zq7kP0w1aXb9";
    let password = b"correct horse battery staple";
    let expected = Digest::<20>::from_hex(EXPECTED)?;

    let ours = answer(challenge, password);
    println!("response: {}", ours);
    println!("accepted: {}", ours.ct_eq(&expected));

    // Hashing the challenge without the separators yields a different answer
    let mut naive = Sha1Digest::new();
    naive.update_slice(password);
    naive.update_slice(challenge);
    let naive = naive.digest();
    println!("naive response: {}", naive);
    println!("accepted: {}", naive.ct_eq(&expected));

    Ok(())
}
