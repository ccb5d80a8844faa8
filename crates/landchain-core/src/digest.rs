//! # Record Digest
//!
//! The single hashing routine behind every record hash in the ledger.
//!
//! ## Encoding
//!
//! A record hash is `SHA256(timestamp ∥ name ∥ uid ∥ age ∥ land ∥ previous_hash)`
//! rendered as 64 lower-case hex characters, where each field is its
//! canonical string form (see [`Timestamp::hash_form`](crate::Timestamp::hash_form)
//! for the timestamp, decimal for the age) and `∥` is plain concatenation.
//!
//! ## Known Weakness
//!
//! There is no separator or length prefix between fields, so distinct
//! field tuples can produce the same byte string (`name="ab", uid="c"` and
//! `name="a", uid="bc"` both contribute `abc`). Finding a SHA-256 collision
//! is still infeasible, but the encoding itself is ambiguous. The format is
//! kept byte-for-byte for compatibility with hashes already issued; a
//! hardened encoding would length-prefix each field.

use sha2::{Digest, Sha256};

/// `previous_hash` of the genesis record: 64 ASCII `'0'`.
pub const GENESIS_PREVIOUS_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Compute a record hash from the canonical string forms of its fields.
///
/// Field order is fixed: timestamp, name, uid, age, land, previous hash.
pub fn record_digest(
    timestamp: &str,
    name: &str,
    uid: &str,
    age: &str,
    land: &str,
    previous_hash: &str,
) -> String {
    let mut hasher = Sha256::new();
    for field in [timestamp, name, uid, age, land, previous_hash] {
        hasher.update(field.as_bytes());
    }
    to_hex(&hasher.finalize())
}

/// Whether `s` is exactly 64 lower-case hex characters.
pub fn is_hex_digest(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
