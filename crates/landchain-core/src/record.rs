//! # Ledger Records
//!
//! [`NewRecord`] is what a caller asks to append; [`Record`] is what the
//! ledger stores once the timestamp, predecessor link and hash are fixed.
//!
//! The serialized form keeps the field names of the land registry
//! API (`name`, `age`, `uid`, `land`) so existing clients keep working.

use serde::{Deserialize, Serialize};

use crate::digest::record_digest;
use crate::error::ValidationError;
use crate::temporal::Timestamp;

/// Append request: the caller-supplied part of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    /// Free-text subject name.
    pub name: String,
    /// Opaque subject identifier. Not unique across records.
    pub uid: String,
    /// Subject age, stored as given.
    pub age: i64,
    /// Free-text payload (the land description).
    pub land: String,
}

impl NewRecord {
    /// Build an append request.
    pub fn new(
        name: impl Into<String>,
        uid: impl Into<String>,
        age: i64,
        land: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            uid: uid.into(),
            age,
            land: land.into(),
        }
    }

    /// Reject requests with an empty text field.
    ///
    /// Fields are checked in the order name, land, uid; the first empty one
    /// is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("name", &self.name), ("land", &self.land), ("uid", &self.uid)] {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// A ledger entry.
///
/// `hash` commits to every other serialized field; `previous_hash` commits
/// to the preceding entry. `sequence_index` is the entry's position and is
/// not part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the ledger (0 = genesis).
    #[serde(skip)]
    pub sequence_index: u64,
    /// Capture time.
    pub timestamp: Timestamp,
    /// Subject name.
    pub name: String,
    /// Subject age.
    pub age: i64,
    /// Subject identifier.
    pub uid: String,
    /// Payload.
    pub land: String,
    /// Hash of the preceding record, or the genesis sentinel.
    pub previous_hash: String,
    /// Hash over this record's fields and `previous_hash`.
    pub hash: String,
}

impl Record {
    /// Seal a new record: fix its position, timestamp and link, then hash it.
    pub fn seal(
        sequence_index: u64,
        timestamp: Timestamp,
        input: NewRecord,
        previous_hash: String,
    ) -> Self {
        let mut record = Self {
            sequence_index,
            timestamp,
            name: input.name,
            age: input.age,
            uid: input.uid,
            land: input.land,
            previous_hash,
            hash: String::new(),
        };
        record.hash = record.compute_hash();
        record
    }

    /// Recompute the hash from the stored fields.
    pub fn compute_hash(&self) -> String {
        record_digest(
            &self.timestamp.hash_form(),
            &self.name,
            &self.uid,
            &self.age.to_string(),
            &self.land,
            &self.previous_hash,
        )
    }

    /// Whether the stored hash matches the stored fields.
    pub fn is_hash_valid(&self) -> bool {
        self.compute_hash() == self.hash
    }
}
