//! # Hash Chain
//!
//! The ledger: an ordered, append-only sequence of [`Record`]s in which each
//! record's `previous_hash` is its predecessor's `hash`.
//!
//! ## Concurrency
//!
//! All state sits behind one `parking_lot::RwLock`. `append` and `clear`
//! take the write lock; every read and iteration (`get_all`, `verify`,
//! `stats`, `get_history`, ...) takes the read lock. `append` reads the tip,
//! stamps the time, hashes and pushes under a single write-lock
//! acquisition, so concurrent appends always see a consistent tip and
//! readers never observe a half-linked record. The lock is never held
//! across I/O or `.await`.
//!
//! ## Integrity Model
//!
//! The chain only ever hands out clones. The single way to change stored
//! content is `append` (which extends) or `clear` (which empties); there is
//! no update or delete of an individual record.

use parking_lot::RwLock;

use crate::digest::{is_hex_digest, GENESIS_PREVIOUS_HASH};
use crate::error::{LedgerError, ValidationError};
use crate::export::ChainExport;
use crate::record::{NewRecord, Record};
use crate::stats::Stats;
use crate::temporal::Timestamp;
use crate::verify::{verify_records, VerificationReport};

/// Thread-safe, append-only record ledger.
#[derive(Debug, Default)]
pub struct HashChain {
    records: RwLock<Vec<Record>>,
}

impl HashChain {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously exported records.
    ///
    /// Positions are renumbered; hashes and links are kept exactly as given
    /// so that [`verify`](Self::verify) reports any tampering in the source.
    pub fn from_records(mut records: Vec<Record>) -> Self {
        for (i, record) in records.iter_mut().enumerate() {
            record.sequence_index = i as u64;
        }
        Self {
            records: RwLock::new(records),
        }
    }

    /// Append a record and return the sealed copy.
    ///
    /// The new record links to the current tip, or to the genesis sentinel
    /// when the ledger is empty. Its `sequence_index` equals the ledger
    /// length before the call.
    pub fn append(&self, input: NewRecord) -> Result<Record, LedgerError> {
        input.validate()?;

        let mut records = self.records.write();
        let previous_hash = records
            .last()
            .map(|tip| tip.hash.clone())
            .unwrap_or_else(|| GENESIS_PREVIOUS_HASH.to_string());
        let record = Record::seal(records.len() as u64, Timestamp::now(), input, previous_hash);

        if !is_hex_digest(&record.hash) {
            return Err(LedgerError::Internal(format!(
                "digest routine produced a malformed hash for record #{}",
                record.sequence_index
            )));
        }

        records.push(record.clone());
        tracing::debug!(
            index = record.sequence_index,
            uid = %record.uid,
            hash = %record.hash,
            "record appended"
        );
        Ok(record)
    }

    /// First record (lowest index) whose uid string-equals `uid`.
    pub fn get_by_uid(&self, uid: &str) -> Result<Record, LedgerError> {
        require_uid(uid)?;
        self.records
            .read()
            .iter()
            .find(|r| r.uid == uid)
            .cloned()
            .ok_or_else(|| LedgerError::UidNotFound {
                uid: uid.to_string(),
            })
    }

    /// Every record whose uid string-equals `uid`, in ledger order.
    ///
    /// Zero matches is [`LedgerError::HistoryNotFound`]; an empty query is a
    /// validation error.
    pub fn get_history(&self, uid: &str) -> Result<Vec<Record>, LedgerError> {
        require_uid(uid)?;
        let history: Vec<Record> = self
            .records
            .read()
            .iter()
            .filter(|r| r.uid == uid)
            .cloned()
            .collect();
        if history.is_empty() {
            return Err(LedgerError::HistoryNotFound {
                uid: uid.to_string(),
            });
        }
        Ok(history)
    }

    /// Bounds-checked positional lookup.
    pub fn get_by_index(&self, index: u64) -> Result<Record, LedgerError> {
        let records = self.records.read();
        usize::try_from(index)
            .ok()
            .and_then(|i| records.get(i))
            .cloned()
            .ok_or(LedgerError::IndexOutOfRange {
                index,
                total: records.len(),
            })
    }

    /// Snapshot of the full ledger.
    pub fn get_all(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    /// Snapshot in export form.
    pub fn export(&self) -> ChainExport {
        ChainExport::new(self.get_all())
    }

    /// Count, distinct uids, genesis and tip.
    pub fn stats(&self) -> Stats {
        Stats::from_records(&self.records.read())
    }

    /// Run a full integrity scan. Never mutates the ledger.
    pub fn verify(&self) -> VerificationReport {
        verify_records(&self.records.read())
    }

    /// Empty the ledger. Idempotent.
    pub fn clear(&self) {
        let mut records = self.records.write();
        let dropped = records.len();
        records.clear();
        tracing::debug!(dropped, "ledger cleared");
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

fn require_uid(uid: &str) -> Result<(), ValidationError> {
    if uid.is_empty() {
        return Err(ValidationError::MissingField("uid"));
    }
    Ok(())
}
