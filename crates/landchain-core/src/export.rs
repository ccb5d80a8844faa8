//! # Ledger Export
//!
//! The JSON snapshot format served at `GET /api/blockchain` and accepted by
//! the offline auditor:
//!
//! ```json
//! { "total_blocks": 2, "blockchain": [ { "timestamp": "...", ... }, ... ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::chain::HashChain;
use crate::record::Record;

/// A full ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainExport {
    /// Number of records in `blockchain`.
    pub total_blocks: usize,
    /// Records in ledger order.
    pub blockchain: Vec<Record>,
}

impl ChainExport {
    /// Wrap an ordered record sequence.
    pub fn new(blockchain: Vec<Record>) -> Self {
        Self {
            total_blocks: blockchain.len(),
            blockchain,
        }
    }

    /// Records with `sequence_index` re-derived from position.
    ///
    /// The index is not part of the wire format, so it is restored here.
    /// A `total_blocks` that disagrees with the array length is ignored;
    /// the array is authoritative.
    pub fn into_records(self) -> Vec<Record> {
        if self.total_blocks != self.blockchain.len() {
            tracing::warn!(
                declared = self.total_blocks,
                actual = self.blockchain.len(),
                "export total_blocks disagrees with record count"
            );
        }
        let mut records = self.blockchain;
        for (i, record) in records.iter_mut().enumerate() {
            record.sequence_index = i as u64;
        }
        records
    }

    /// Rebuild a [`HashChain`] from the snapshot, keeping stored hashes.
    pub fn into_chain(self) -> HashChain {
        HashChain::from_records(self.into_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NewRecord;

    #[test]
    fn export_roundtrip_preserves_verifiability() {
        let chain = HashChain::new();
        for uid in ["A", "B", "C"] {
            chain.append(NewRecord::new("n", uid, 40, "parcel")).unwrap();
        }
        let export = chain.export();
        assert_eq!(export.total_blocks, 3);

        let json = serde_json::to_string(&export).unwrap();
        let back: ChainExport = serde_json::from_str(&json).unwrap();
        let restored = back.into_chain();

        assert_eq!(restored.len(), 3);
        assert!(restored.verify().is_valid);
        assert_eq!(restored.get_by_index(2).unwrap().sequence_index, 2);
    }

    #[test]
    fn tampered_export_is_detected_after_import() {
        let chain = HashChain::new();
        for uid in ["A", "B", "C"] {
            chain.append(NewRecord::new("n", uid, 40, "parcel")).unwrap();
        }
        let mut json = serde_json::to_value(chain.export()).unwrap();
        json["blockchain"][1]["land"] = serde_json::json!("someone else's parcel");

        let back: ChainExport = serde_json::from_value(json).unwrap();
        let report = back.into_chain().verify();
        assert!(!report.is_valid);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].index, 1);
    }

    #[test]
    fn json_shape() {
        let export = ChainExport::new(Vec::new());
        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json, serde_json::json!({"total_blocks": 0, "blockchain": []}));
    }
}
