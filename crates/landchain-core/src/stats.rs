//! # Ledger Statistics

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Summary of a ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of records.
    pub total_records: usize,
    /// Number of distinct uid strings.
    pub unique_subjects: usize,
    /// Record at index 0, if any.
    pub genesis: Option<Record>,
    /// Most recently appended record, if any.
    pub latest: Option<Record>,
}

impl Stats {
    /// Summarize `records`. Uids are compared as strings.
    pub fn from_records(records: &[Record]) -> Self {
        let unique_subjects = records
            .iter()
            .map(|r| r.uid.as_str())
            .collect::<HashSet<_>>()
            .len();
        Self {
            total_records: records.len(),
            unique_subjects,
            genesis: records.first().cloned(),
            latest: records.last().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::HashChain;
    use crate::record::NewRecord;

    #[test]
    fn empty_stats() {
        let stats = Stats::from_records(&[]);
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.unique_subjects, 0);
        assert!(stats.genesis.is_none());
        assert!(stats.latest.is_none());
    }

    #[test]
    fn counts_distinct_uids_as_strings() {
        let chain = HashChain::new();
        for uid in ["7", "07", "7", "A"] {
            chain.append(NewRecord::new("n", uid, 1, "l")).unwrap();
        }
        let stats = chain.stats();
        assert_eq!(stats.total_records, 4);
        // "7" and "07" are different subjects.
        assert_eq!(stats.unique_subjects, 3);
        assert_eq!(stats.genesis.unwrap().uid, "7");
        assert_eq!(stats.latest.unwrap().uid, "A");
    }
}
