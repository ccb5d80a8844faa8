//! # Route Modules
//!
//! Each module defines an Axum Router for one API surface area.
//! Routers are assembled in [`crate::app`].

pub mod chain;
pub mod records;

use landchain_core::Record;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A record paired with its position in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndexedRecord {
    pub block_index: u64,
    #[schema(value_type = Object)]
    pub record: Record,
}

impl From<Record> for IndexedRecord {
    fn from(record: Record) -> Self {
        Self {
            block_index: record.sequence_index,
            record,
        }
    }
}
