#![deny(missing_docs)]

//! # landchain-core: Hash-Linked Record Ledger
//!
//! This crate is the whole of the ledger's engineering: an append-only
//! sequence of records where each entry commits to its predecessor through a
//! SHA-256 digest, plus the verification engine that proves the sequence has
//! not been tampered with. It performs no I/O; the HTTP service and the
//! offline CLI are thin collaborators on top of it.
//!
//! ## Design Principles
//!
//! 1. **One owner for the ledger.** [`HashChain`] owns its records behind a
//!    single `parking_lot::RwLock`. Callers receive clones, never references
//!    into the live sequence, so a stored record cannot be mutated after
//!    append.
//!
//! 2. **One digest routine.** [`record_digest()`] is the only place a record
//!    hash is computed. Append and verification both go through it, so the
//!    two can never disagree about field order or string forms.
//!
//! 3. **Verification is pure.** [`verify_records()`] walks any slice of
//!    records and reports every issue it finds. The live chain and an
//!    imported snapshot are checked by the same code.
//!
//! 4. **Typed errors.** [`LedgerError`] carries the validation / not-found /
//!    internal taxonomy the HTTP layer maps onto status codes. No `.unwrap()`
//!    outside tests.
//!
//! ## Example
//!
//! ```
//! use landchain_core::{HashChain, NewRecord, GENESIS_PREVIOUS_HASH};
//!
//! let chain = HashChain::new();
//! let genesis = chain
//!     .append(NewRecord::new("John Doe", "UID001", 35, "Parcel #123"))
//!     .unwrap();
//! assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
//!
//! let next = chain
//!     .append(NewRecord::new("Jane Smith", "UID002", 42, "Parcel #456"))
//!     .unwrap();
//! assert_eq!(next.previous_hash, genesis.hash);
//! assert!(chain.verify().is_valid);
//! ```

pub mod chain;
pub mod digest;
pub mod error;
pub mod export;
pub mod record;
pub mod stats;
pub mod summary;
pub mod temporal;
pub mod verify;

// Re-export primary types at crate root for ergonomic imports.
pub use chain::HashChain;
pub use digest::{is_hex_digest, record_digest, GENESIS_PREVIOUS_HASH};
pub use error::{ErrorKind, LedgerError, ValidationError};
pub use export::ChainExport;
pub use record::{NewRecord, Record};
pub use stats::Stats;
pub use summary::{StatsSummary, VerificationDetail, VerificationSummary};
pub use temporal::Timestamp;
pub use verify::{verify_records, IssueKind, VerificationIssue, VerificationReport};
