//! # Service Bootstrap
//!
//! Builds the [`AppState`] at start-up and, when `SEED_SAMPLE_DATA` is set,
//! preloads a small demonstration ledger.

use landchain_core::{HashChain, LedgerError, NewRecord};

use crate::state::{AppConfig, AppState};

/// Errors during bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// A sample record was rejected by the ledger.
    #[error("failed to seed sample data: {0}")]
    Seed(#[from] LedgerError),
}

/// Demonstration records: two subjects, one of them with two parcels.
pub fn sample_records() -> Vec<NewRecord> {
    vec![
        NewRecord::new(
            "John Doe",
            "UID001",
            35,
            "Land parcel #123, 2 acres, agricultural land",
        ),
        NewRecord::new(
            "Jane Smith",
            "UID002",
            42,
            "Land parcel #456, 1.5 acres, residential plot",
        ),
        NewRecord::new(
            "Bob Johnson",
            "UID001",
            35,
            "Land parcel #789, 3 acres, commercial zone",
        ),
    ]
}

/// Append [`sample_records`] to `chain`. Returns how many were added.
pub fn seed_sample_data(chain: &HashChain) -> Result<usize, LedgerError> {
    let records = sample_records();
    let count = records.len();
    for record in records {
        chain.append(record)?;
    }
    Ok(count)
}

/// Build application state from configuration.
pub fn bootstrap(config: AppConfig) -> Result<AppState, BootstrapError> {
    let seed = config.seed_sample_data;
    let state = AppState::with_config(config);

    if seed {
        let added = seed_sample_data(&state.chain)?;
        tracing::info!(added, "seeded sample records");
    }

    tracing::info!(
        addr = %state.config.socket_addr(),
        admin_auth = state.config.admin_token.is_some(),
        records = state.chain.len(),
        "ledger service configured"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_without_seed_is_empty() {
        let state = bootstrap(AppConfig::default()).unwrap();
        assert!(state.chain.is_empty());
    }

    #[test]
    fn seeded_ledger_is_valid() {
        let state = bootstrap(AppConfig {
            seed_sample_data: true,
            ..AppConfig::default()
        })
        .unwrap();
        assert_eq!(state.chain.len(), 3);
        assert!(state.chain.verify().is_valid);

        let stats = state.chain.stats();
        assert_eq!(stats.unique_subjects, 2);
        assert_eq!(state.chain.get_by_uid("UID001").unwrap().name, "John Doe");
        assert_eq!(state.chain.get_history("UID001").unwrap().len(), 2);
    }
}
