use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::model::{BankRecord, BanksFile, RecordStore};
use crate::config::DataPaths;
use crate::error::DataError;
use crate::labels::LabelConfig;

// ---------------------------------------------------------------------------
// DashboardData – everything loaded at startup
// ---------------------------------------------------------------------------

/// Immutable inputs shared by every render cycle.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub store: RecordStore,
    pub labels: LabelConfig,
    /// Contents of `index_metadata.json`, carried through unread.
    pub index_metadata: JsonValue,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and validate the three input files.
///
/// Any failure here is fatal: the dashboard never renders partial data.
pub fn load_dashboard_data(paths: &DataPaths) -> Result<DashboardData> {
    let labels: LabelConfig = read_json(&paths.labels).context("loading labels")?;
    let index_metadata: JsonValue =
        read_json(&paths.index_metadata).context("loading index metadata")?;
    let banks: BanksFile = read_json(&paths.banks).context("loading bank master data")?;

    validate_banks(&banks.banks_data)?;

    for (language, lang) in labels.languages() {
        let missing = lang.missing_keys();
        if !missing.is_empty() {
            let keys: Vec<&str> = missing.iter().map(|k| k.as_str()).collect();
            log::warn!("{language} labels missing {keys:?}; using built-in defaults");
        }
    }

    let store = RecordStore::new(banks.banks_data);
    log::info!(
        "Loaded {} banks across countries {:?}",
        store.len(),
        store.countries()
    );

    Ok(DashboardData {
        store,
        labels,
        index_metadata,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Reject data sets that cannot be keyed by `short_name` per country.
pub fn validate_banks(banks: &[BankRecord]) -> Result<(), DataError> {
    if banks.is_empty() {
        return Err(DataError::NoBanks);
    }
    let mut seen: BTreeSet<(&str, &str)> = BTreeSet::new();
    for bank in banks {
        if !seen.insert((bank.country.as_str(), bank.short_name.as_str())) {
            return Err(DataError::DuplicateShortName {
                country: bank.country.clone(),
                short_name: bank.short_name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CapSegment;
    use crate::labels::{LabelKey, Language};
    use crate::test_helpers::{bank, write_sample_files};

    #[test]
    fn loads_sample_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_files(dir.path());

        let data = load_dashboard_data(&DataPaths::from_dir(dir.path())).unwrap();
        assert_eq!(data.store.len(), 5);
        assert_eq!(data.store.countries(), ["India", "USA"]);
        assert_eq!(
            data.labels.text(Language::Tamil, LabelKey::TableTitle),
            "வங்கி விவரங்கள்"
        );
        assert!(data.index_metadata.get("NIFTY50").is_some());
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_files(dir.path());
        std::fs::remove_file(dir.path().join("banks-master.json")).unwrap();

        let err = load_dashboard_data(&DataPaths::from_dir(dir.path())).unwrap_err();
        assert!(format!("{err:#}").contains("banks-master.json"));
    }

    #[test]
    fn malformed_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_files(dir.path());
        std::fs::write(dir.path().join("labels.json"), "{ not json").unwrap();

        let err = load_dashboard_data(&DataPaths::from_dir(dir.path())).unwrap_err();
        assert!(format!("{err:#}").contains("loading labels"));
    }

    #[test]
    fn unknown_cap_segment_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_files(dir.path());
        let banks = r#"{"banks_data": [{
            "country": "India", "sector": "PSU", "cap_segment": "Micro",
            "short_name": "X", "full_name_en": "X", "full_name_ta": "X",
            "isin": "INE000000000", "indices": [], "beta_5yr": 1.0
        }]}"#;
        std::fs::write(dir.path().join("banks-master.json"), banks).unwrap();

        assert!(load_dashboard_data(&DataPaths::from_dir(dir.path())).is_err());
    }

    #[test]
    fn duplicate_short_name_within_country_is_rejected() {
        let banks = vec![
            bank("India", "PSU", CapSegment::Large, "SBIN"),
            bank("India", "Private", CapSegment::Mid, "SBIN"),
        ];
        assert_eq!(
            validate_banks(&banks),
            Err(DataError::DuplicateShortName {
                country: "India".into(),
                short_name: "SBIN".into(),
            })
        );
    }

    #[test]
    fn same_short_name_in_different_countries_is_fine() {
        let banks = vec![
            bank("India", "PSU", CapSegment::Large, "BOB"),
            bank("USA", "Regional", CapSegment::Small, "BOB"),
        ];
        assert_eq!(validate_banks(&banks), Ok(()));
    }

    #[test]
    fn empty_bank_list_is_rejected() {
        assert_eq!(validate_banks(&[]), Err(DataError::NoBanks));
    }
}
