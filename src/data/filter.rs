use std::collections::BTreeSet;

use super::model::{BankRecord, CapSegment, RecordStore};
use crate::labels::{LabelConfig, Language};

/// Shown wherever a bank has no usable index membership.
pub const PLACEHOLDER: &str = "—";

// ---------------------------------------------------------------------------
// FilterSelection – what the user has ticked in the sidebar
// ---------------------------------------------------------------------------

/// Selection for one render cycle.
///
/// Every multi-select is an explicit set: an empty set matches nothing,
/// it never means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub country: String,
    pub sectors: BTreeSet<String>,
    pub cap_segments: BTreeSet<CapSegment>,
    pub short_names: BTreeSet<String>,
}

impl FilterSelection {
    /// Everything present for `country` selected, so the first view shows all its banks.
    pub fn defaults_for(store: &RecordStore, country: &str) -> Self {
        FilterSelection {
            country: country.to_string(),
            sectors: store.sectors_for(country).into_iter().collect(),
            cap_segments: CapSegment::ALL.into_iter().collect(),
            short_names: store.short_names_for(country).into_iter().collect(),
        }
    }

    pub fn matches(&self, record: &BankRecord) -> bool {
        record.country == self.country
            && self.sectors.contains(&record.sector)
            && self.cap_segments.contains(&record.cap_segment)
            && self.short_names.contains(&record.short_name)
    }
}

/// Records passing every predicate of `selection`, in source order.
pub fn apply<'a>(records: &'a [BankRecord], selection: &FilterSelection) -> Vec<&'a BankRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

// ---------------------------------------------------------------------------
// FilteredRow – record plus derived display columns
// ---------------------------------------------------------------------------

/// A filtered record with its presentation columns for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredRow<'a> {
    pub record: &'a BankRecord,
    /// `full_name_en` or `full_name_ta`, by language.
    pub display_name: &'a str,
    /// Index codes joined with `", "`, or [`PLACEHOLDER`].
    pub indices: String,
    pub sector_translated: &'a str,
    pub indices_translated: String,
}

/// Derive the display columns for already-filtered records.
pub fn derive_view<'a>(
    records: &[&'a BankRecord],
    labels: &'a LabelConfig,
    language: Language,
) -> Vec<FilteredRow<'a>> {
    records
        .iter()
        .map(|&record| {
            let codes = record.indices.codes();
            let display_name = match language {
                Language::English => record.full_name_en.as_str(),
                Language::Tamil => record.full_name_ta.as_str(),
            };
            FilteredRow {
                record,
                display_name,
                indices: join_or_placeholder(codes.iter().map(String::as_str)),
                sector_translated: labels.resolve_sector(language, &record.sector),
                indices_translated: join_or_placeholder(
                    codes.iter().map(|c| labels.resolve_index(language, c.trim())),
                ),
            }
        })
        .collect()
}

fn join_or_placeholder<'s>(parts: impl Iterator<Item = &'s str>) -> String {
    let joined = parts.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        joined
    }
}
