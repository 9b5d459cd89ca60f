use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// Country whose market cap is quoted in crores (INR); everything else is
/// quoted in billions of USD.
pub const CRORE_COUNTRY: &str = "India";

// ---------------------------------------------------------------------------
// CapSegment – market-capitalization bucket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CapSegment {
    Large,
    Mid,
    Small,
}

impl CapSegment {
    /// Fixed universe offered by the cap-segment filter.
    pub const ALL: [CapSegment; 3] = [CapSegment::Large, CapSegment::Mid, CapSegment::Small];

    pub fn as_str(self) -> &'static str {
        match self {
            CapSegment::Large => "Large",
            CapSegment::Mid => "Mid",
            CapSegment::Small => "Small",
        }
    }
}

// ---------------------------------------------------------------------------
// Indices – index membership list, tolerant of malformed input
// ---------------------------------------------------------------------------

/// Index membership of a bank.
///
/// Anything in the source file that is not a list of strings is kept as
/// `Malformed` instead of failing the whole load; it renders as a dash.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Indices {
    List(Vec<String>),
    #[default]
    Malformed,
}

impl Indices {
    /// Codes in source order; empty for a malformed value.
    pub fn codes(&self) -> &[String] {
        match self {
            Indices::List(codes) => codes,
            Indices::Malformed => &[],
        }
    }

    fn from_json(val: JsonValue) -> Self {
        let JsonValue::Array(items) = val else {
            return Indices::Malformed;
        };
        items
            .into_iter()
            .map(|item| match item {
                JsonValue::String(s) => Some(s),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map_or(Indices::Malformed, Indices::List)
    }
}

impl<'de> Deserialize<'de> for Indices {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Indices::from_json)
    }
}

// ---------------------------------------------------------------------------
// BankRecord – one row of `banks_data`
// ---------------------------------------------------------------------------

/// A single listed bank, exactly as supplied by the master data file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BankRecord {
    pub country: String,
    pub sector: String,
    pub cap_segment: CapSegment,
    /// Display key, unique within `country`.
    pub short_name: String,
    pub full_name_en: String,
    pub full_name_ta: String,
    pub isin: String,
    #[serde(default)]
    pub indices: Indices,
    pub beta_5yr: f64,
    #[serde(default)]
    pub market_cap_cr: Option<f64>,
    #[serde(default)]
    pub market_cap_bn_usd: Option<f64>,
}

impl BankRecord {
    /// Market cap in the unit used for this bank's country.
    pub fn market_cap(&self) -> Option<f64> {
        if self.country == CRORE_COUNTRY {
            self.market_cap_cr
        } else {
            self.market_cap_bn_usd
        }
    }
}

/// Top-level shape of `banks-master.json`.
#[derive(Debug, Deserialize)]
pub struct BanksFile {
    pub banks_data: Vec<BankRecord>,
}

// ---------------------------------------------------------------------------
// RecordStore – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All bank records, immutable after load.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<BankRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<BankRecord>) -> Self {
        RecordStore { records }
    }

    pub fn records(&self) -> &[BankRecord] {
        &self.records
    }

    /// Records belonging to one country, in source order.
    pub fn for_country<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a BankRecord> + 'a {
        self.records.iter().filter(move |r| r.country == country)
    }

    /// Sorted distinct countries.
    pub fn countries(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.country.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Sorted distinct sectors present for `country`.
    pub fn sectors_for(&self, country: &str) -> Vec<String> {
        let set: BTreeSet<&str> = self.for_country(country).map(|r| r.sector.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Short names of `country`'s banks in source order.
    pub fn short_names_for(&self, country: &str) -> Vec<String> {
        self.for_country(country).map(|r| r.short_name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
