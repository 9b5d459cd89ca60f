use std::collections::BTreeSet;

use serde::Serialize;

use crate::data::filter::FilteredRow;
use crate::data::model::CapSegment;
use crate::error::ProjectionError;
use crate::labels::{LabelConfig, LabelKey, Language};

/// Header of the key column once it is written out as a plain column.
pub const KEY_HEADER: &str = "short_name";

/// Value columns, in display order.
pub const COLUMNS: [LabelKey; 6] = [
    LabelKey::FullNameLabel,
    LabelKey::IsinLabel,
    LabelKey::IndicesLabel,
    LabelKey::MarketCapLabel,
    LabelKey::BetaLabel,
    LabelKey::CapSegmentLabel,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Row key (`short_name`).
    pub key: String,
    pub full_name: String,
    pub isin: String,
    pub indices: String,
    pub market_cap: Option<f64>,
    pub beta: f64,
    pub cap_segment: CapSegment,
}

/// One cell, typed so exporters can keep numbers numeric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Empty,
}

impl TableRow {
    /// Value cells in [`COLUMNS`] order (key excluded).
    pub fn cells(&self) -> [Cell<'_>; 6] {
        [
            Cell::Text(&self.full_name),
            Cell::Text(&self.isin),
            Cell::Text(&self.indices),
            self.market_cap.map_or(Cell::Empty, Cell::Number),
            Cell::Number(self.beta),
            Cell::Text(self.cap_segment.as_str()),
        ]
    }
}

/// Display-ready table keyed by `short_name` with localized headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reshape filtered rows into the display table.
///
/// A repeated `short_name` is a data-quality error; rows are never merged.
pub fn project(
    rows: &[FilteredRow<'_>],
    labels: &LabelConfig,
    language: Language,
) -> Result<Table, ProjectionError> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let rec = row.record;
        if !seen.insert(rec.short_name.as_str()) {
            log::error!("short_name {:?} appears twice in the filtered view", rec.short_name);
            return Err(ProjectionError::DuplicateKey(rec.short_name.clone()));
        }
        out.push(TableRow {
            key: rec.short_name.clone(),
            full_name: row.display_name.to_string(),
            isin: rec.isin.clone(),
            indices: row.indices_translated.clone(),
            market_cap: rec.market_cap(),
            beta: rec.beta_5yr,
            cap_segment: rec.cap_segment,
        });
    }

    let headers = COLUMNS
        .iter()
        .map(|&k| labels.text(language, k).to_string())
        .collect();

    Ok(Table { headers, rows: out })
}
