use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::filter::FilteredRow;
use crate::labels::{LabelConfig, LabelKey, Language};

/// Beta of the market itself; drawn as the reference line.
pub const MARKET_BETA: f64 = 1.0;
pub const CHART_HEIGHT: f32 = 600.0;

// ---------------------------------------------------------------------------
// ChartSpec – a description of the scatter plot, not a rendering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPosition {
    TopCenter,
    TopRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    Solid,
    Dash,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// 5-year beta.
    pub x: f64,
    /// Market cap in the country's unit.
    pub y: f64,
    /// Text drawn next to the marker (`short_name`).
    pub text: String,
    /// Legend/colour group (translated sector).
    pub group: String,
    /// Hover title (localized full name).
    pub hover_name: String,
    pub country: String,
    pub isin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub x: f64,
    pub dash: LineDash,
    /// CSS colour name.
    pub color: String,
    pub annotation: String,
    pub annotation_position: TextPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
    pub text_position: TextPosition,
    pub reference_line: ReferenceLine,
    pub height: f32,
}

impl ChartSpec {
    /// Points grouped by colour group, groups in sorted order.
    pub fn groups(&self) -> BTreeMap<&str, Vec<&ChartPoint>> {
        let mut groups: BTreeMap<&str, Vec<&ChartPoint>> = BTreeMap::new();
        for p in &self.points {
            groups.entry(p.group.as_str()).or_default().push(p);
        }
        groups
    }

    /// The point nearest to `(x, y)` within `group`, used for hover labels.
    pub fn nearest_in_group(&self, group: &str, x: f64, y: f64) -> Option<&ChartPoint> {
        self.points
            .iter()
            .filter(|p| p.group == group)
            .min_by(|a, b| {
                let da = (a.x - x).powi(2) + (a.y - y).powi(2);
                let db = (b.x - x).powi(2) + (b.y - y).powi(2);
                da.total_cmp(&db)
            })
    }
}

/// Map filtered rows onto a beta vs. market cap scatter.
///
/// Rows without a market cap for their country are left off the chart.
pub fn project(rows: &[FilteredRow<'_>], labels: &LabelConfig, language: Language) -> ChartSpec {
    let points = rows
        .iter()
        .filter_map(|row| {
            let y = row.record.market_cap()?;
            Some(ChartPoint {
                x: row.record.beta_5yr,
                y,
                text: row.record.short_name.clone(),
                group: row.sector_translated.to_string(),
                hover_name: row.display_name.to_string(),
                country: row.record.country.clone(),
                isin: row.record.isin.clone(),
            })
        })
        .collect();

    ChartSpec {
        title: labels.text(language, LabelKey::GraphTitle).to_string(),
        x_label: labels.text(language, LabelKey::BetaLabel).to_string(),
        y_label: labels.text(language, LabelKey::MarketCapLabel).to_string(),
        points,
        text_position: TextPosition::TopCenter,
        reference_line: ReferenceLine {
            x: MARKET_BETA,
            dash: LineDash::Dash,
            color: "red".to_string(),
            annotation: "Beta = 1".to_string(),
            annotation_position: TextPosition::TopRight,
        },
        height: CHART_HEIGHT,
    }
}
