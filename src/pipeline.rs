use crate::data::filter::{apply, derive_view, FilterSelection};
use crate::data::loader::DashboardData;
use crate::data::model::CRORE_COUNTRY;
use crate::error::ProjectionError;
use crate::labels::Language;
use crate::projection::chart::{self, ChartSpec};
use crate::projection::table::{self, Table};

/// Everything one render cycle puts on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub chart: ChartSpec,
    pub table: Table,
}

pub fn country_flag(country: &str) -> &'static str {
    if country == CRORE_COUNTRY {
        "🇮🇳"
    } else {
        "🇺🇸"
    }
}

/// Run one filter → project pass over the loaded data.
pub fn render(
    data: &DashboardData,
    language: Language,
    selection: &FilterSelection,
) -> Result<DashboardView, ProjectionError> {
    let filtered = apply(data.store.records(), selection);
    let rows = derive_view(&filtered, &data.labels, language);

    let chart = chart::project(&rows, &data.labels, language);
    let table = table::project(&rows, &data.labels, language)?;
    let title = format!(
        "{} {}",
        data.labels.title_for(language),
        country_flag(&selection.country)
    );

    Ok(DashboardView {
        title,
        chart,
        table,
    })
}
