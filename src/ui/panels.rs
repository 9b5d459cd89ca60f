use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader::DashboardData;
use crate::data::model::CapSegment;
use crate::export;
use crate::labels::{LabelKey, Language};
use crate::pipeline::DashboardView;
use crate::state::{AppState, FilterColumn};
use crate::ui::{plot, table};

/// What a multi-select section asks the state to do.
enum FilterAction<T> {
    Toggle(T),
    SelectAll,
    Clear,
}

// ---------------------------------------------------------------------------
// Left side panel – language, country and filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, data: &DashboardData) {
    let store = &data.store;
    let lang = data.labels.for_language(state.language);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("🌐 Choose Language / மொழியைத் தேர்ந்தெடுக்கவும்");
            for language in Language::ALL {
                ui.radio_value(&mut state.language, language, language.as_str());
            }
            ui.separator();

            let mut chosen_country = None;
            egui::ComboBox::from_label("🌏 Select Country")
                .selected_text(&state.selection.country)
                .show_ui(ui, |ui: &mut Ui| {
                    for country in store.countries() {
                        let selected = state.selection.country == country;
                        if ui.selectable_label(selected, &country).clicked() {
                            chosen_country = Some(country);
                        }
                    }
                });
            if let Some(country) = chosen_country {
                state.set_country(store, &country);
            }
            ui.separator();

            let country = state.selection.country.clone();

            let sectors: Vec<(String, String)> = store
                .sectors_for(&country)
                .into_iter()
                .map(|code| {
                    let label = data.labels.resolve_sector(state.language, &code).to_string();
                    (code, label)
                })
                .collect();
            match filter_section(ui, lang.text(LabelKey::FilterBySector), &sectors, |s| {
                state.selection.sectors.contains(s)
            }) {
                Some(FilterAction::Toggle(s)) => state.toggle_sector(&s),
                Some(FilterAction::SelectAll) => state.select_all(store, FilterColumn::Sector),
                Some(FilterAction::Clear) => state.select_none(FilterColumn::Sector),
                None => {}
            }

            let caps: Vec<(CapSegment, String)> = CapSegment::ALL
                .into_iter()
                .map(|c| (c, c.as_str().to_string()))
                .collect();
            match filter_section(ui, "🏷️ Select Cap Segment", &caps, |c| {
                state.selection.cap_segments.contains(c)
            }) {
                Some(FilterAction::Toggle(c)) => state.toggle_cap_segment(c),
                Some(FilterAction::SelectAll) => state.select_all(store, FilterColumn::CapSegment),
                Some(FilterAction::Clear) => state.select_none(FilterColumn::CapSegment),
                None => {}
            }

            let banks: Vec<(String, String)> = store
                .short_names_for(&country)
                .into_iter()
                .map(|n| (n.clone(), n))
                .collect();
            match filter_section(ui, "🏦 Select Banks", &banks, |b| {
                state.selection.short_names.contains(b)
            }) {
                Some(FilterAction::Toggle(b)) => state.toggle_bank(&b),
                Some(FilterAction::SelectAll) => state.select_all(store, FilterColumn::Bank),
                Some(FilterAction::Clear) => state.select_none(FilterColumn::Bank),
                None => {}
            }
        });
}

/// Collapsible checkbox list with All / None buttons and a selected/total count.
fn filter_section<T: Clone>(
    ui: &mut Ui,
    title: &str,
    options: &[(T, String)],
    is_selected: impl Fn(&T) -> bool,
) -> Option<FilterAction<T>> {
    let n_selected = options.iter().filter(|(v, _)| is_selected(v)).count();
    let header_text = format!("{title}  ({n_selected}/{})", options.len());
    let mut action = None;

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    action = Some(FilterAction::SelectAll);
                }
                if ui.small_button("None").clicked() {
                    action = Some(FilterAction::Clear);
                }
            });
            for (value, label) in options {
                let mut checked = is_selected(value);
                if ui.checkbox(&mut checked, label).changed() {
                    action = Some(FilterAction::Toggle(value.clone()));
                }
            }
        });
    action
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState, data: &DashboardData) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} banks loaded across {} countries",
            data.store.len(),
            data.store.countries().len()
        ));
        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – title, chart, table, export
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &mut AppState, data: &DashboardData, view: &DashboardView) {
    let lang = data.labels.for_language(state.language);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(&view.title);
            ui.add_space(6.0);

            ui.label(RichText::new(&view.chart.title).strong().size(18.0));
            plot::beta_scatter(ui, &view.chart);
            ui.add_space(8.0);

            ui.label(RichText::new(lang.text(LabelKey::TableTitle)).strong().size(18.0));
            if view.table.is_empty() {
                ui.weak("No banks match the current filters.");
            }
            table::bank_table(ui, &view.table);
            ui.add_space(8.0);

            if ui.button(lang.text(LabelKey::ExportExcel)).clicked() {
                save_export_dialog(state, view);
            }
        });
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

fn save_export_dialog(state: &mut AppState, view: &DashboardView) {
    let file = rfd::FileDialog::new()
        .set_title("Export bank table")
        .set_file_name(export::file_name(&state.selection.country))
        .add_filter("Excel workbook", &["xlsx"])
        .save_file();

    if let Some(path) = file {
        match export::write_file(&view.table, &path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export {}: {e}", path.display());
                state.status_message = Some(format!("Export failed: {e}"));
            }
        }
    }
}
