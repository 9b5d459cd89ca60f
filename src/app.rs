use eframe::egui;

use crate::data::loader::DashboardData;
use crate::pipeline;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BankBetaApp {
    data: DashboardData,
    state: AppState,
}

impl BankBetaApp {
    pub fn new(data: DashboardData) -> Self {
        let state = AppState::new(&data.store);
        Self { data, state }
    }
}

impl eframe::App for BankBetaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &self.data);
        });

        // ---- Left side panel: language, country, filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.data);
            });

        // ---- Central panel: chart, table, export ----
        let view = pipeline::render(&self.data, self.state.language, &self.state.selection);
        egui::CentralPanel::default().show(ctx, |ui| match &view {
            Ok(view) => panels::central_panel(ui, &mut self.state, &self.data, view),
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Cannot display data: {e}"));
            }
        });
    }
}
