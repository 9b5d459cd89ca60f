mod app;
mod color;
mod config;
mod data;
mod error;
mod export;
mod fonts;
mod labels;
mod pipeline;
mod projection;
mod state;
mod ui;

#[cfg(test)]
mod test_helpers;

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use eframe::egui;

use app::BankBetaApp;
use config::{Cli, Command};
use data::filter::FilterSelection;
use data::loader::{load_dashboard_data, DashboardData};
use labels::Language;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let data = load_dashboard_data(&cli.data_paths()).inspect_err(|e| {
        log::error!("Failed to load dashboard data: {e:#}");
    })?;

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(data, cli.font.as_deref()),
        Command::Export {
            country,
            language,
            output,
        } => export_country(&data, &country, language, output),
        Command::Describe { country, language } => describe_country(&data, &country, language),
    }
}

fn run_gui(data: DashboardData, font: Option<&Path>) -> Result<()> {
    let tamil_font = fonts::tamil_font(font)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bank Beta Dashboard",
        options,
        Box::new(move |cc| {
            if let Some(font) = tamil_font {
                cc.egui_ctx.set_fonts(fonts::with_tamil_fallback(font));
            }
            Ok(Box::new(BankBetaApp::new(data)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}

/// Default selection for a country that must exist in the data.
fn country_selection(data: &DashboardData, country: &str) -> Result<FilterSelection> {
    let countries = data.store.countries();
    ensure!(
        countries.iter().any(|c| c == country),
        "unknown country {country:?}, available: {countries:?}"
    );
    Ok(FilterSelection::defaults_for(&data.store, country))
}

fn export_country(
    data: &DashboardData,
    country: &str,
    language: Language,
    output: Option<PathBuf>,
) -> Result<()> {
    let selection = country_selection(data, country)?;
    let view = pipeline::render(data, language, &selection)?;
    let path = output.unwrap_or_else(|| PathBuf::from(export::file_name(country)));
    export::write_file(&view.table, &path)
        .with_context(|| format!("exporting {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

fn describe_country(data: &DashboardData, country: &str, language: Language) -> Result<()> {
    let selection = country_selection(data, country)?;
    let view = pipeline::render(data, language, &selection)?;
    let json = serde_json::json!({
        "title": view.title,
        "chart": view.chart,
        "table": view.table,
        "index_metadata": data.index_metadata,
        "export": {
            "file_name": export::file_name(country),
            "mime_type": export::MIME_TYPE,
        },
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
