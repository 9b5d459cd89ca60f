use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::projection::table::{Cell, Table, KEY_HEADER};

/// Draw the bank table; the key column comes first.
pub fn bank_table(ui: &mut Ui, table: &Table) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .columns(Column::auto().at_least(70.0), table.headers.len() + 1)
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong(KEY_HEADER);
            });
            for h in &table.headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for row in &table.rows {
                body.row(20.0, |mut cols| {
                    cols.col(|ui| {
                        ui.label(&row.key);
                    });
                    for cell in row.cells() {
                        cols.col(|ui| {
                            ui.label(cell_text(cell));
                        });
                    }
                });
            }
        });
}

fn cell_text(cell: Cell<'_>) -> String {
    match cell {
        Cell::Text(s) => s.to_string(),
        Cell::Number(n) => format!("{n:.2}"),
        Cell::Empty => String::new(),
    }
}
