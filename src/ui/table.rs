use eframe::egui::{self, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::{Column, Listing};

const ROW_HEIGHT: f32 = 18.0;

/// Tabular view of `rows`, one column per selected source column.
pub fn listings_table(ui: &mut Ui, rows: &[&Listing]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(TableColumn::auto().at_least(60.0), Column::ALL.len())
        .max_scroll_height(360.0)
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for col in Column::ALL {
                header.col(|ui| {
                    ui.strong(col.header());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let listing = &rows[row.index()];
                for col in Column::ALL {
                    row.col(|ui| {
                        ui.label(listing.cell_text(col));
                    });
                }
            });
        });
}
