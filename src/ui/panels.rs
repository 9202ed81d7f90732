use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Utility;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left panel: borough selector and utility filter.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Borough");
    ui.separator();

    if state.boroughs.is_empty() {
        ui.label("No borough has enough listings.");
        return;
    }

    // Clone what we need so we can mutate state inside the closures.
    let boroughs = state.boroughs.clone();
    let current = state.selected_borough.clone().unwrap_or_default();

    egui::ComboBox::from_id_salt("borough")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                for name in &boroughs {
                    if ui.selectable_label(current == *name, name).clicked() {
                        state.select_borough(name);
                    }
                }
            });
        });

    ui.add_space(12.0);
    ui.heading("Filter by");
    ui.label("Keep listings where every ticked utility is included.");
    ui.separator();

    for utility in Utility::ALL {
        let mut checked = state.filter.contains(utility);
        if ui.checkbox(&mut checked, utility.label()).changed() {
            state.toggle_utility(utility);
        }
    }

    if ui.small_button("Clear").clicked() {
        state.clear_filter();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        let ds = state.catalog.dataset();
        ui.label(format!(
            "{} priced listings, {} boroughs with {}+ listings",
            ds.len(),
            state.boroughs.len(),
            state.catalog.min_listings()
        ));

        if ds.skipped_without_price() > 0 {
            ui.separator();
            ui.label(format!("{} listings without price ignored", ds.skipped_without_price()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
