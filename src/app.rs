use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, summary, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RentalDashboardApp {
    pub state: AppState,
}

impl RentalDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for RentalDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: selection ----
        egui::SidePanel::left("selection_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: statistics and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, &self.state));
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    ui.heading("Statistics of one-bedroom rentals in Montreal boroughs");
    ui.label(
        "Listings are grouped into boroughs by postal code. Pick a borough to see the \
         price distribution, the property types and how prices change with the \
         utilities included. All prices are in CAD.",
    );
    ui.separator();

    let Some(result) = &state.result else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select a borough on the left");
        });
        return;
    };

    summary::borough_header(ui, result, &state.type_colors);
    ui.add_space(16.0);

    ui.columns(2, |cols| {
        plot::price_histogram_plot(&mut cols[0], result);
        plot::area_price_scatter(&mut cols[1], result, &state.type_colors);
    });
    ui.add_space(16.0);

    summary::price_gauges(ui, result.unfiltered.as_ref());
    ui.add_space(16.0);

    ui.heading("Minimum, average and maximum with the selected utilities");
    summary::filtered_stats(ui, result);
    ui.add_space(8.0);

    egui::CollapsingHeader::new("Listings with the selected utilities")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            table::listings_table(ui, &result.filtered_rows());
        });
}
