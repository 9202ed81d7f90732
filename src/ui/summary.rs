use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::TypeColors;
use crate::data::query::QueryResult;
use crate::data::stats::PriceSummary;

const GAUGE_COLOR: Color32 = Color32::from_rgb(0, 0, 139);

pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

/// Borough heading, listing count and property-type breakdown.
pub fn borough_header(ui: &mut Ui, result: &QueryResult, colors: &TypeColors) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(result.borough.to_uppercase()).strong());
    });
    ui.add_space(8.0);
    ui.label(
        RichText::new(format!(
            "There are {} listings in this borough. These include:",
            result.rows.len()
        ))
        .strong(),
    );
    for (ty, n) in &result.type_counts {
        ui.label(RichText::new(format!("{ty} ~ {n}")).color(colors.color_for(Some(ty.as_str()))));
    }
}

/// Gauges for min, mean, median and max over the borough.
pub fn price_gauges(ui: &mut Ui, summary: Option<&PriceSummary>) {
    ui.heading("Prices summary");
    let Some(s) = summary else {
        no_data(ui);
        return;
    };

    let (lo, hi) = s.gauge_range();
    let gauges = [
        ("Minimum price", s.min),
        ("Average price", s.mean),
        ("Median price", s.median),
        ("Maximum price", s.max),
    ];
    ui.columns(gauges.len(), |cols| {
        for (col, (title, value)) in cols.iter_mut().zip(gauges) {
            gauge(col, title, value, lo, hi);
        }
    });
}

fn gauge(ui: &mut Ui, title: &str, value: f64, lo: f64, hi: f64) {
    let fraction = ((value - lo) / (hi - lo)).clamp(0.0, 1.0) as f32;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(title);
        ui.label(RichText::new(format_price(value)).size(22.0).strong());
        ui.add(
            egui::ProgressBar::new(fraction)
                .fill(GAUGE_COLOR)
                .desired_width(ui.available_width() * 0.9),
        );
        ui.small(format!("{} – {}", format_price(lo), format_price(hi)));
    });
}

/// Listing count and min / mean / max for the utility-filtered subset.
pub fn filtered_stats(ui: &mut Ui, result: &QueryResult) {
    ui.label(format!("{} listings found", result.filtered_count()));
    let Some(s) = &result.filtered else {
        no_data(ui);
        return;
    };

    ui.label("Statistics are:");
    let numbers = [
        ("Minimum price", s.min),
        ("Average price", s.mean),
        ("Maximum price", s.max),
    ];
    ui.columns(numbers.len(), |cols| {
        for (col, (title, value)) in cols.iter_mut().zip(numbers) {
            col.vertical_centered(|ui: &mut Ui| {
                ui.label(title);
                ui.label(RichText::new(format_price(value)).size(22.0).strong());
            });
        }
    });
}

fn no_data(ui: &mut Ui) {
    ui.label(RichText::new("No listings match this selection.").italics().color(Color32::YELLOW));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_render_with_cents() {
        assert_eq!(format_price(1814.2857), "$1814.29");
        assert_eq!(format_price(1500.0), "$1500.00");
    }
}
