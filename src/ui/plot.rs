use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::color::TypeColors;
use crate::data::query::QueryResult;
use crate::data::stats::price_histogram;

const PLOT_HEIGHT: f32 = 320.0;
const MIN_MARKER_RADIUS: f32 = 2.5;
const MAX_MARKER_RADIUS: f32 = 8.0;

// ---------------------------------------------------------------------------
// Price distribution
// ---------------------------------------------------------------------------

/// Histogram of the borough's prices.
pub fn price_histogram_plot(ui: &mut Ui, result: &QueryResult) {
    ui.strong(format!(
        "Distribution of the prices of 1-bedroom rentals in {}",
        result.borough
    ));

    let Some(hist) = price_histogram(&result.rows) else {
        ui.label("No listings to plot.");
        return;
    };

    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &n)| Bar::new(hist.bin_center(i), n as f64).width(hist.bin_width * 0.95))
        .collect();

    Plot::new("price_histogram")
        .height(PLOT_HEIGHT)
        .x_axis_label("Price (CAD)")
        .y_axis_label("Listings")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE).name("Listings"));
        });
}

// ---------------------------------------------------------------------------
// Area vs price
// ---------------------------------------------------------------------------

/// Scatter of area against price, one colour per property type and marker
/// size growing with price. Listings without an area are not plotted.
pub fn area_price_scatter(ui: &mut Ui, result: &QueryResult, colors: &TypeColors) {
    ui.strong(format!(
        "Price against property area in {}",
        result.borough
    ));

    let (lo, hi) = match &result.unfiltered {
        Some(s) => (s.min, s.max),
        None => {
            ui.label("No listings to plot.");
            return;
        }
    };

    Plot::new("area_price_scatter")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Area")
        .y_axis_label("Price (CAD)")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for listing in result.rows.iter() {
                let Some(area) = listing.area else { continue };
                let ty = listing.property_type.as_deref();
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[area, listing.price]]))
                        .radius(marker_radius(listing.price, lo, hi))
                        .color(colors.color_for(ty))
                        .name(ty.unwrap_or("Unknown")),
                );
            }
        });
}

/// Marker radius grows linearly with price between the borough's extremes.
fn marker_radius(price: f64, lo: f64, hi: f64) -> f32 {
    let t = if hi > lo { ((price - lo) / (hi - lo)) as f32 } else { 0.5 };
    MIN_MARKER_RADIUS + t * (MAX_MARKER_RADIUS - MIN_MARKER_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_radius_spans_min_to_max() {
        assert_eq!(marker_radius(1000.0, 1000.0, 3000.0), MIN_MARKER_RADIUS);
        assert_eq!(marker_radius(3000.0, 1000.0, 3000.0), MAX_MARKER_RADIUS);
        assert!(marker_radius(2000.0, 2000.0, 2000.0) > MIN_MARKER_RADIUS);
    }
}
