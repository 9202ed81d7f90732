//! Descriptive statistics over a subset of listings.

use std::collections::HashMap;

use super::model::Listing;

/// Lower padding of the summary gauge axis, in CAD.
const GAUGE_PAD_BELOW: f64 = 200.0;
/// Upper padding of the summary gauge axis, in CAD.
const GAUGE_PAD_ABOVE: f64 = 100.0;

/// Listing count per property type, most common first.
pub type TypeBreakdown = Vec<(String, usize)>;

/// Count listings per distinct `property_type`.
///
/// Listings without a type are left out. Ties are ordered by name so the
/// result is stable.
pub fn describe_types<'a>(rows: impl IntoIterator<Item = &'a Listing>) -> TypeBreakdown {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for ty in rows.into_iter().filter_map(|l| l.property_type.as_deref()) {
        *counts.entry(ty).or_default() += 1;
    }

    let mut breakdown: TypeBreakdown = counts
        .into_iter()
        .map(|(ty, n)| (ty.to_string(), n))
        .collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    breakdown
}

// ---------------------------------------------------------------------------
// Price summary
// ---------------------------------------------------------------------------

/// min / mean / median / max of the price column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    pub count: usize,
    pub min: f64,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
}

impl PriceSummary {
    /// Axis range for the summary gauges: a little room below the minimum
    /// and above the maximum.
    pub fn gauge_range(&self) -> (f64, f64) {
        (self.min - GAUGE_PAD_BELOW, self.max + GAUGE_PAD_ABOVE)
    }
}

/// Summarise the prices of `rows`.
///
/// Returns `None` for an empty subset; that is the "no data" result and
/// must not be shown as zero.
pub fn price_summary<'a>(rows: impl IntoIterator<Item = &'a Listing>) -> Option<PriceSummary> {
    let mut prices: Vec<f64> = rows.into_iter().map(|l| l.price).collect();
    if prices.is_empty() {
        return None;
    }
    prices.sort_by(f64::total_cmp);

    let count = prices.len();
    let mean = prices.iter().sum::<f64>() / count as f64;

    Some(PriceSummary {
        count,
        min: prices[0],
        mean,
        median: percentile(&prices, 0.5)?,
        max: prices[count - 1],
    })
}

/// Quantile `q` in `[0, 1]` of already-sorted values, interpolating
/// linearly between the two nearest order statistics.
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width price bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.bin_width
    }
}

/// Bin the prices of `rows` using Sturges' rule for the bin count.
/// The maximum lands in the last bin.
pub fn price_histogram(rows: &[Listing]) -> Option<Histogram> {
    let summary = price_summary(rows)?;
    let range = summary.max - summary.min;

    if range <= 0.0 {
        return Some(Histogram {
            start: summary.min - 0.5,
            bin_width: 1.0,
            counts: vec![summary.count],
        });
    }

    let bins = (summary.count as f64).log2().ceil() as usize + 1;
    let bin_width = range / bins as f64;
    let mut counts = vec![0; bins];
    for l in rows {
        let idx = ((l.price - summary.min) / bin_width) as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    Some(Histogram {
        start: summary.min,
        bin_width,
        counts,
    })
}
