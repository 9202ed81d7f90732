use std::sync::Arc;

use super::borough::BoroughGroups;
use super::error::QueryError;
use super::filter::{apply_utility_filter, UtilityFilter};
use super::model::{Dataset, Listing};
use super::stats::{describe_types, price_summary, PriceSummary, TypeBreakdown};

/// Everything the dashboard shows for one borough + filter selection.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub borough: String,
    pub filter: UtilityFilter,
    /// All listings of the borough, shared with the catalog.
    pub rows: Arc<[Listing]>,
    pub type_counts: TypeBreakdown,
    /// Summary over `rows`.
    pub unfiltered: Option<PriceSummary>,
    /// Summary over `filtered_rows()`; `None` when nothing matches.
    pub filtered: Option<PriceSummary>,
}

impl QueryResult {
    /// Listings of the borough that pass the utility filter.
    pub fn filtered_rows(&self) -> Vec<&Listing> {
        apply_utility_filter(self.rows.iter(), &self.filter)
    }

    /// Number of listings that pass the utility filter.
    pub fn filtered_count(&self) -> usize {
        self.filtered.map_or(0, |s| s.count)
    }
}

/// Owns the loaded dataset and its borough partition and answers queries
/// against them. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct RentalCatalog {
    dataset: Dataset,
    groups: BoroughGroups,
    min_listings: usize,
}

impl RentalCatalog {
    pub fn new(dataset: Dataset, min_listings: usize) -> Self {
        let groups = BoroughGroups::build(&dataset, min_listings);
        RentalCatalog {
            dataset,
            groups,
            min_listings,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Smallest borough size that was kept.
    pub fn min_listings(&self) -> usize {
        self.min_listings
    }

    /// Boroughs the user can choose from, alphabetical.
    pub fn list_boroughs(&self) -> Vec<String> {
        self.groups.names().map(str::to_string).collect()
    }

    /// Compute the statistics for `borough` under `filter`.
    pub fn query(&self, borough: &str, filter: &UtilityFilter) -> Result<QueryResult, QueryError> {
        let rows = Arc::clone(self.groups.rows(borough)?);
        let filtered_rows = apply_utility_filter(rows.iter(), filter);
        log::debug!(
            "Query {borough} with {:?}: {} of {} listings match",
            filter.iter().collect::<Vec<_>>(),
            filtered_rows.len(),
            rows.len()
        );
        let filtered = price_summary(filtered_rows);

        Ok(QueryResult {
            borough: borough.to_string(),
            filter: filter.clone(),
            type_counts: describe_types(rows.iter()),
            unfiltered: price_summary(rows.iter()),
            filtered,
            rows,
        })
    }
}
