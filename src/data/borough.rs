use std::collections::BTreeMap;
use std::sync::Arc;

use super::error::QueryError;
use super::model::{Dataset, Listing};

/// Boroughs with fewer listings than this are not offered.
pub const MIN_BOROUGH_LISTINGS: usize = 7;

/// Listings partitioned by neighborhood, keeping only boroughs with enough
/// listings to be worth summarising. Built once, never mutated; queries
/// share the row slices instead of copying them.
#[derive(Debug, Clone, Default)]
pub struct BoroughGroups {
    groups: BTreeMap<String, Arc<[Listing]>>,
}

impl BoroughGroups {
    /// Partition `dataset` by exact neighborhood match and drop groups with
    /// fewer than `min_listings` rows. Listings with no neighborhood never
    /// form a borough.
    pub fn build(dataset: &Dataset, min_listings: usize) -> Self {
        let mut partition: BTreeMap<&str, Vec<&Listing>> = BTreeMap::new();
        for listing in dataset.listings() {
            if let Some(name) = listing.neighborhood.as_deref() {
                partition.entry(name).or_default().push(listing);
            }
        }

        let total = partition.len();
        let groups: BTreeMap<String, Arc<[Listing]>> = partition
            .into_iter()
            .filter(|(_, rows)| rows.len() >= min_listings)
            .map(|(name, rows)| (name.to_string(), rows.into_iter().cloned().collect()))
            .collect();
        log::info!(
            "Kept {} of {} boroughs with at least {min_listings} listings",
            groups.len(),
            total
        );

        BoroughGroups { groups }
    }

    /// Retained borough names, alphabetical.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Listings of one borough, in dataset order.
    pub fn rows(&self, name: &str) -> Result<&Arc<[Listing]>, QueryError> {
        self.groups
            .get(name)
            .ok_or_else(|| QueryError::UnknownBorough(name.to_string()))
    }
}
