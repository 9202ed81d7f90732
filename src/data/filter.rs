use std::collections::BTreeSet;

use super::model::{Listing, Utility, YesNo};

// ---------------------------------------------------------------------------
// Utility filter: which amenities must be "Yes"
// ---------------------------------------------------------------------------

/// Conjunctive amenity predicate. Empty means "no filter" (keep everything).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtilityFilter {
    required: BTreeSet<Utility>,
}

impl UtilityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    pub fn contains(&self, utility: Utility) -> bool {
        self.required.contains(&utility)
    }

    /// Flip a single utility on or off.
    pub fn toggle(&mut self, utility: Utility) {
        if !self.required.remove(&utility) {
            self.required.insert(utility);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Utility> + '_ {
        self.required.iter().copied()
    }

    /// A listing passes when every required utility is exactly `Yes`.
    /// Null and `No` both fail.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.required
            .iter()
            .all(|u| u.value_of(listing) == Some(YesNo::Yes))
    }
}

impl FromIterator<Utility> for UtilityFilter {
    fn from_iter<I: IntoIterator<Item = Utility>>(iter: I) -> Self {
        UtilityFilter {
            required: iter.into_iter().collect(),
        }
    }
}

/// Return the listings that pass `filter`, in their input order.
pub fn apply_utility_filter<'a>(
    rows: impl IntoIterator<Item = &'a Listing>,
    filter: &UtilityFilter,
) -> Vec<&'a Listing> {
    rows.into_iter().filter(|l| filter.matches(l)).collect()
}
