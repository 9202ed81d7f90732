//! Proptest strategies for generated listings.

use proptest::prelude::*;

use super::filter::UtilityFilter;
use super::model::{Listing, Utility, YesNo};

/// A handful of names so that generated datasets land on both sides of
/// the borough threshold. `"Verdun "` differs from `"Verdun"` only by
/// trailing whitespace.
pub const NEIGHBORHOODS: &[&str] = &["Verdun", "Verdun ", "Outremont", "Lachine", "Anjou"];

const PROPERTY_TYPES: &[&str] = &["Apartment", "Condo", "Loft", "Studio"];

fn yes_no() -> impl Strategy<Value = Option<YesNo>> {
    prop_oneof![Just(None), Just(Some(YesNo::Yes)), Just(Some(YesNo::No))]
}

pub fn listing() -> impl Strategy<Value = Listing> {
    (
        prop::option::of(prop::sample::select(PROPERTY_TYPES)),
        prop::option::of(150.0f64..2500.0),
        prop::array::uniform6(yes_no()),
        prop::option::of(prop::sample::select(NEIGHBORHOODS)),
        100.0f64..10_000.0,
    )
        .prop_map(|(ty, area, [furnished, heating, water, cable, internet, electricity], hood, price)| {
            Listing {
                property_type: ty.map(str::to_string),
                area,
                furnished,
                lease_term: None,
                parking_type: None,
                heating,
                water,
                cable,
                internet,
                electricity,
                neighborhood: hood.map(str::to_string),
                price,
            }
        })
}

pub fn listings(max: usize) -> impl Strategy<Value = Vec<Listing>> {
    prop::collection::vec(listing(), 0..max)
}

pub fn utility_filter() -> impl Strategy<Value = UtilityFilter> {
    prop::collection::btree_set(prop::sample::select(Utility::ALL.to_vec()), 0..=3)
        .prop_map(|set| set.into_iter().collect())
}
