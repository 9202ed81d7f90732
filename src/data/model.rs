use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// CellValue – a single raw cell before it becomes part of a Listing
// ---------------------------------------------------------------------------

/// A dynamically-typed source cell mirroring the common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric view of the cell. Text is parsed, so `" 1200"` counts.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Text view of the cell, `None` for nulls.
    pub fn into_text(self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Text(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Column – the fixed projection applied to every source
// ---------------------------------------------------------------------------

/// The selected source columns, in source header spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    PropertyType,
    Area,
    Furnished,
    LeaseTerm,
    ParkingType,
    Heating,
    Water,
    Cable,
    Internet,
    Electricity,
    Neighborhood,
    Price,
}

impl Column {
    pub const ALL: [Column; 12] = [
        Column::PropertyType,
        Column::Area,
        Column::Furnished,
        Column::LeaseTerm,
        Column::ParkingType,
        Column::Heating,
        Column::Water,
        Column::Cable,
        Column::Internet,
        Column::Electricity,
        Column::Neighborhood,
        Column::Price,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::PropertyType => "Property_type",
            Column::Area => "Area",
            Column::Furnished => "Furnished",
            Column::LeaseTerm => "Lease_term",
            Column::ParkingType => "Parking_type",
            Column::Heating => "Heating",
            Column::Water => "Water",
            Column::Cable => "Cable",
            Column::Internet => "Internet",
            Column::Electricity => "Electricity",
            Column::Neighborhood => "Neighborhood",
            Column::Price => "Price",
        }
    }

    /// Position of this column inside [`Column::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// ---------------------------------------------------------------------------
// YesNo / Utility
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Exact, case-sensitive match on `"Yes"` / `"No"`.
    pub fn parse(s: &str) -> Option<YesNo> {
        match s {
            "Yes" => Some(YesNo::Yes),
            "No" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

/// The amenity columns a user can require to be "Yes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Utility {
    Furnished,
    Heating,
    Electricity,
    Cable,
    Internet,
    Water,
}

impl Utility {
    /// Display order of the filter widget.
    pub const ALL: [Utility; 6] = [
        Utility::Furnished,
        Utility::Heating,
        Utility::Electricity,
        Utility::Cable,
        Utility::Internet,
        Utility::Water,
    ];

    pub fn label(self) -> &'static str {
        self.column().header()
    }

    pub fn column(self) -> Column {
        match self {
            Utility::Furnished => Column::Furnished,
            Utility::Heating => Column::Heating,
            Utility::Electricity => Column::Electricity,
            Utility::Cable => Column::Cable,
            Utility::Internet => Column::Internet,
            Utility::Water => Column::Water,
        }
    }

    /// The listing's value for this utility.
    pub fn value_of(self, listing: &Listing) -> Option<YesNo> {
        match self {
            Utility::Furnished => listing.furnished,
            Utility::Heating => listing.heating,
            Utility::Electricity => listing.electricity,
            Utility::Cable => listing.cable,
            Utility::Internet => listing.internet,
            Utility::Water => listing.water,
        }
    }
}

// ---------------------------------------------------------------------------
// Listing – one row of the source table
// ---------------------------------------------------------------------------

/// A single rental listing, projected onto the selected columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub property_type: Option<String>,
    /// Floor area; many listings leave it blank.
    pub area: Option<f64>,
    pub furnished: Option<YesNo>,
    pub lease_term: Option<String>,
    pub parking_type: Option<String>,
    pub heating: Option<YesNo>,
    pub water: Option<YesNo>,
    pub cable: Option<YesNo>,
    pub internet: Option<YesNo>,
    pub electricity: Option<YesNo>,
    pub neighborhood: Option<String>,
    /// Monthly rent in CAD. Always present and finite.
    pub price: f64,
}

impl Listing {
    /// Render one column for tabular display. Nulls are blank.
    pub fn cell_text(&self, column: Column) -> String {
        fn text(v: &Option<String>) -> String {
            v.clone().unwrap_or_default()
        }
        fn yes_no(v: Option<YesNo>) -> String {
            v.map(|y| y.as_str().to_string()).unwrap_or_default()
        }
        match column {
            Column::PropertyType => text(&self.property_type),
            Column::Area => self.area.map(|a| format!("{a}")).unwrap_or_default(),
            Column::Furnished => yes_no(self.furnished),
            Column::LeaseTerm => text(&self.lease_term),
            Column::ParkingType => text(&self.parking_type),
            Column::Heating => yes_no(self.heating),
            Column::Water => yes_no(self.water),
            Column::Cable => yes_no(self.cable),
            Column::Internet => yes_no(self.internet),
            Column::Electricity => yes_no(self.electricity),
            Column::Neighborhood => text(&self.neighborhood),
            Column::Price => format!("{}", self.price),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All priced listings in source order. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    listings: Vec<Listing>,
    /// Source rows dropped because they had no price.
    skipped_without_price: usize,
}

impl Dataset {
    pub fn new(listings: Vec<Listing>, skipped_without_price: usize) -> Self {
        Dataset {
            listings,
            skipped_without_price,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn skipped_without_price(&self) -> usize {
        self.skipped_without_price
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_matches_position_in_all() {
        for (i, col) in Column::ALL.iter().enumerate() {
            assert_eq!(col.index(), i);
        }
    }

    #[test]
    fn yes_no_is_case_sensitive() {
        assert_eq!(YesNo::parse("Yes"), Some(YesNo::Yes));
        assert_eq!(YesNo::parse("No"), Some(YesNo::No));
        assert_eq!(YesNo::parse("yes"), None);
        assert_eq!(YesNo::parse(""), None);
    }

    #[test]
    fn cell_value_numeric_view() {
        assert_eq!(CellValue::Integer(1200).as_f64(), Some(1200.0));
        assert_eq!(CellValue::Text("1350.5".into()).as_f64(), Some(1350.5));
        assert_eq!(CellValue::Text(" 1350.5 ".into()).as_f64(), Some(1350.5));
        assert_eq!(CellValue::Text("Yes".into()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn null_cells_render_blank() {
        let listing = Listing {
            property_type: Some("Apartment".into()),
            area: None,
            furnished: Some(YesNo::No),
            lease_term: None,
            parking_type: None,
            heating: None,
            water: Some(YesNo::Yes),
            cable: None,
            internet: None,
            electricity: None,
            neighborhood: Some("Verdun".into()),
            price: 1450.0,
        };
        assert_eq!(listing.cell_text(Column::Area), "");
        assert_eq!(listing.cell_text(Column::Water), "Yes");
        assert_eq!(listing.cell_text(Column::Price), "1450");
    }
}
