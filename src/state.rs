use crate::color::TypeColors;
use crate::data::filter::UtilityFilter;
use crate::data::model::Utility;
use crate::data::query::{QueryResult, RentalCatalog};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded listings and their borough partition.
    pub catalog: RentalCatalog,

    /// Boroughs offered in the selector (cached).
    pub boroughs: Vec<String>,

    /// Currently selected borough.
    pub selected_borough: Option<String>,

    /// Utilities that must be "Yes".
    pub filter: UtilityFilter,

    /// Result for the current selection (cached).
    pub result: Option<QueryResult>,

    /// Colour per property type, shared by every chart.
    pub type_colors: TypeColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start on the first borough with the configured filter.
    pub fn new(catalog: RentalCatalog, filter: UtilityFilter) -> Self {
        let boroughs = catalog.list_boroughs();
        let type_colors = TypeColors::new(
            catalog
                .dataset()
                .listings()
                .iter()
                .filter_map(|l| l.property_type.as_deref()),
        );

        let mut state = Self {
            catalog,
            selected_borough: boroughs.first().cloned(),
            boroughs,
            filter,
            result: None,
            type_colors,
            status_message: None,
        };
        if state.boroughs.is_empty() {
            state.status_message = Some("No borough has enough listings to summarise.".into());
        }
        state.requery();
        state
    }

    /// Recompute `result` after a selection change.
    pub fn requery(&mut self) {
        let Some(borough) = &self.selected_borough else {
            self.result = None;
            return;
        };
        match self.catalog.query(borough, &self.filter) {
            Ok(result) => {
                self.result = Some(result);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("{e}");
                self.result = None;
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn select_borough(&mut self, name: &str) {
        if self.selected_borough.as_deref() == Some(name) {
            return;
        }
        self.selected_borough = Some(name.to_string());
        self.requery();
    }

    /// Toggle a single utility in the filter.
    pub fn toggle_utility(&mut self, utility: Utility) {
        self.filter.toggle(utility);
        self.requery();
    }

    /// Clear the utility filter.
    pub fn clear_filter(&mut self) {
        self.filter = UtilityFilter::new();
        self.requery();
    }
}
