//! Browse view-state for frontends.
//!
//! A single serializable struct plus pure update functions, instead of
//! scattered mutable UI globals. Every transition consumes the old
//! state and returns the new one; nothing here performs I/O.

use serde::{Deserialize, Serialize};

use models_listings::api::{AdminSessionResponse, ListingQueryParams};
use models_listings::service::Listing;


/// Sentinel the form uses for dropdowns with no constraint selected.
const ALL: &str = "all";

/// Raw filter form values, exactly as the inputs hold them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterForm {
    pub location: String,
    pub budget: String,
    pub property_type: String,
    pub bhk: String,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            location: String::new(),
            budget: ALL.to_string(),
            property_type: ALL.to_string(),
            bhk: ALL.to_string(),
        }
    }
}

fn form_value(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == ALL {
        return None;
    }
    Some(value.to_string())
}

impl FilterForm {
    /// Build the search query, omitting empty and `all` values the way
    /// the browse form does.
    pub fn to_query(&self) -> ListingQueryParams {
        ListingQueryParams {
            location: form_value(&self.location),
            budget: form_value(&self.budget),
            property_type: form_value(&self.property_type),
            bhk: form_value(&self.bhk),
        }
    }
}

/// Everything the browse screen holds between renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseState {
    /// The full unfiltered listing set from the initial load.
    pub listings: Vec<Listing>,
    /// The set currently shown; a subset of `listings` after a search.
    pub filtered: Vec<Listing>,
    /// A request is in flight.
    pub loading: bool,
    /// The listing open in the details view.
    pub selected: Option<Listing>,
    /// Present while an admin session is live.
    pub admin_session: Option<AdminSessionResponse>,
    pub form: FilterForm,
}

impl BrowseState {
    /// A fetch has started.
    pub fn load_started(mut self) -> Self {
        self.loading = true;
        self
    }

    /// The initial (unfiltered) fetch finished: both lists are
    /// replaced.
    pub fn listings_loaded(mut self, listings: Vec<Listing>) -> Self {
        self.listings = listings.clone();
        self.filtered = listings;
        self.loading = false;
        self
    }

    /// A search round-trip finished: only the filtered list is
    /// replaced, the full list is untouched.
    ///
    /// Responses are applied in arrival order; a slow response for an
    /// older search can overwrite the result of a newer one. Known
    /// race, carried over from the original flow.
    pub fn search_results(mut self, results: Vec<Listing>) -> Self {
        self.filtered = results;
        self.loading = false;
        self
    }

    /// Reset reverts to the full list and clears the form without a
    /// network round-trip.
    pub fn reset_filters(mut self) -> Self {
        self.filtered = self.listings.clone();
        self.form = FilterForm::default();
        self
    }

    pub fn listing_selected(mut self, listing: Listing) -> Self {
        self.selected = Some(listing);
        self
    }

    pub fn details_closed(mut self) -> Self {
        self.selected = None;
        self
    }

    pub fn admin_signed_in(mut self, session: AdminSessionResponse) -> Self {
        self.admin_session = Some(session);
        self
    }

    pub fn admin_signed_out(mut self) -> Self {
        self.admin_session = None;
        self
    }
}
