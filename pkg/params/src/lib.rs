//! URL search-parameter state of the service-accounts list view.
//!
//! The list's page, page size, sort and filters live in the URL query so the
//! view is linkable. UI events never edit the URL directly: they produce an
//! updater, a pure `&SearchParams -> SearchParams` transform, which the
//! navigation layer applies.

pub mod list_query;
pub mod search_params;
pub mod updaters;

pub use list_query::{list_query_from_params, list_query_to_params};
pub use search_params::SearchParams;
pub use updaters::{
    clear_filters_params_updater, filters_params_updater, pagination_params_updater,
    sort_params_updater,
};

/// Query parameter names owned by the list view.
pub mod keys {
    pub const PAGE: &str = "page";
    pub const PER_PAGE: &str = "perPage";
    pub const ORDER_BY: &str = "orderBy";
    pub const SORT_ORDER: &str = "sortOrder";
}
