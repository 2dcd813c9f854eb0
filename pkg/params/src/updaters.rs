//! Pure transforms of the list view's URL state.
//!
//! Every updater that changes what is listed (sort, filters, page size) sends
//! the user back to page 1; parameters it does not own are left untouched.

use pkg_types::page::PageWindow;
use pkg_types::query::{FilterKey, Filters, SortByField, SortOrder};
use tracing::debug;

use crate::keys::{ORDER_BY, PAGE, PER_PAGE, SORT_ORDER};
use crate::list_query::list_query_from_params;
use crate::search_params::SearchParams;

/// Updater for a click on a sortable column header.
///
/// Columns without a sort field (client ID, owner) yield an identity
/// transform, so `page` is not reset either.
pub fn sort_params_updater(
    column_index: usize,
    direction: SortOrder,
) -> impl Fn(&SearchParams) -> SearchParams {
    let field = SortByField::from_column_index(column_index);
    if field.is_none() {
        debug!("Column {} is not sortable", column_index);
    }
    move |prev: &SearchParams| {
        let Some(field) = field else {
            return prev.clone();
        };
        let mut params = prev.clone();
        params.set(ORDER_BY, field.as_str());
        params.set(SORT_ORDER, direction.as_str());
        params.set(PAGE, "1");
        params
    }
}

/// Updater for a change to the filter inputs: non-empty values are set,
/// empty ones removed.
pub fn filters_params_updater(filters: Filters) -> impl Fn(&SearchParams) -> SearchParams {
    move |prev: &SearchParams| {
        let mut params = prev.clone();
        for key in FilterKey::ALL {
            match filters.get(key) {
                Some(value) => params.set(key.as_str(), value),
                None => params.delete(key.as_str()),
            }
        }
        params.set(PAGE, "1");
        params
    }
}

/// Updater for the "clear all filters" action.
pub fn clear_filters_params_updater() -> impl Fn(&SearchParams) -> SearchParams {
    |prev: &SearchParams| {
        let mut params = prev.clone();
        for key in FilterKey::ALL {
            params.delete(key.as_str());
        }
        params.set(PAGE, "1");
        params
    }
}

/// Updater for the pager. Choosing a page size other than the one the list
/// currently shows (the default when `perPage` is absent) starts over at
/// page 1; otherwise the requested page is kept.
pub fn pagination_params_updater(
    page: u64,
    per_page: u64,
) -> impl Fn(&SearchParams) -> SearchParams {
    let requested = PageWindow::new(page, per_page);
    let per_page = requested.per_page();
    move |prev: &SearchParams| {
        let mut params = prev.clone();
        let current = list_query_from_params(prev).window.per_page();
        let page = if current != per_page { 1 } else { requested.page() };
        params.set(PAGE, page.to_string());
        params.set(PER_PAGE, per_page.to_string());
        params
    }
}
