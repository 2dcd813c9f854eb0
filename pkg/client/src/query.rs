use pkg_types::query::{Filters, SortByField, SortOrder};
use url::form_urlencoded;

/// Inputs of a list query string.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions<'a> {
    pub first: u64,
    pub max: u64,
    pub order_by: Option<SortByField>,
    pub sort_order: Option<SortOrder>,
    pub filters: Option<&'a Filters>,
}

/// Build the list query string: `first` and `max` always, then `orderBy` and
/// `sortOrder` when given, then each non-empty filter in the order
/// `name`, `clientId`, `creator`. Values are form-urlencoded.
pub fn build_query_params(options: &QueryOptions<'_>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    query.append_pair("first", &options.first.to_string());
    query.append_pair("max", &options.max.to_string());

    if let Some(order_by) = options.order_by {
        query.append_pair("orderBy", order_by.as_str());
    }
    if let Some(sort_order) = options.sort_order {
        query.append_pair("sortOrder", sort_order.as_str());
    }

    if let Some(filters) = options.filters {
        for (key, value) in filters.active() {
            query.append_pair(key.as_str(), value);
        }
    }

    query.finish()
}
