use pkg_constants::paging::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use pkg_types::page::PageWindow;
use pkg_types::query::{FilterKey, Filters, ListQuery, SortByField, SortOrder};

use crate::keys::{ORDER_BY, PAGE, PER_PAGE, SORT_ORDER};
use crate::search_params::SearchParams;

/// Read the list request encoded in the URL.
///
/// `page`/`perPage` take the leading integer of the value (`"2.7"` is 2);
/// missing, unparsable or zero values fall back to the defaults and
/// negatives are clamped by [`PageWindow`]. Unrecognised sort values are
/// ignored.
pub fn list_query_from_params(params: &SearchParams) -> ListQuery {
    let page = int_param(params, PAGE).unwrap_or(DEFAULT_PAGE as i64);
    let per_page = int_param(params, PER_PAGE).unwrap_or(DEFAULT_PER_PAGE as i64);

    let mut filters = Filters::default();
    for key in FilterKey::ALL {
        filters.set(key, params.get(key.as_str()).map(str::to_string));
    }

    ListQuery {
        window: PageWindow::from_raw(page as f64, per_page as f64),
        order_by: params
            .get(ORDER_BY)
            .and_then(|v| v.parse::<SortByField>().ok()),
        sort_order: params
            .get(SORT_ORDER)
            .and_then(|v| v.parse::<SortOrder>().ok()),
        filters,
    }
}

/// Encode a list request as URL state, the inverse of [`list_query_from_params`].
pub fn list_query_to_params(query: &ListQuery) -> SearchParams {
    let mut params = SearchParams::new();
    params.set(PAGE, query.window.page().to_string());
    params.set(PER_PAGE, query.window.per_page().to_string());
    if let Some(order_by) = query.order_by {
        params.set(ORDER_BY, order_by.as_str());
    }
    if let Some(sort_order) = query.sort_order {
        params.set(SORT_ORDER, sort_order.as_str());
    }
    for (key, value) in query.filters.active() {
        params.set(key.as_str(), value);
    }
    params
}

/// Non-zero leading integer of a parameter value.
fn int_param(params: &SearchParams, key: &str) -> Option<i64> {
    params
        .get(key)
        .and_then(leading_int)
        .filter(|value| *value != 0)
}

fn leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let parsed: i64 = digits[..end].parse().ok()?;
    Some(if negative { -parsed } else { parsed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_give_defaults() {
        let query = list_query_from_params(&SearchParams::new());
        assert_eq!(query.window, PageWindow::new(1, 50));
        assert_eq!(query.order_by, None);
        assert_eq!(query.sort_order, None);
        assert!(query.filters.is_empty());
    }

    #[test]
    fn reads_all_owned_params() {
        let params = SearchParams::parse(
            "?page=3&perPage=20&orderBy=createdAt&sortOrder=desc&name=api&creator=a%40b.com",
        );
        let query = list_query_from_params(&params);

        assert_eq!(query.window, PageWindow::new(3, 20));
        assert_eq!(query.order_by, Some(SortByField::CreatedAt));
        assert_eq!(query.sort_order, Some(SortOrder::Desc));
        assert_eq!(query.filters.get(FilterKey::Name), Some("api"));
        assert_eq!(query.filters.get(FilterKey::ClientId), None);
        assert_eq!(query.filters.get(FilterKey::Creator), Some("a@b.com"));
    }

    #[test]
    fn malformed_numbers_fall_back_or_truncate() {
        let query = list_query_from_params(&SearchParams::parse("page=abc&perPage=0"));
        assert_eq!(query.window, PageWindow::new(1, 50));

        let query = list_query_from_params(&SearchParams::parse("page=2.7&perPage=10items"));
        assert_eq!(query.window, PageWindow::new(2, 10));

        let query = list_query_from_params(&SearchParams::parse("page=-4"));
        assert_eq!(query.window.page(), 1);
    }

    #[test]
    fn unknown_sort_values_are_ignored() {
        let query =
            list_query_from_params(&SearchParams::parse("orderBy=owner&sortOrder=sideways"));
        assert_eq!(query.order_by, None);
        assert_eq!(query.sort_order, None);
    }

    #[test]
    fn to_params_round_trips() {
        let params = SearchParams::parse(
            "page=2&perPage=10&orderBy=name&sortOrder=asc&name=api&clientId=c-1",
        );
        let query = list_query_from_params(&params);
        assert_eq!(list_query_to_params(&query), params);
    }
}
