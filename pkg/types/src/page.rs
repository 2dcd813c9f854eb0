//! Page window and the classification of a fetched page.
//!
//! The backend has no total-count endpoint, so whether another page exists is
//! inferred by asking for one item more than the page size.

use pkg_constants::paging::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use serde::{Deserialize, Serialize};

use crate::service_account::ServiceAccount;

/// Largest page size; leaves room for the one-item probe.
pub const MAX_PER_PAGE: u64 = u64::MAX - 1;

/// A sanitized `(page, per_page)` pair; both are always at least 1 and
/// `per_page` never exceeds [`MAX_PER_PAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    page: u64,
    per_page: u64,
}

impl PageWindow {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Build a window from untrusted numeric input: values are floored and
    /// anything below 1 (including NaN) becomes 1.
    pub fn from_raw(page: f64, per_page: f64) -> Self {
        Self {
            page: sanitize(page),
            per_page: sanitize(per_page).min(MAX_PER_PAGE),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Offset of the first item on this page.
    pub fn first(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Number of items to request: one extra to detect a following page.
    pub fn probe_max(&self) -> u64 {
        self.per_page + 1
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

fn sanitize(value: f64) -> u64 {
    // f64::max ignores NaN; `as` saturates on overflow.
    value.floor().max(1.0) as u64
}

/// How the list view classifies a fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageState {
    /// First page came back empty: there are no service accounts at all.
    NoData,
    LastPage,
    /// More pages follow.
    Results,
}

/// One page of service accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountPage {
    pub service_accounts: Vec<ServiceAccount>,
    pub has_more: bool,
}

impl ServiceAccountPage {
    /// Classify a probe response that asked for `per_page + 1` items.
    /// The extra item, if present, is dropped.
    pub fn from_probe(mut items: Vec<ServiceAccount>, per_page: u64) -> Self {
        let limit = usize::try_from(per_page).unwrap_or(usize::MAX);
        let has_more = items.len() > limit;
        if has_more {
            items.truncate(limit);
        }
        Self {
            service_accounts: items,
            has_more,
        }
    }

    pub fn len(&self) -> usize {
        self.service_accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.service_accounts.is_empty()
    }

    pub fn state(&self, window: &PageWindow) -> PageState {
        if window.page() == 1 && self.is_empty() {
            PageState::NoData
        } else if self.has_more {
            PageState::Results
        } else {
            PageState::LastPage
        }
    }

    /// 1-based index of the first item shown, or 0 for an empty page.
    pub fn first_index(&self, window: &PageWindow) -> u64 {
        if self.is_empty() {
            0
        } else {
            window.first().saturating_add(1)
        }
    }

    /// 1-based index of the last item shown.
    pub fn last_index(&self, window: &PageWindow) -> u64 {
        window.first().saturating_add(self.len() as u64)
    }

    /// Total item count, known only once the last page has been reached.
    pub fn item_count(&self, window: &PageWindow) -> Option<u64> {
        if self.has_more {
            None
        } else {
            Some(self.last_index(window))
        }
    }

    /// Pager label, e.g. `51 - 100 of many` or `101 - 120 of 120`.
    pub fn range_label(&self, window: &PageWindow) -> String {
        let total = match self.item_count(window) {
            Some(count) => count.to_string(),
            None => "many".to_string(),
        };
        format!(
            "{} - {} of {}",
            self.first_index(window),
            self.last_index(window),
            total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts(n: usize) -> Vec<ServiceAccount> {
        (1..=n)
            .map(|i| ServiceAccount {
                id: i.to_string(),
                client_id: format!("client-{}", i),
                name: format!("sa-{}", i),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn window_clamps_non_positive_input() {
        let w = PageWindow::new(0, 0);
        assert_eq!((w.page(), w.per_page()), (1, 1));
        assert_eq!(w.first(), 0);
        assert_eq!(w.probe_max(), 2);
    }

    #[test]
    fn raw_window_floors_fractions() {
        let w = PageWindow::from_raw(2.7, 10.0);
        assert_eq!(w.page(), 2);
        assert_eq!(w.first(), 10);

        let w = PageWindow::from_raw(0.0, 10.0);
        assert_eq!(w.first(), 0);

        let w = PageWindow::from_raw(-3.0, 5.9);
        assert_eq!((w.page(), w.per_page()), (1, 5));
        assert_eq!(w.probe_max(), 6);

        let w = PageWindow::from_raw(f64::NAN, 0.5);
        assert_eq!((w.page(), w.per_page()), (1, 1));
    }

    #[test]
    fn huge_page_size_still_probes_one_more() {
        let w = PageWindow::new(1, u64::MAX);
        assert_eq!(w.per_page(), MAX_PER_PAGE);
        assert_eq!(w.probe_max(), u64::MAX);

        let w = PageWindow::from_raw(1.0, f64::INFINITY);
        assert_eq!(w.probe_max(), w.per_page() + 1);
    }

    #[test]
    fn default_window_is_first_page_of_fifty() {
        let w = PageWindow::default();
        assert_eq!((w.page(), w.per_page()), (1, 50));
        assert_eq!(w.probe_max(), 51);
    }

    #[test]
    fn probe_with_extra_item_has_more() {
        let page = ServiceAccountPage::from_probe(accounts(3), 2);
        assert!(page.has_more);
        assert_eq!(page.service_accounts, accounts(2));
    }

    #[test]
    fn probe_without_extra_item_passes_through() {
        let page = ServiceAccountPage::from_probe(accounts(2), 2);
        assert!(!page.has_more);
        assert_eq!(page.service_accounts, accounts(2));

        let page = ServiceAccountPage::from_probe(accounts(1), 10);
        assert!(!page.has_more);
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn state_classification() {
        let first = PageWindow::new(1, 10);
        let second = PageWindow::new(2, 10);

        let empty = ServiceAccountPage::default();
        assert_eq!(empty.state(&first), PageState::NoData);
        assert_eq!(empty.state(&second), PageState::LastPage);

        let more = ServiceAccountPage::from_probe(accounts(11), 10);
        assert_eq!(more.state(&first), PageState::Results);

        let last = ServiceAccountPage::from_probe(accounts(4), 10);
        assert_eq!(last.state(&second), PageState::LastPage);
    }

    #[test]
    fn range_label_reports_many_until_last_page() {
        let window = PageWindow::new(2, 50);
        let more = ServiceAccountPage::from_probe(accounts(51), 50);
        assert_eq!(more.item_count(&window), None);
        assert_eq!(more.range_label(&window), "51 - 100 of many");

        let last = ServiceAccountPage::from_probe(accounts(20), 50);
        assert_eq!(last.item_count(&window), Some(70));
        assert_eq!(last.range_label(&window), "51 - 70 of 70");

        let empty = ServiceAccountPage::default();
        assert_eq!(empty.range_label(&PageWindow::new(1, 50)), "0 - 0 of 0");
    }
}
