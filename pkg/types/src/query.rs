//! Sort and filter vocabulary shared by the URL state and the list request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::page::PageWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortByField {
    #[default]
    Name,
    Description,
    CreatedAt,
    ClientId,
}

impl SortByField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortByField::Name => "name",
            SortByField::Description => "description",
            SortByField::CreatedAt => "createdAt",
            SortByField::ClientId => "clientId",
        }
    }

    /// Sortable table columns. The client ID column (2) is not sortable.
    pub fn from_column_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SortByField::Name),
            1 => Some(SortByField::Description),
            4 => Some(SortByField::CreatedAt),
            _ => None,
        }
    }

    /// Table column that displays this field.
    pub fn column_index(&self) -> usize {
        match self {
            SortByField::Name => 0,
            SortByField::Description => 1,
            SortByField::ClientId => 2,
            SortByField::CreatedAt => 4,
        }
    }
}

impl fmt::Display for SortByField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortByField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortByField::Name),
            "description" => Ok(SortByField::Description),
            "createdAt" => Ok(SortByField::CreatedAt),
            "clientId" => Ok(SortByField::ClientId),
            other => Err(format!("unknown sort field '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// The recognised filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Name,
    ClientId,
    Creator,
}

impl FilterKey {
    /// Canonical order used when filters are rendered into a query.
    pub const ALL: [FilterKey; 3] = [FilterKey::Name, FilterKey::ClientId, FilterKey::Creator];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Name => "name",
            FilterKey::ClientId => "clientId",
            FilterKey::Creator => "creator",
        }
    }
}

/// Substring filters, ANDed by the backend. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

impl Filters {
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        let value = match key {
            FilterKey::Name => self.name.as_deref(),
            FilterKey::ClientId => self.client_id.as_deref(),
            FilterKey::Creator => self.creator.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, key: FilterKey, value: Option<String>) {
        let slot = match key {
            FilterKey::Name => &mut self.name,
            FilterKey::ClientId => &mut self.client_id,
            FilterKey::Creator => &mut self.creator,
        };
        *slot = value.filter(|v| !v.is_empty());
    }

    /// Non-empty filters in canonical key order.
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> + '_ {
        FilterKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

/// Everything needed to request one page of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub window: PageWindow,
    pub order_by: Option<SortByField>,
    pub sort_order: Option<SortOrder>,
    pub filters: Filters,
}

impl ListQuery {
    pub fn new(window: PageWindow) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    pub fn with_sort(mut self, order_by: SortByField, sort_order: SortOrder) -> Self {
        self.order_by = Some(order_by);
        self.sort_order = Some(sort_order);
        self
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }
}
