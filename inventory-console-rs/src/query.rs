//! Search, filter, sort and pagination parameters
//!
//! Query parameters arrive as text from the command line. They are checked
//! with the same [`ValidationBuilder`] the record rules use, so a bad page
//! number reads like a bad field value.

use inventory_validation::{
    Field, Manufacturer, OperatingSystem, Record, Status, ValidationBuilder, ValidationError,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ConsoleResult;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;
pub const MAX_QUERY_LENGTH: usize = 100;

/// Validated free-text search with optional narrowing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub department: Option<String>,
    pub status: Option<Status>,
}

impl SearchQuery {
    /// Build a query from raw parameters, rejecting the first invalid one
    pub fn parse(
        query: Option<&str>,
        department: Option<&str>,
        status: Option<&str>,
    ) -> ConsoleResult<Self> {
        let query = query
            .map(|q| {
                ValidationBuilder::new("Search query", q)
                    .min_length(1)
                    .max_length(MAX_QUERY_LENGTH)
                    .finish()
                    .map(str::to_string)
            })
            .transpose()?;

        let status = status
            .map(|s| {
                s.parse::<Status>().map_err(|_| {
                    ValidationError::NotAllowed(format!("Invalid status '{}'", s))
                })
            })
            .transpose()?;

        Ok(Self {
            query,
            department: department.map(str::to_string),
            status,
        })
    }

    /// Whether a record satisfies every part of the query
    pub fn matches(&self, record: &Record) -> bool {
        let text_ok = self
            .query
            .as_deref()
            .map_or(true, |term| matches_term(record, term));
        let department_ok = self
            .department
            .as_deref()
            .map_or(true, |d| record.department.eq_ignore_ascii_case(d));
        let status_ok = self.status.map_or(true, |s| record.user_status == s);

        text_ok && department_ok && status_ok
    }
}

/// Free-text match used by the record list search box.
///
/// Name, username and department match case-insensitively; the employee
/// number is a case-sensitive substring match. An empty term matches all.
pub fn matches_term(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    record.full_name.to_lowercase().contains(&needle)
        || record.username.to_lowercase().contains(&needle)
        || record.department.to_lowercase().contains(&needle)
        || record.employee_number.contains(term)
}

/// Exact-match filters; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilters {
    pub department: Option<String>,
    pub user_status: Option<Status>,
    pub equipment_status: Option<Status>,
    pub manufacturer: Option<Manufacturer>,
    pub operating_system: Option<OperatingSystem>,
}

impl RecordFilters {
    pub fn is_empty(&self) -> bool {
        *self == RecordFilters::default()
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.department
            .as_deref()
            .map_or(true, |d| record.department.eq_ignore_ascii_case(d))
            && self.user_status.map_or(true, |s| record.user_status == s)
            && self
                .equipment_status
                .map_or(true, |s| record.equipment_status == s)
            && self.manufacturer.map_or(true, |m| record.manufacturer == m)
            && self
                .operating_system
                .map_or(true, |os| record.operating_system == os)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Sort records in place by the text of one field
pub fn sort_records(records: &mut [Record], field: Field, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = a.get(field).cmp(b.get(field));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Build a page request; missing values take their defaults
    pub fn new(page: Option<u32>, limit: Option<u32>) -> ConsoleResult<Self> {
        let page = ValidationBuilder::new("Page", page.unwrap_or(DEFAULT_PAGE))
            .min(1)
            .finish()?;
        let limit = ValidationBuilder::new("Limit", limit.unwrap_or(DEFAULT_LIMIT))
            .min(1)
            .max(MAX_LIMIT)
            .finish()?;

        Ok(Self { page, limit })
    }

    fn offset(&self) -> usize {
        (self.page as usize).saturating_sub(1) * self.limit as usize
    }
}

/// One page of results with enough metadata to render a pager
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: usize,
}

/// Slice `items` into the requested page. Pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], pagination: &Pagination) -> Page<T> {
    let total = items.len();
    let limit = pagination.limit.max(1) as usize;
    let total_pages = (total + limit - 1) / limit;

    let items = items
        .iter()
        .skip(pagination.offset())
        .take(limit)
        .cloned()
        .collect();

    Page {
        items,
        page: pagination.page,
        limit: pagination.limit,
        total,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::mock_records;
    use test_case::test_case;

    #[test]
    fn test_pagination_defaults() {
        assert_eq!(
            Pagination::new(None, None).unwrap(),
            Pagination { page: 1, limit: 10 }
        );
        assert_eq!(Pagination::default(), Pagination::new(None, None).unwrap());
    }

    #[test_case(Some(0), None => false ; "page zero")]
    #[test_case(None, Some(0) => false ; "limit zero")]
    #[test_case(None, Some(101) => false ; "limit over max")]
    #[test_case(Some(3), Some(100) => true ; "upper bound")]
    fn test_pagination_bounds(page: Option<u32>, limit: Option<u32>) -> bool {
        Pagination::new(page, limit).is_ok()
    }

    #[test]
    fn test_pagination_messages() {
        let err = Pagination::new(Some(0), None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid query: Page must be at least 1");
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, &Pagination::new(Some(3), Some(10)).unwrap());
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);

        let page = paginate(&items, &Pagination::new(Some(4), Some(10)).unwrap());
        assert!(page.items.is_empty());

        let empty: Vec<u32> = Vec::new();
        assert_eq!(paginate(&empty, &Pagination::default()).total_pages, 0);
    }

    #[test]
    fn test_search_query_bounds() {
        assert!(SearchQuery::parse(Some(""), None, None).is_err());
        assert!(SearchQuery::parse(Some(&"a".repeat(101)), None, None).is_err());
        assert!(SearchQuery::parse(Some(&"a".repeat(100)), None, None).is_ok());
        assert!(SearchQuery::parse(None, None, Some("Retired")).is_err());

        let query = SearchQuery::parse(Some("ana"), Some("IT"), Some("In repair")).unwrap();
        assert_eq!(query.status, Some(Status::InRepair));
        assert_eq!(query.department.as_deref(), Some("IT"));
    }

    #[test]
    fn test_matches_term() {
        let records = mock_records();
        let first = &records[0];
        assert!(matches_term(first, ""));
        assert!(matches_term(first, &first.full_name.to_uppercase()));
        assert!(matches_term(first, &first.employee_number));
        assert!(!matches_term(first, &first.employee_number.to_lowercase()));
    }

    #[test]
    fn test_filters() {
        let records = mock_records();
        let filters = RecordFilters {
            equipment_status: Some(Status::InRepair),
            ..Default::default()
        };
        assert!(!filters.is_empty());
        assert!(records
            .iter()
            .filter(|r| filters.matches(r))
            .all(|r| r.equipment_status == Status::InRepair));
        assert!(RecordFilters::default().matches(&records[0]));
    }

    #[test]
    fn test_sort_records() {
        let mut records = mock_records();
        sort_records(&mut records, Field::Username, SortDirection::Descending);
        assert!(records
            .windows(2)
            .all(|pair| pair[0].username >= pair[1].username));
    }

    #[test_case("asc" => Ok(SortDirection::Ascending))]
    #[test_case("DESC" => Ok(SortDirection::Descending))]
    #[test_case("up" => Err("Invalid sort direction: up".to_string()))]
    fn test_sort_direction(s: &str) -> Result<SortDirection, String> {
        s.parse()
    }
}
