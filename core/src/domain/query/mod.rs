//! Generic query shaping for list endpoints.
//!
//! Every list-style operation parses its query string into a [`ListQuery`] and
//! hands it to the repository layer, which applies it against the backing
//! table. Reserved keys (`select`, `sort`, `page`, `limit`) shape the output;
//! every other key is a filter constraint, combined conjunctively.

use std::collections::HashMap;
use std::str::FromStr;

pub mod pagination;
pub mod projection;

pub use pagination::{ListEnvelope, Page, PageLink, Pagination};

/// Keys that shape the output instead of constraining the match set.
pub const RESERVED_KEYS: [&str; 4] = ["select", "sort", "page", "limit"];

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 25;

/// Comparison operator carried by a filter value of the form `op:value`.
/// A value without a recognized operator prefix is an equality match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            "in" => Ok(FilterOperator::In),
            _ => Err(()),
        }
    }
}

/// Filter constraint on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterCondition {
    /// Detect an `op:value` token. The prefix must be one of the known
    /// operator words; anything else (including values that merely contain a
    /// colon, like URLs) stays an equality match on the raw value.
    fn parse(field: &str, raw: &str) -> Self {
        if let Some((prefix, rest)) = raw.split_once(':')
            && let Ok(operator) = prefix.parse::<FilterOperator>()
        {
            return Self {
                field: field.to_string(),
                operator,
                value: rest.to_string(),
            };
        }
        Self {
            field: field.to_string(),
            operator: FilterOperator::Eq,
            value: raw.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort key with direction; a `-` prefix on the token means descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parse a comma list like `name,-created_at` in priority order.
    pub fn parse_list(s: &str) -> Vec<SortSpec> {
        let mut sorts = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some(stripped) = part.strip_prefix('-') {
                sorts.push(SortSpec {
                    field: stripped.to_string(),
                    direction: SortDirection::Desc,
                });
            } else {
                sorts.push(SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                });
            }
        }
        sorts
    }
}

/// Requested page window. Missing or malformed values fall back to the
/// defaults; pagination input is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    fn parse(raw: Option<&String>, default: u64) -> u64 {
        raw.and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v >= 1)
            .unwrap_or(default)
    }
}

/// Parsed query parameters for a list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: Vec<FilterCondition>,
    pub select: Vec<String>,
    pub sort: Vec<SortSpec>,
    pub page: PageRequest,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query-parameter map. Reserved keys are peeled off first; the
    /// remainder becomes the filter set. Filters are ordered by field name so
    /// the same map always produces the same query.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filters = Vec::new();

        for (key, value) in query_map {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            filters.push(FilterCondition::parse(key, value));
        }
        filters.sort_by(|a, b| a.field.cmp(&b.field));

        let select = query_map
            .get("select")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let sort = query_map
            .get("sort")
            .map(|s| SortSpec::parse_list(s))
            .unwrap_or_default();

        let page = PageRequest {
            page: PageRequest::parse(query_map.get("page"), DEFAULT_PAGE),
            limit: PageRequest::parse(query_map.get("limit"), DEFAULT_LIMIT),
        };

        Self {
            filters,
            select,
            sort,
            page,
        }
    }

    /// Add an equality constraint on top of the parsed filters (used by the
    /// nested routes, e.g. courses scoped to one bootcamp).
    pub fn with_filter(mut self, field: &str, value: impl Into<String>) -> Self {
        self.filters.push(FilterCondition {
            field: field.to_string(),
            operator: FilterOperator::Eq,
            value: value.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn plain_value_is_equality() {
        let q = ListQuery::from_query_map(&map(&[("housing", "true")]));
        assert_eq!(q.filters.len(), 1);
        assert_eq!(q.filters[0].field, "housing");
        assert_eq!(q.filters[0].operator, FilterOperator::Eq);
        assert_eq!(q.filters[0].value, "true");
    }

    #[test]
    fn operator_token_is_detected() {
        let q = ListQuery::from_query_map(&map(&[("tuition", "gte:10000")]));
        assert_eq!(q.filters[0].operator, FilterOperator::Gte);
        assert_eq!(q.filters[0].value, "10000");
    }

    #[test]
    fn in_operator_keeps_comma_list() {
        let q = ListQuery::from_query_map(&map(&[("minimum_skill", "in:beginner,advanced")]));
        assert_eq!(q.filters[0].operator, FilterOperator::In);
        assert_eq!(q.filters[0].value, "beginner,advanced");
    }

    #[test]
    fn colon_value_without_operator_stays_equality() {
        let q = ListQuery::from_query_map(&map(&[("website", "https://devworks.example")]));
        assert_eq!(q.filters[0].operator, FilterOperator::Eq);
        assert_eq!(q.filters[0].value, "https://devworks.example");
    }

    #[test]
    fn reserved_keys_are_not_filters() {
        let q = ListQuery::from_query_map(&map(&[
            ("select", "name"),
            ("sort", "-name"),
            ("page", "2"),
            ("limit", "10"),
        ]));
        assert!(q.filters.is_empty());
        assert_eq!(q.select, vec!["name".to_string()]);
        assert_eq!(q.page.page, 2);
        assert_eq!(q.page.limit, 10);
    }

    #[test]
    fn pagination_defaults_apply() {
        let q = ListQuery::from_query_map(&map(&[]));
        assert_eq!(q.page.page, DEFAULT_PAGE);
        assert_eq!(q.page.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn malformed_pagination_falls_back_silently() {
        let q = ListQuery::from_query_map(&map(&[("page", "abc"), ("limit", "0")]));
        assert_eq!(q.page.page, 1);
        assert_eq!(q.page.limit, 25);
    }

    #[test]
    fn sort_list_parses_in_priority_order() {
        let q = ListQuery::from_query_map(&map(&[("sort", "-tuition,title")]));
        assert_eq!(
            q.sort,
            vec![
                SortSpec {
                    field: "tuition".to_string(),
                    direction: SortDirection::Desc,
                },
                SortSpec {
                    field: "title".to_string(),
                    direction: SortDirection::Asc,
                },
            ]
        );
    }

    #[test]
    fn filters_are_ordered_deterministically() {
        let entries = [("b_field", "1"), ("a_field", "2"), ("c_field", "3")];
        let first = ListQuery::from_query_map(&map(&entries));
        let second = ListQuery::from_query_map(&map(&entries));
        assert_eq!(first, second);
        assert_eq!(first.filters[0].field, "a_field");
        assert_eq!(first.filters[2].field, "c_field");
    }

    #[test]
    fn select_splits_and_trims() {
        let q = ListQuery::from_query_map(&map(&[("select", "name, description,")]));
        assert_eq!(
            q.select,
            vec!["name".to_string(), "description".to_string()]
        );
    }

    #[test]
    fn offset_math() {
        let page = PageRequest { page: 3, limit: 25 };
        assert_eq!(page.offset(), 50);
    }
}
