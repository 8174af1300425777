use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::query::projection::project_fields;

/// Pointer to an adjacent page, carrying the limit so clients can replay it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PageLink {
    pub page: u64,
    pub limit: u64,
}

/// Pagination descriptor for a list response. `next` is present iff another
/// page of matches exists past this one; `prev` iff this is not the first page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageLink>,
}

impl Pagination {
    /// `total` is the count of matches before the page window is applied.
    pub fn compute(page: u64, limit: u64, total: u64) -> Self {
        let next = (page * limit < total).then_some(PageLink {
            page: page + 1,
            limit,
        });
        let prev = (page > 1).then_some(PageLink {
            page: page - 1,
            limit,
        });

        Self {
            page,
            limit,
            next,
            prev,
        }
    }
}

/// One page of matched records plus the filtered total, as produced by the
/// repository layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::compute(self.page, self.limit, self.total)
    }
}

/// Standard list response shape: `{success, count, pagination, data}` with
/// `count == data.len()`. Records are serialized here so that the `select`
/// projection can be applied uniformly for every resource.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListEnvelope {
    pub success: bool,
    pub count: usize,
    pub pagination: Pagination,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<serde_json::Value>,
}

impl ListEnvelope {
    pub fn from_page<T: Serialize>(page: Page<T>, select: &[String]) -> Result<Self, CoreError> {
        let pagination = page.pagination();
        let mut data = Vec::with_capacity(page.items.len());

        for item in &page.items {
            let mut value = serde_json::to_value(item).map_err(|e| {
                tracing::error!("Failed to serialize list record: {e}");
                CoreError::Internal
            })?;
            if !select.is_empty() {
                value = project_fields(value, select);
            }
            data.push(value);
        }

        Ok(Self {
            success: true,
            count: data.len(),
            pagination,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_page_of_thirty_has_next_only() {
        let pagination = Pagination::compute(1, 25, 30);
        assert_eq!(pagination.next, Some(PageLink { page: 2, limit: 25 }));
        assert_eq!(pagination.prev, None);
    }

    #[test]
    fn last_page_of_thirty_has_prev_only() {
        let pagination = Pagination::compute(2, 25, 30);
        assert_eq!(pagination.next, None);
        assert_eq!(pagination.prev, Some(PageLink { page: 1, limit: 25 }));
    }

    #[test]
    fn exact_boundary_has_no_next() {
        // 50 matches, page 2 of 25: 2 * 25 == 50, nothing past it.
        let pagination = Pagination::compute(2, 25, 50);
        assert_eq!(pagination.next, None);
    }

    #[test]
    fn empty_total_has_no_links() {
        let pagination = Pagination::compute(1, 25, 0);
        assert_eq!(pagination.next, None);
        assert_eq!(pagination.prev, None);
    }

    #[test]
    fn envelope_counts_match_data() {
        let page = Page {
            items: vec![json!({"id": 1}), json!({"id": 2})],
            total: 30,
            page: 1,
            limit: 25,
        };
        let envelope = ListEnvelope::from_page(page, &[]).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.count, 2);
        assert_eq!(envelope.data.len(), 2);
    }

    #[test]
    fn empty_page_is_a_successful_envelope() {
        let page: Page<serde_json::Value> = Page {
            items: vec![],
            total: 0,
            page: 1,
            limit: 25,
        };
        let envelope = ListEnvelope::from_page(page, &[]).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.count, 0);
    }

    #[test]
    fn envelope_applies_projection() {
        let page = Page {
            items: vec![json!({"id": 7, "name": "a", "description": "b", "phone": "c"})],
            total: 1,
            page: 1,
            limit: 25,
        };
        let select = vec!["name".to_string(), "description".to_string()];
        let envelope = ListEnvelope::from_page(page, &select).unwrap();
        let record = envelope.data[0].as_object().unwrap();
        assert!(record.contains_key("id"));
        assert!(record.contains_key("name"));
        assert!(record.contains_key("description"));
        assert!(!record.contains_key("phone"));
    }
}
