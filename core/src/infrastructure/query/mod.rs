//! Applies a parsed [`ListQuery`] to a sea-orm select.
//!
//! Filter fields resolve to entity columns through the derived
//! `Column: FromStr`, so no repository enumerates its filterable fields.
//! Literals are coerced by shape before they reach the database; a field the
//! entity does not have is rejected as an invalid query rather than shipped
//! to the backend.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use futures::try_join;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Value,
};
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::query::{FilterCondition, FilterOperator, ListQuery, Page, SortDirection, SortSpec};

const DEFAULT_SORT_FIELD: &str = "created_at";

/// Type a raw literal by shape. Uncoercible combinations (say, a word against
/// a numeric column) surface as backend errors, same as any other bad query.
fn coerce_literal(raw: &str) -> Value {
    if let Ok(v) = raw.parse::<i64>() {
        return v.into();
    }
    if let Ok(v) = raw.parse::<f64>() {
        return v.into();
    }
    if let Ok(v) = raw.parse::<bool>() {
        return v.into();
    }
    if let Ok(v) = raw.parse::<Uuid>() {
        return v.into();
    }
    if let Ok(v) = raw.parse::<DateTime<Utc>>() {
        return v.into();
    }
    raw.to_owned().into()
}

fn resolve_column<E>(field: &str) -> Result<E::Column, CoreError>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    E::Column::from_str(field)
        .map_err(|_| CoreError::InvalidQuery(format!("Unknown filter field: {field}")))
}

/// Build the conjunctive condition for a filter set.
pub fn filter_condition<E>(filters: &[FilterCondition]) -> Result<Condition, CoreError>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    let mut condition = Condition::all();

    for filter in filters {
        let column = resolve_column::<E>(&filter.field)?;
        let expr = match filter.operator {
            FilterOperator::Eq => column.eq(coerce_literal(&filter.value)),
            FilterOperator::Gt => column.gt(coerce_literal(&filter.value)),
            FilterOperator::Gte => column.gte(coerce_literal(&filter.value)),
            FilterOperator::Lt => column.lt(coerce_literal(&filter.value)),
            FilterOperator::Lte => column.lte(coerce_literal(&filter.value)),
            FilterOperator::In => column.is_in(
                filter
                    .value
                    .split(',')
                    .map(|v| coerce_literal(v.trim()))
                    .collect::<Vec<Value>>(),
            ),
        };
        condition = condition.add(expr);
    }

    Ok(condition)
}

/// Apply the sort list in priority order; with no sort requested, fall back
/// to newest-first. Sort keys that don't name a column are skipped.
pub fn apply_sort<E>(mut select: Select<E>, sort: &[SortSpec]) -> Select<E>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    if sort.is_empty() {
        if let Ok(column) = E::Column::from_str(DEFAULT_SORT_FIELD) {
            select = select.order_by(column, Order::Desc);
        }
        return select;
    }

    for spec in sort {
        let Ok(column) = E::Column::from_str(&spec.field) else {
            continue;
        };
        let order = match spec.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };
        select = select.order_by(column, order);
    }

    select
}

/// Run a list query against a base select: filter, count the filtered set,
/// sort, page, fetch. The count and the data fetch go out concurrently.
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    base: Select<E>,
    query: &ListQuery,
) -> Result<Page<E::Model>, CoreError>
where
    E: EntityTrait,
    E::Column: FromStr,
    E::Model: FromQueryResult + Send + Sync,
{
    let filtered = base.filter(filter_condition::<E>(&query.filters)?);

    let data_select = apply_sort(filtered.clone(), &query.sort)
        .offset(query.page.offset())
        .limit(query.page.limit);

    let (total, items) = try_join!(filtered.count(db), data_select.all(db))
        .map_err(|e| CoreError::from_db(e, "Failed to execute list query"))?;

    Ok(Page {
        items,
        total,
        page: query.page.page,
        limit: query.page.limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::ListQuery;
    use crate::entity::courses;
    use sea_orm::{DbBackend, QueryTrait};
    use std::collections::HashMap;

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn course_sql(query: &ListQuery) -> String {
        let condition = filter_condition::<courses::Entity>(&query.filters).unwrap();
        apply_sort(courses::Entity::find().filter(condition), &query.sort)
            .offset(query.page.offset())
            .limit(query.page.limit)
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn gte_token_becomes_numeric_comparison() {
        let query = ListQuery::from_query_map(&map(&[("tuition", "gte:10000")]));
        let sql = course_sql(&query);
        assert!(sql.contains(r#""courses"."tuition" >= 10000"#), "{sql}");
    }

    #[test]
    fn in_token_becomes_set_membership() {
        let query = ListQuery::from_query_map(&map(&[("minimum_skill", "in:beginner,advanced")]));
        let sql = course_sql(&query);
        assert!(
            sql.contains(r#""courses"."minimum_skill" IN ('beginner', 'advanced')"#),
            "{sql}"
        );
    }

    #[test]
    fn plain_value_becomes_equality() {
        let query = ListQuery::from_query_map(&map(&[("scholarship_available", "true")]));
        let sql = course_sql(&query);
        assert!(
            sql.contains(r#""courses"."scholarship_available" = TRUE"#),
            "{sql}"
        );
    }

    #[test]
    fn reserved_keys_leave_the_match_set_unrestricted() {
        let query = ListQuery::from_query_map(&map(&[
            ("select", "title"),
            ("sort", "title"),
            ("page", "1"),
            ("limit", "25"),
        ]));
        let sql = course_sql(&query);
        assert!(!sql.contains("WHERE"), "{sql}");
    }

    #[test]
    fn default_sort_is_newest_first() {
        let query = ListQuery::from_query_map(&map(&[]));
        let sql = course_sql(&query);
        assert!(
            sql.contains(r#"ORDER BY "courses"."created_at" DESC"#),
            "{sql}"
        );
    }

    #[test]
    fn explicit_sort_overrides_default() {
        let asc = ListQuery::from_query_map(&map(&[("sort", "title")]));
        let desc = ListQuery::from_query_map(&map(&[("sort", "-title")]));
        assert!(course_sql(&asc).contains(r#"ORDER BY "courses"."title" ASC"#));
        assert!(course_sql(&desc).contains(r#"ORDER BY "courses"."title" DESC"#));
    }

    #[test]
    fn multi_key_sort_keeps_priority_order() {
        let query = ListQuery::from_query_map(&map(&[("sort", "-tuition,title")]));
        let sql = course_sql(&query);
        assert!(
            sql.contains(r#"ORDER BY "courses"."tuition" DESC, "courses"."title" ASC"#),
            "{sql}"
        );
    }

    #[test]
    fn pagination_window_is_offset_limit() {
        let query = ListQuery::from_query_map(&map(&[("page", "2"), ("limit", "25")]));
        let sql = course_sql(&query);
        assert!(sql.contains("LIMIT 25"), "{sql}");
        assert!(sql.contains("OFFSET 25"), "{sql}");
    }

    #[test]
    fn unknown_filter_field_is_rejected() {
        let query = ListQuery::from_query_map(&map(&[("no_such_field", "1")]));
        let err = filter_condition::<courses::Entity>(&query.filters).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuery(_)));
    }

    #[test]
    fn same_query_builds_identical_sql() {
        let entries = [("tuition", "lte:9000"), ("minimum_skill", "beginner")];
        let first = course_sql(&ListQuery::from_query_map(&map(&entries)));
        let second = course_sql(&ListQuery::from_query_map(&map(&entries)));
        assert_eq!(first, second);
    }
}
