use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use std::collections::HashMap;

use campdir_core::domain::query::ListQuery;

/// Extractor turning the raw query string into the shared [`ListQuery`].
///
/// Usage:
/// ```ignore
/// async fn handler(
///     ListQueryExtractor(query): ListQueryExtractor,
/// ) -> Result<Response, ApiError> {
///     // query.filters, query.select, query.sort, query.page
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListQueryExtractor(pub ListQuery);

impl<S> FromRequestParts<S> for ListQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(ListQueryExtractor(ListQuery::from_query_map(&query_map)))
    }
}
