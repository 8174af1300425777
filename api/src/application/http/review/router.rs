use super::handlers::create_review::{__path_create_review, create_review};
use super::handlers::delete_review::{__path_delete_review, delete_review};
use super::handlers::get_bootcamp_reviews::{__path_get_bootcamp_reviews, get_bootcamp_reviews};
use super::handlers::get_review::{__path_get_review, get_review};
use super::handlers::get_reviews::{__path_get_reviews, get_reviews};
use super::handlers::update_review::{__path_update_review, update_review};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_reviews,
    get_bootcamp_reviews,
    get_review,
    create_review,
    update_review,
    delete_review
))]
pub struct ReviewApiDoc;

pub fn review_routes(state: AppState) -> Router<AppState> {
    let root = state.args.server.root_path.clone();

    Router::new()
        .route(&format!("{root}/reviews"), get(get_reviews))
        .route(&format!("{root}/reviews/{{review_id}}"), get(get_review))
        .route(&format!("{root}/reviews/{{review_id}}"), put(update_review))
        .route(
            &format!("{root}/reviews/{{review_id}}"),
            delete(delete_review),
        )
        .route(
            &format!("{root}/bootcamps/{{bootcamp_id}}/reviews"),
            get(get_bootcamp_reviews),
        )
        .route(
            &format!("{root}/bootcamps/{{bootcamp_id}}/reviews"),
            post(create_review),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
