use super::handlers::create_bootcamp::{__path_create_bootcamp, create_bootcamp};
use super::handlers::delete_bootcamp::{__path_delete_bootcamp, delete_bootcamp};
use super::handlers::get_bootcamp::{__path_get_bootcamp, get_bootcamp};
use super::handlers::get_bootcamps::{__path_get_bootcamps, get_bootcamps};
use super::handlers::get_bootcamps_in_radius::{
    __path_get_bootcamps_in_radius, get_bootcamps_in_radius,
};
use super::handlers::update_bootcamp::{__path_update_bootcamp, update_bootcamp};
use super::handlers::upload_bootcamp_photo::{
    __path_upload_bootcamp_photo, upload_bootcamp_photo,
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_bootcamps,
    get_bootcamp,
    create_bootcamp,
    update_bootcamp,
    delete_bootcamp,
    get_bootcamps_in_radius,
    upload_bootcamp_photo
))]
pub struct BootcampApiDoc;

pub fn bootcamp_routes(state: AppState) -> Router<AppState> {
    let root = state.args.server.root_path.clone();

    Router::new()
        .route(&format!("{root}/bootcamps"), get(get_bootcamps))
        .route(&format!("{root}/bootcamps"), post(create_bootcamp))
        .route(
            &format!("{root}/bootcamps/radius/{{zipcode}}/{{distance}}"),
            get(get_bootcamps_in_radius),
        )
        .route(&format!("{root}/bootcamps/{{bootcamp_id}}"), get(get_bootcamp))
        .route(
            &format!("{root}/bootcamps/{{bootcamp_id}}"),
            put(update_bootcamp),
        )
        .route(
            &format!("{root}/bootcamps/{{bootcamp_id}}"),
            delete(delete_bootcamp),
        )
        .route(
            &format!("{root}/bootcamps/{{bootcamp_id}}/photo"),
            put(upload_bootcamp_photo),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
