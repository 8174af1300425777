use super::handlers::delete_file::{__path_delete_file, delete_file};
use super::handlers::get_download_url::{__path_get_download_url, get_download_url};
use super::handlers::list_files::{__path_list_files, list_files};
use super::handlers::upload_file::{__path_upload_file, upload_file};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(upload_file, list_files, get_download_url, delete_file))]
pub struct FileApiDoc;

pub fn file_routes(state: AppState) -> Router<AppState> {
    let root = state.args.server.root_path.clone();

    Router::new()
        .route(&format!("{root}/files"), post(upload_file))
        .route(&format!("{root}/files"), get(list_files))
        .route(
            &format!("{root}/files/{{file_id}}/download"),
            get(get_download_url),
        )
        .route(&format!("{root}/files/{{file_id}}"), delete(delete_file))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
