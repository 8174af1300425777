use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

/// Public configuration snapshot clients may read at startup.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PublicConfig {
    pub name: String,
    pub version: String,
    pub root_path: String,
}

pub async fn get_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(PublicConfig {
        name: "campdir".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
    })
}
