use std::sync::LazyLock;

use axum::extract::{Path, State};
use campdir_core::domain::bootcamp::{
    entities::Bootcamp, ports::BootcampService, value_objects::RadiusSearchInput,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

static ZIPCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("zipcode pattern is valid"));

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetBootcampsInRadiusResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Bootcamp>,
}

#[utoipa::path(
    get,
    path = "/radius/{zipcode}/{distance}",
    tag = "bootcamp",
    summary = "Get bootcamps in radius",
    description = "Bootcamps within the given distance (miles) of a US zipcode.",
    params(
        ("zipcode" = String, Path, description = "US zipcode to center the search on"),
        ("distance" = f64, Path, description = "Search radius in miles"),
    ),
    responses(
        (status = 200, body = GetBootcampsInRadiusResponse),
        (status = 400, description = "Malformed zipcode or distance")
    ),
)]
pub async fn get_bootcamps_in_radius(
    Path((zipcode, distance)): Path<(String, f64)>,
    State(state): State<AppState>,
) -> Result<Response<GetBootcampsInRadiusResponse>, ApiError> {
    if !ZIPCODE.is_match(&zipcode) {
        return Err(ApiError::BadRequest(format!(
            "Invalid zipcode: {zipcode}"
        )));
    }
    if distance <= 0.0 {
        return Err(ApiError::BadRequest(
            "distance must be a positive number of miles".to_string(),
        ));
    }

    let bootcamps = state
        .service
        .get_bootcamps_in_radius(RadiusSearchInput {
            zipcode,
            distance_miles: distance,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetBootcampsInRadiusResponse {
        success: true,
        count: bootcamps.len(),
        data: bootcamps,
    }))
}
