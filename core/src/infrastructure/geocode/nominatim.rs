use serde::Deserialize;
use tracing::error;

use crate::domain::{
    bootcamp::{ports::GeocoderPort, value_objects::GeoPoint},
    common::{GeocoderConfig, entities::app_errors::CoreError},
};

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Postal-code geocoding against a Nominatim-compatible endpoint.
#[derive(Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                error!("Failed to build geocoder client: {e}");
                CoreError::Internal
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl GeocoderPort for NominatimGeocoder {
    async fn geocode_zip(&self, zipcode: String) -> Result<GeoPoint, CoreError> {
        let url = format!("{}/search", self.base_url);

        let places: Vec<NominatimPlace> = self
            .client
            .get(&url)
            .query(&[
                ("postalcode", zipcode.as_str()),
                ("country", "us"),
                ("format", "json"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Geocoder request failed: {e}");
                CoreError::Internal
            })?
            .error_for_status()
            .map_err(|e| {
                error!("Geocoder returned an error status: {e}");
                CoreError::Internal
            })?
            .json()
            .await
            .map_err(|e| {
                error!("Geocoder returned an unexpected body: {e}");
                CoreError::Internal
            })?;

        let place = places.into_iter().next().ok_or_else(|| {
            CoreError::NotFound(format!("No location found for zipcode: {zipcode}"))
        })?;

        let latitude = place.lat.parse::<f64>().map_err(|e| {
            error!("Geocoder returned a malformed latitude: {e}");
            CoreError::Internal
        })?;
        let longitude = place.lon.parse::<f64>().map_err(|e| {
            error!("Geocoder returned a malformed longitude: {e}");
            CoreError::Internal
        })?;

        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }
}
