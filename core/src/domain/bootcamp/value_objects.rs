use bytes::Bytes;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateBootcampInput {
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: String,
    pub zipcode: Option<String>,
    pub careers: Vec<String>,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBootcampInput {
    pub bootcamp_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub careers: Option<Vec<String>>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct RadiusSearchInput {
    pub zipcode: String,
    pub distance_miles: f64,
}

#[derive(Debug, Clone)]
pub struct AttachPhotoInput {
    pub bootcamp_id: Uuid,
    pub filename: String,
    pub mime_type: String,
    pub payload: Bytes,
}

/// Geocoded coordinates for a postal code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Latitude/longitude window for the coarse radius pre-filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}
