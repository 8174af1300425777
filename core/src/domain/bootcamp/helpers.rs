use crate::domain::bootcamp::value_objects::GeoBounds;

/// Mean Earth radius in miles, used for the radius search.
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// URL-safe slug: lowercase alphanumerics joined by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Great-circle distance between two points, in miles.
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_MILES * c
}

/// Bounding box around a center point, for the coarse pre-filter the exact
/// distance check runs on. One degree of latitude is ~69 miles; longitude
/// degrees shrink with the cosine of the latitude.
pub fn bounding_box(latitude: f64, longitude: f64, radius_miles: f64) -> GeoBounds {
    let lat_delta = radius_miles / 69.0;
    let lng_delta = radius_miles / (69.0 * latitude.to_radians().cos().abs().max(0.01));

    GeoBounds {
        min_latitude: latitude - lat_delta,
        max_latitude: latitude + lat_delta,
        min_longitude: longitude - lng_delta,
        max_longitude: longitude + lng_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_normalizes() {
        assert_eq!(slugify("Devworks Bootcamp"), "devworks-bootcamp");
        assert_eq!(slugify("  Codemasters!!"), "codemasters");
        assert_eq!(slugify("Full-Stack & APIs"), "full-stack-apis");
    }

    #[test]
    fn haversine_boston_to_nyc_is_about_190_miles() {
        let distance = haversine_miles(42.3601, -71.0589, 40.7128, -74.0060);
        assert!((distance - 190.0).abs() < 5.0, "got {distance}");
    }

    #[test]
    fn zero_distance_for_same_point() {
        assert!(haversine_miles(42.0, -71.0, 42.0, -71.0) < 1e-9);
    }

    #[test]
    fn bounding_box_contains_center() {
        let bounds = bounding_box(42.36, -71.05, 10.0);
        assert!(bounds.min_latitude < 42.36 && 42.36 < bounds.max_latitude);
        assert!(bounds.min_longitude < -71.05 && -71.05 < bounds.max_longitude);
    }
}
