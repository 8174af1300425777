use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::bootcamp::helpers::slugify;
use crate::domain::bootcamp::value_objects::CreateBootcampInput;
use crate::domain::common::generate_timestamp;
use crate::domain::course::entities::Course;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bootcamp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub careers: Vec<String>,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    /// Mean review rating, maintained by review writes.
    pub average_rating: Option<f64>,
    /// Mean course tuition rounded up to the nearest 10, maintained by course
    /// writes.
    pub average_cost: Option<i32>,
    pub photo: Option<String>,
    /// Courses attached by the list/get expansion; empty when not expanded.
    #[serde(default)]
    pub courses: Vec<Course>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bootcamp {
    pub fn new(input: CreateBootcampInput, user_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();
        let slug = slugify(&input.name);

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            slug,
            name: input.name,
            description: input.description,
            website: input.website,
            email: input.email,
            phone: input.phone,
            address: input.address,
            latitude: None,
            longitude: None,
            city: None,
            state: None,
            zipcode: input.zipcode,
            careers: input.careers,
            housing: input.housing,
            job_assistance: input.job_assistance,
            job_guarantee: input.job_guarantee,
            accept_gi: input.accept_gi,
            average_rating: None,
            average_cost: None,
            photo: None,
            courses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        website: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        careers: Option<Vec<String>>,
        housing: Option<bool>,
        job_assistance: Option<bool>,
        job_guarantee: Option<bool>,
        accept_gi: Option<bool>,
    ) {
        if let Some(name) = name {
            self.slug = slugify(&name);
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(website) = website {
            self.website = Some(website);
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        if let Some(email) = email {
            self.email = Some(email);
        }
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(careers) = careers {
            self.careers = careers;
        }
        if let Some(housing) = housing {
            self.housing = housing;
        }
        if let Some(job_assistance) = job_assistance {
            self.job_assistance = job_assistance;
        }
        if let Some(job_guarantee) = job_guarantee {
            self.job_guarantee = job_guarantee;
        }
        if let Some(accept_gi) = accept_gi {
            self.accept_gi = accept_gi;
        }
        self.updated_at = Utc::now();
    }

    pub fn set_location(
        &mut self,
        latitude: f64,
        longitude: f64,
        city: Option<String>,
        state: Option<String>,
    ) {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self.city = city;
        self.state = state;
    }

    pub fn set_photo(&mut self, object_key: String) {
        self.photo = Some(object_key);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CreateBootcampInput {
        CreateBootcampInput {
            name: "Devworks Bootcamp".to_string(),
            description: "Full stack development".to_string(),
            website: None,
            email: None,
            phone: None,
            address: "233 Bay State Rd Boston MA 02215".to_string(),
            zipcode: Some("02215".to_string()),
            careers: vec!["Web Development".to_string()],
            housing: true,
            job_assistance: true,
            job_guarantee: false,
            accept_gi: true,
        }
    }

    #[test]
    fn new_bootcamp_derives_slug() {
        let bootcamp = Bootcamp::new(input(), Uuid::new_v4());
        assert_eq!(bootcamp.slug, "devworks-bootcamp");
        assert!(bootcamp.courses.is_empty());
        assert_eq!(bootcamp.average_cost, None);
    }

    #[test]
    fn renaming_refreshes_slug() {
        let mut bootcamp = Bootcamp::new(input(), Uuid::new_v4());
        bootcamp.update(
            Some("ModernTech Bootcamp".to_string()),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        );
        assert_eq!(bootcamp.name, "ModernTech Bootcamp");
        assert_eq!(bootcamp.slug, "moderntech-bootcamp");
    }
}
