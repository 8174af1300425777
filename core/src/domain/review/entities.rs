use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;
use crate::domain::review::value_objects::CreateReviewInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub bootcamp_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub text: String,
    /// 1 to 10 inclusive.
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(input: CreateReviewInput, bootcamp_id: Uuid, user_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            bootcamp_id,
            user_id,
            title: input.title,
            text: input.text,
            rating: input.rating,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, title: Option<String>, text: Option<String>, rating: Option<i32>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(text) = text {
            self.text = text;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        self.updated_at = Utc::now();
    }
}

/// Mean rating across a bootcamp's reviews.
pub fn average_rating(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let mean = ratings.iter().map(|r| *r as f64).sum::<f64>() / ratings.len() as f64;
    // One decimal place is plenty for a 1-10 scale.
    Some((mean * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rating_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[7, 8]), Some(7.5));
        assert_eq!(average_rating(&[10, 9, 9]), Some(9.3));
    }

    #[test]
    fn average_rating_of_no_reviews_is_none() {
        assert_eq!(average_rating(&[]), None);
    }
}
