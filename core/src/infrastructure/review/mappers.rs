use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::review::entities::Review;
use crate::entity::reviews::{ActiveModel as ReviewActiveModel, Model as ReviewModel};

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review::from(&model)
    }
}

impl From<&ReviewModel> for Review {
    fn from(model: &ReviewModel) -> Self {
        Review {
            id: model.id,
            bootcamp_id: model.bootcamp_id,
            user_id: model.user_id,
            title: model.title.clone(),
            text: model.text.clone(),
            rating: model.rating,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub fn to_active_model(review: &Review) -> ReviewActiveModel {
    ReviewActiveModel {
        id: Set(review.id),
        bootcamp_id: Set(review.bootcamp_id),
        user_id: Set(review.user_id),
        title: Set(review.title.clone()),
        text: Set(review.text.clone()),
        rating: Set(review.rating),
        created_at: Set(review.created_at.fixed_offset()),
        updated_at: Set(review.updated_at.fixed_offset()),
    }
}
