use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::course::entities::{Course, MinimumSkill};
use crate::entity::courses::{ActiveModel as CourseActiveModel, Model as CourseModel};

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course::from(&model)
    }
}

impl From<&CourseModel> for Course {
    fn from(model: &CourseModel) -> Self {
        Course {
            id: model.id,
            bootcamp_id: model.bootcamp_id,
            user_id: model.user_id,
            title: model.title.clone(),
            description: model.description.clone(),
            weeks: model.weeks,
            tuition: model.tuition,
            minimum_skill: model
                .minimum_skill
                .parse()
                .unwrap_or(MinimumSkill::Beginner),
            scholarship_available: model.scholarship_available,
            bootcamp: None,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub fn to_active_model(course: &Course) -> CourseActiveModel {
    CourseActiveModel {
        id: Set(course.id),
        bootcamp_id: Set(course.bootcamp_id),
        user_id: Set(course.user_id),
        title: Set(course.title.clone()),
        description: Set(course.description.clone()),
        weeks: Set(course.weeks),
        tuition: Set(course.tuition),
        minimum_skill: Set(course.minimum_skill.to_string()),
        scholarship_available: Set(course.scholarship_available),
        created_at: Set(course.created_at.fixed_offset()),
        updated_at: Set(course.updated_at.fixed_offset()),
    }
}
