use uuid::Uuid;

use crate::domain::course::entities::MinimumSkill;

#[derive(Debug, Clone)]
pub struct CreateCourseInput {
    pub title: String,
    pub description: String,
    pub weeks: i32,
    pub tuition: i32,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateCourseInput {
    pub course_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub weeks: Option<i32>,
    pub tuition: Option<i32>,
    pub minimum_skill: Option<MinimumSkill>,
    pub scholarship_available: Option<bool>,
}
