use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;
use crate::domain::course::value_objects::CreateCourseInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MinimumSkill {
    Beginner,
    Intermediate,
    Advanced,
}

impl MinimumSkill {
    pub fn as_str(&self) -> &'static str {
        match self {
            MinimumSkill::Beginner => "beginner",
            MinimumSkill::Intermediate => "intermediate",
            MinimumSkill::Advanced => "advanced",
        }
    }
}

impl fmt::Display for MinimumSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MinimumSkill {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(MinimumSkill::Beginner),
            "intermediate" => Ok(MinimumSkill::Intermediate),
            "advanced" => Ok(MinimumSkill::Advanced),
            _ => Err(()),
        }
    }
}

/// Name/description summary of the owning bootcamp, attached when a single
/// course is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseBootcampSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub bootcamp_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub weeks: i32,
    pub tuition: i32,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootcamp: Option<CourseBootcampSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn new(input: CreateCourseInput, bootcamp_id: Uuid, user_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            bootcamp_id,
            user_id,
            title: input.title,
            description: input.description,
            weeks: input.weeks,
            tuition: input.tuition,
            minimum_skill: input.minimum_skill,
            scholarship_available: input.scholarship_available,
            bootcamp: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        weeks: Option<i32>,
        tuition: Option<i32>,
        minimum_skill: Option<MinimumSkill>,
        scholarship_available: Option<bool>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(weeks) = weeks {
            self.weeks = weeks;
        }
        if let Some(tuition) = tuition {
            self.tuition = tuition;
        }
        if let Some(minimum_skill) = minimum_skill {
            self.minimum_skill = minimum_skill;
        }
        if let Some(scholarship_available) = scholarship_available {
            self.scholarship_available = scholarship_available;
        }
        self.updated_at = Utc::now();
    }
}

/// Mean tuition rounded up to the nearest 10, as recorded on the bootcamp.
pub fn average_cost(tuitions: &[i32]) -> Option<i32> {
    if tuitions.is_empty() {
        return None;
    }
    let mean = tuitions.iter().map(|t| *t as f64).sum::<f64>() / tuitions.len() as f64;
    Some(((mean / 10.0).ceil() * 10.0) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_cost_rounds_up_to_nearest_ten() {
        assert_eq!(average_cost(&[10000, 12000]), Some(11000));
        assert_eq!(average_cost(&[9995, 9994]), Some(10000));
        assert_eq!(average_cost(&[1]), Some(10));
    }

    #[test]
    fn average_cost_of_no_courses_is_none() {
        assert_eq!(average_cost(&[]), None);
    }

    #[test]
    fn skill_round_trips_through_str() {
        for skill in [
            MinimumSkill::Beginner,
            MinimumSkill::Intermediate,
            MinimumSkill::Advanced,
        ] {
            assert_eq!(skill.as_str().parse::<MinimumSkill>().unwrap(), skill);
        }
        assert!("expert".parse::<MinimumSkill>().is_err());
    }
}
