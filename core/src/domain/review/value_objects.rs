use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateReviewInput {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateReviewInput {
    pub review_id: Uuid,
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}
