pub mod mappers;
pub mod repositories;

pub use repositories::review_repository::PostgresReviewRepository;
