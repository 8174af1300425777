pub mod mappers;
pub mod repositories;

pub use repositories::bootcamp_repository::PostgresBootcampRepository;
