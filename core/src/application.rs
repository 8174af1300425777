use crate::domain::common::{CampdirConfig, services::Service};
use crate::infrastructure::{
    bootcamp::PostgresBootcampRepository,
    course::PostgresCourseRepository,
    crypto::Argon2Hasher,
    db::postgres::{Postgres, PostgresConfig},
    geocode::NominatimGeocoder,
    health::PostgresHealthCheckRepository,
    jwt::Hs256TokenSigner,
    mailer::LogMailer,
    object_storage::S3ObjectStorage,
    review::PostgresReviewRepository,
    storage::PostgresStoredObjectRepository,
    user::PostgresUserRepository,
};

/// The fully wired service the API crate runs against.
pub type CampdirService = Service<
    PostgresBootcampRepository,
    PostgresCourseRepository,
    PostgresReviewRepository,
    PostgresUserRepository,
    PostgresStoredObjectRepository,
    S3ObjectStorage,
    Argon2Hasher,
    Hs256TokenSigner,
    LogMailer,
    NominatimGeocoder,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: CampdirConfig) -> anyhow::Result<CampdirService> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.connection_url(),
    })
    .await?;
    let db = postgres.get_db();

    let geocoder = NominatimGeocoder::new(&config.geocoder)
        .map_err(|e| anyhow::anyhow!("failed to initialize geocoder: {e}"))?;

    Ok(Service::new(
        PostgresBootcampRepository::new(db.clone()),
        PostgresCourseRepository::new(db.clone()),
        PostgresReviewRepository::new(db.clone()),
        PostgresUserRepository::new(db.clone()),
        PostgresStoredObjectRepository::new(db.clone()),
        S3ObjectStorage::new(config.object_storage.clone()),
        Argon2Hasher::new(),
        Hs256TokenSigner::new(&config.auth),
        LogMailer::new(),
        geocoder,
        PostgresHealthCheckRepository::new(db),
    ))
}
