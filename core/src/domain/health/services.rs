use crate::domain::{
    auth::ports::{HasherPort, MailerPort, TokenSignerPort},
    bootcamp::ports::{BootcampRepository, GeocoderPort},
    common::{entities::app_errors::CoreError, services::Service},
    course::ports::CourseRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    review::ports::ReviewRepository,
    storage::ports::{ObjectStoragePort, StoredObjectRepository},
    user::ports::UserRepository,
};

impl<B, C, R, U, SO, OS, H, T, M, G, HC> HealthCheckService
    for Service<B, C, R, U, SO, OS, H, T, M, G, HC>
where
    B: BootcampRepository,
    C: CourseRepository,
    R: ReviewRepository,
    U: UserRepository,
    SO: StoredObjectRepository,
    OS: ObjectStoragePort,
    H: HasherPort,
    T: TokenSignerPort,
    M: MailerPort,
    G: GeocoderPort,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
