/// Aggregate service: one instance wires every repository and adapter the
/// domain needs, and each domain module implements its service trait on it.
#[derive(Clone)]
pub struct Service<B, C, R, U, SO, OS, H, T, M, G, HC> {
    pub bootcamp_repository: B,
    pub course_repository: C,
    pub review_repository: R,
    pub user_repository: U,
    pub stored_object_repository: SO,
    pub object_storage: OS,
    pub hasher: H,
    pub token_signer: T,
    pub mailer: M,
    pub geocoder: G,
    pub health_check_repository: HC,
}

impl<B, C, R, U, SO, OS, H, T, M, G, HC> Service<B, C, R, U, SO, OS, H, T, M, G, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bootcamp_repository: B,
        course_repository: C,
        review_repository: R,
        user_repository: U,
        stored_object_repository: SO,
        object_storage: OS,
        hasher: H,
        token_signer: T,
        mailer: M,
        geocoder: G,
        health_check_repository: HC,
    ) -> Self {
        Self {
            bootcamp_repository,
            course_repository,
            review_repository,
            user_repository,
            stored_object_repository,
            object_storage,
            hasher,
            token_signer,
            mailer,
            geocoder,
            health_check_repository,
        }
    }
}
