use crate::application::http::{
    auth::router::AuthApiDoc, bootcamp::router::BootcampApiDoc, course::router::CourseApiDoc,
    file::router::FileApiDoc, health::HealthApiDoc, review::router::ReviewApiDoc,
    user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campdir API"
    ),
    nest(
        (path = "/bootcamps", api = BootcampApiDoc),
        (path = "/courses", api = CourseApiDoc),
        (path = "/reviews", api = ReviewApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/auth", api = AuthApiDoc),
        (path = "/files", api = FileApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
