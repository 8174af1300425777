use super::handlers::forgot_password::{__path_forgot_password, forgot_password};
use super::handlers::get_me::{__path_get_me, get_me};
use super::handlers::login::{__path_login, login};
use super::handlers::register::{__path_register, register};
use super::handlers::reset_password::{__path_reset_password, reset_password};
use super::handlers::update_details::{__path_update_details, update_details};
use super::handlers::update_password::{__path_update_password, update_password};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    register,
    login,
    get_me,
    update_details,
    update_password,
    forgot_password,
    reset_password
))]
pub struct AuthApiDoc;

pub fn auth_routes(state: AppState) -> Router<AppState> {
    let root = state.args.server.root_path.clone();

    Router::new()
        .route(&format!("{root}/auth/register"), post(register))
        .route(&format!("{root}/auth/login"), post(login))
        .route(&format!("{root}/auth/me"), get(get_me))
        .route(&format!("{root}/auth/updatedetails"), put(update_details))
        .route(&format!("{root}/auth/updatepassword"), put(update_password))
        .route(&format!("{root}/auth/forgotpassword"), post(forgot_password))
        .route(
            &format!("{root}/auth/resetpassword/{{reset_token}}"),
            put(reset_password),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
