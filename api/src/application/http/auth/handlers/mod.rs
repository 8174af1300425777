pub mod forgot_password;
pub mod get_me;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod update_details;
pub mod update_password;

use axum_cookie::prelude::*;

use crate::application::http::server::app_state::AppState;

/// Drop the signed token into the `token` cookie alongside the JSON body.
pub(crate) fn set_token_cookie(state: &AppState, cookie: &CookieManager, token: &str) {
    let builder = Cookie::builder("token", token.to_string())
        .path("/")
        .http_only(true)
        .secure(state.args.server.cookie_secure);

    cookie.add(builder.build());
}
