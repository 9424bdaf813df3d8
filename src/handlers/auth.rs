//! Login and logout handlers.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use crate::error::{AppResult, AuthError};
use crate::middleware::redirect;
use crate::session::SessionAuth;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    /// Error message shown above the form; empty when there is none.
    error: String,
}

/// Credentials submitted by the login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /login — render the form. The guest gate keeps authenticated
/// visitors out of here.
pub async fn login_form() -> AppResult<Html<String>> {
    let page = LoginTemplate {
        error: String::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /login — validate credentials and establish the session.
///
/// On success: persist the user id and 302 to `/`. On failure: 401 and the
/// form again, with one generic message for both unknown email and wrong
/// password.
pub async fn login(
    State(state): State<AppState>,
    auth: SessionAuth,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    match crate::auth::login(state.users.as_ref(), &form.email, &form.password) {
        Ok(user) => {
            auth.set_user_id(&user.sid).await?;
            Ok(redirect(StatusCode::FOUND, "/"))
        }
        Err(AuthError::InvalidCredentials) => {
            let page = LoginTemplate {
                error: "Invalid email or password.".to_string(),
            };
            Ok((StatusCode::UNAUTHORIZED, Html(page.render()?)).into_response())
        }
    }
}

/// POST /logout — clear the session and send the visitor to the login page,
/// whether or not they were logged in.
pub async fn logout(auth: SessionAuth) -> AppResult<Response> {
    auth.clear().await?;
    Ok(redirect(StatusCode::FOUND, "/login"))
}
