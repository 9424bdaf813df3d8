//! Session-gated pages.

use askama::Template;
use axum::response::Html;

use crate::error::AppResult;
use crate::session::SessionAuth;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    user_id: String,
}

#[derive(Template)]
#[template(path = "profile.html")]
struct ProfileTemplate {
    user_id: String,
}

/// GET / — the landing page. The authenticate gate guarantees a logged-in
/// visitor by the time this runs.
pub async fn home(auth: SessionAuth) -> AppResult<Html<String>> {
    let page = HomeTemplate {
        user_id: auth.current_user_id().await,
    };
    Ok(Html(page.render()?))
}

/// GET /profile
pub async fn profile(auth: SessionAuth) -> AppResult<Html<String>> {
    let page = ProfileTemplate {
        user_id: auth.current_user_id().await,
    };
    Ok(Html(page.render()?))
}
