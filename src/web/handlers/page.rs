//! Page dispatcher for history-mode requests.
//!
//! Request paths are percent-decoded before matching, so `/%72egister`
//! renders the registration page. An escape that decodes to `?` or `#`
//! never matches: those characters only delimit the query and fragment.

use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use serde_json::json;
use std::borrow::Cow;

use super::{dev_page, home_page, login_page, register_page};
use crate::application::services::Navigation;
use crate::domain::entities::View;
use crate::error::AppError;
use crate::state::AppState;

/// Renders the page bound to the request path.
///
/// # Flow
///
/// 1. Percent-decode the path and strip the history base
/// 2. Resolve the location against the route table
/// 3. Render the bound view
///
/// # Errors
///
/// - [`AppError::NotFound`] if the path lies outside the base or no route matches
/// - [`AppError::MethodNotAllowed`] for methods other than `GET` and `HEAD`
pub async fn page_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    let Some(path) = decode_path(uri.path()) else {
        tracing::debug!(path = uri.path(), "Escaped query or fragment delimiter in path");
        return Err(AppError::not_found(
            "Page not found",
            json!({ "path": uri.path() }),
        ));
    };
    let path: &str = &path;

    let Some(navigation) = state.router.resolve_pathname(path) else {
        tracing::debug!(path, "Path outside history base");
        return Err(AppError::not_found(
            "Page not found",
            json!({ "path": path, "base": state.router.history().base() }),
        ));
    };

    let Some(view) = navigation.view else {
        tracing::debug!(path, location = %navigation.location, "No route matched");
        return Err(AppError::not_found(
            "Page not found",
            json!({ "path": path, "location": navigation.location }),
        ));
    };

    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::method_not_allowed(
            "Pages only accept GET requests",
            json!({ "method": method.as_str(), "path": path }),
        ));
    }

    Ok(render(&state, view, &navigation))
}

/// Percent-decodes a request path, invalid UTF-8 replaced.
///
/// Returns `None` if decoding produced a `?` or `#`.
fn decode_path(raw: &str) -> Option<Cow<'_, str>> {
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    if decoded.contains(['?', '#']) {
        return None;
    }
    Some(decoded)
}

/// Renders `view` for an already resolved navigation.
pub fn render(state: &AppState, view: View, navigation: &Navigation) -> Response {
    match view {
        View::Home => home_page(state).into_response(),
        View::Login => login_page(state).into_response(),
        View::Register => register_page(state).into_response(),
        View::Dev => dev_page(state, navigation).into_response(),
    }
}
