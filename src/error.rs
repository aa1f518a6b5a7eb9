//! Error types for route configuration and page serving.
//!
//! - [`RouteError`] - invalid route table or history base, raised at construction
//! - [`AppError`] - request-level failures rendered as HTML error pages

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

/// Misconfiguration detected while building a route table or history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("duplicate route path '{path}' (conflicts with '{existing}')")]
    DuplicatePath { path: String, existing: String },

    #[error("invalid base URL '{base}': {reason}")]
    InvalidBase { base: String, reason: &'static str },
}

/// Error page template shared by every [`AppError`] variant.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    code: &'static str,
    message: String,
    details: String,
}

/// Methods a page answers, sent in `Allow` with every 405.
pub const PAGE_METHODS: &str = "GET, HEAD";

#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, details: Value },
    MethodNotAllowed { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn method_not_allowed(message: impl Into<String>, details: Value) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::MethodNotAllowed { message, details } => {
                ("method_not_allowed", message, details)
            }
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            code,
            message,
            details: details.to_string(),
        };

        if status == StatusCode::METHOD_NOT_ALLOWED {
            return (status, [(header::ALLOW, PAGE_METHODS)], page).into_response();
        }
        (status, page).into_response()
    }
}
