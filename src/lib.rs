//! # Page Router
//!
//! History-mode route table and page server for the web front end, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Routes, the route table and history base handling
//! - **Application Layer** ([`application`]) - The router object and session navigation
//! - **API Layer** ([`api`]) - Health check endpoint
//! - **Web Layer** ([`web`]) - HTML pages rendered for each view
//!
//! ## Routes
//!
//! | Path        | View     |
//! |-------------|----------|
//! | `/`         | Home     |
//! | `/login`    | Login    |
//! | `/register` | Register |
//! | `/dev`      | Dev      |
//!
//! Paths are relative to the history base (`BASE_URL`), so with
//! `BASE_URL=/app/` the registration page is served at `/app/register`.
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="/"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AppError, RouteError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Navigation, Navigator, PageRouter};
    pub use crate::domain::entities::{Route, View};
    pub use crate::domain::{RouteTable, WebHistory};
    pub use crate::error::{AppError, RouteError};
    pub use crate::state::AppState;
}
