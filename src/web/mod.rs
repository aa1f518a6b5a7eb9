//! Web layer serving the application's pages.
//!
//! Renders each [`crate::domain::entities::View`] server-side with Askama
//! templates, mounted under the configured history base.
//!
//! # Modules
//!
//! - [`handlers`] - Page templates and the page dispatcher
//! - [`middleware`] - Request tracing
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
