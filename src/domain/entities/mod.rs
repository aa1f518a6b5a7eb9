//! Core domain entities.
//!
//! - [`View`] - a page-level view, opaque to the router
//! - [`Route`] - a path bound to a view

pub mod route;
pub mod view;

pub use route::Route;
pub use view::View;
