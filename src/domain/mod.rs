//! Domain layer: routes, the route table and history-mode locations.
//!
//! Nothing here knows about HTTP. The web layer and the
//! [`crate::application::services::Navigator`] are built on top of it.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::Route`] and the [`entities::View`] it points at
//! - [`route_table`] - ordered, validated route collection with path lookup
//! - [`history`] - base URL normalization and location/href conversion

pub mod entities;
pub mod history;
pub mod route_table;

pub use history::WebHistory;
pub use route_table::RouteTable;
