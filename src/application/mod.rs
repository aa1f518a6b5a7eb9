//! Application layer services.
//!
//! Combines the route table and history into the router object the
//! application installs at startup.
//!
//! # Available Services
//!
//! - [`services::page_router::PageRouter`] - Stateless location resolution and href building
//! - [`services::navigator::Navigator`] - Session navigation with back/forward entries

pub mod services;
