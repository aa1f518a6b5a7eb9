//! Routing services built on the domain layer.

pub mod navigator;
pub mod page_router;

pub use navigator::Navigator;
pub use page_router::{Navigation, PageRouter};
