//! HTML page handlers, one per view.

mod dev;
mod home;
mod layout;
mod login;
mod page;
mod register;

pub use dev::{DevTemplate, RouteRow, dev_page};
pub use home::{HomeTemplate, home_page};
pub use layout::Nav;
pub use login::{LoginTemplate, login_page};
pub use page::{page_handler, render};
pub use register::{RegisterTemplate, register_page};
