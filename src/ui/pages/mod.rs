//! Application pages module
//!
//! - Landing page (home)
//! - Apply page (center application wizard)
//! - Not found page

mod apply;
mod landing;
mod not_found;

pub use apply::ApplyPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
