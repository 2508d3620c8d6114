//! Core domain models and business logic for center applications
//!
//! Everything here is framework-free: the wizard controller, validators and
//! palette gate run identically on the server, in the browser and in tests.

mod application;
mod confirmation;
mod palette;
mod plans;
mod submission;
mod summary;
mod validation;
mod wizard;

#[cfg(feature = "ssr")]
pub mod applications;
#[cfg(feature = "ssr")]
pub mod config;

pub use application::*;
pub use confirmation::*;
pub use palette::*;
pub use plans::*;
pub use submission::*;
pub use summary::*;
pub use validation::*;
pub use wizard::*;
