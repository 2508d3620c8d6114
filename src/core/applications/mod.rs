//! Server side of center applications
//!
//! - In-memory registry of accepted applications, keyed by admin email
//! - REST endpoints for submission and email availability

pub mod api;
pub mod registry;

pub use api::{ApplicationsState, applications_router};
pub use registry::{ApplicationRegistry, RegistryError};
