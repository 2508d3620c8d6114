pub mod apply;
pub mod common;
pub mod icon;
pub mod pages;

pub use icon::{Icon, icons};
