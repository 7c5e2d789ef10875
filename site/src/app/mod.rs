//! Application layer
//!
//! Stateful widgets and startup loading that sit between the ports and the
//! HTTP handlers.

pub mod blog_list;
pub mod catalog;

pub use blog_list::BlogList;
pub use catalog::load_catalog;
