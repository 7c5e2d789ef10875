//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod hashnode;

pub use hashnode::HashnodeClient;
