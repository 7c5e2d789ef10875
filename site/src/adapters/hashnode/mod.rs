//! Hashnode adapter
//!
//! Reads a publication's posts through the Hashnode GraphQL API.

pub mod client;

pub use client::HashnodeClient;
