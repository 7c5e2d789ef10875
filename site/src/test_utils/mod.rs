//! Test utilities
//!
//! Manual mock implementations of the publishing port and test fixtures.
//!
//! Manual mocks instead of mockall: the gated client needs to hand out
//! responses in an order chosen by the test, which is easier to express by hand.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
