//! Assertion surface
//!
//! [`Test`] is the object a test body receives. Every assertion returns
//! `Result<(), Fault>`, so bodies propagate failures with `?`.

mod asserts;
mod parameters;

pub use parameters::AssertParameters;
pub use test::Test;
