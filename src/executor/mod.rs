//! Test execution engine
//!
//! Provides the [`TestRunner`] and the parameter objects accepted by its
//! `run_group` / `run_test` entry points.

mod parameters;
mod runner;

pub use parameters::{ChildParameters, GroupBody, TestBody, TestGroupParameters, TestParameters};
pub use runner::TestRunner;
