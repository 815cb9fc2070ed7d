//! Data models for the test tree
//!
//! Nodes, faults and recorded results shared by the rest of the crate.

mod fault;
mod node;
mod test_result;

pub use fault::{
    invoke_caught, Fault, FaultKind, CONFIGURATION_FAULT, PANIC, PRECONDITION_FAILURE, TEST_FAILURE,
};
pub use node::{TestChild, TestGroup, DEFAULT_FULL_NAME_SEPARATOR, TYPE_FULL_NAME_SEPARATOR};
pub(crate) use node::check_name;
pub use test_result::{GroupFailureRecord, RunSummary, TestFailure, TestResult, TestStatus};
