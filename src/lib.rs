//! Everyone Runner - a programmable test-execution engine
//!
//! Tests are plain closures registered on a [`TestRunner`] inside named,
//! nested groups. The runner contains every failure a body raises, reports
//! it through lifecycle events and keeps going.
//!
//! ## Features
//!
//! - Hierarchical groups and tests with space-joined full names
//! - Lifecycle events with revocable subscriptions
//! - Assertions backed by a runtime-kind comparison registry
//! - Aligned `Expected:` / `Actual:` failure messages
//! - Result recording into a serializable run summary
//!
//! ## Usage
//!
//! ```
//! use everyone_runner::{TestRecorder, TestRunner};
//!
//! let runner = TestRunner::new();
//! let recorder = TestRecorder::attach(&runner);
//!
//! runner.test_group("math", || {
//!     runner.test("adds", |t| t.assert_equal(4, 2 + 2))?;
//!     runner.test("orders", |t| t.assert_greater_than(3, 1))
//! })?;
//!
//! assert!(recorder.summary().is_all_passed());
//! # Ok::<(), everyone_runner::Fault>(())
//! ```

pub mod assertions;
pub mod compare;
pub mod config;
pub mod event;
pub mod executor;
pub mod message;
pub mod models;
pub mod results;
pub mod utils;

pub use assertions::{AssertParameters, Test};
pub use compare::{CompareFunctions, KindFamily, KindPattern, ToValue, Value, ValueKind};
pub use config::RunnerConfig;
pub use event::{Event, Subscription};
pub use executor::{TestGroupParameters, TestParameters, TestRunner};
pub use message::{AssertMessageFunctions, ToStringFunctions};
pub use models::{Fault, FaultKind, RunSummary, TestChild, TestFailure, TestGroup, TestResult, TestStatus};
pub use results::TestRecorder;
