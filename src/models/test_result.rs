//! Recorded outcomes of tests and groups
//!
//! Defines test results, failure records and run summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::fault::{Fault, FaultKind};

/// Test execution status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Pass,
    /// An assertion failed
    Fail,
    /// The body crashed: a panic or any non-assertion fault
    Error,
}

impl TestStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            TestStatus::Pass => "✓",
            TestStatus::Fail => "✗",
            TestStatus::Error => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestStatus::Pass)
    }

    /// Status for a test that raised `fault`
    pub fn from_fault(fault: &Fault) -> Self {
        if fault.kind().is_assertion() {
            TestStatus::Fail
        } else {
            TestStatus::Error
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Pass => write!(f, "PASS"),
            TestStatus::Fail => write!(f, "FAIL"),
            TestStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// A failed test or group paired with what it raised
#[derive(Clone, Debug)]
pub struct TestFailure {
    full_name: String,
    fault: Fault,
}

impl TestFailure {
    pub fn create(full_name: impl Into<String>, fault: Fault) -> Result<Self, Fault> {
        let full_name = full_name.into();
        super::node::check_name(&full_name, "full_name")?;
        Ok(Self { full_name, fault })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn fault(&self) -> &Fault {
        &self.fault
    }
}

/// Result of a single test execution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestResult {
    pub full_name: String,
    pub status: TestStatus,
    pub duration_ms: u64,
    pub started_at: DateTime<Utc>,
    pub message: Option<String>,
    pub fault_kind: Option<FaultKind>,
}

impl TestResult {
    pub fn pass(full_name: impl Into<String>, started_at: DateTime<Utc>, duration_ms: u64) -> Self {
        Self {
            full_name: full_name.into(),
            status: TestStatus::Pass,
            duration_ms,
            started_at,
            message: None,
            fault_kind: None,
        }
    }

    pub fn fail(full_name: impl Into<String>, started_at: DateTime<Utc>, duration_ms: u64, fault: &Fault) -> Self {
        Self {
            full_name: full_name.into(),
            status: TestStatus::from_fault(fault),
            duration_ms,
            started_at,
            message: Some(fault.message().to_string()),
            fault_kind: Some(fault.kind()),
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.full_name,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Failure of a group body outside any test
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupFailureRecord {
    pub full_name: String,
    pub message: String,
    pub fault_kind: FaultKind,
}

/// Summary of everything observed during a run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub groups_started: usize,
    pub total_duration_ms: u64,
    pub results: Vec<TestResult>,
    pub group_failures: Vec<GroupFailureRecord>,
}

impl RunSummary {
    pub fn new(results: Vec<TestResult>, group_failures: Vec<GroupFailureRecord>, groups_started: usize) -> Self {
        let total = results.len();
        let passed = results
            .iter()
            .filter(|r| r.status == TestStatus::Pass)
            .count();
        let failed = results
            .iter()
            .filter(|r| r.status == TestStatus::Fail)
            .count();
        let errors = results
            .iter()
            .filter(|r| r.status == TestStatus::Error)
            .count();
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            total,
            passed,
            failed,
            errors,
            groups_started,
            total_duration_ms,
            results,
            group_failures,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Every test passed and no group body failed
    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total && self.group_failures.is_empty()
    }
}
