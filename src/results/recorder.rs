//! Collects lifecycle events into results

use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::assertions::Test;
use crate::event::Subscription;
use crate::executor::TestRunner;
use crate::models::{Fault, GroupFailureRecord, RunSummary, TestFailure, TestResult};
use crate::utils::Timer;

struct RunningTest {
    test: Test,
    started_at: DateTime<Utc>,
    timer: Timer,
    /// Index of a pass already recorded for this test
    passed_at: Option<usize>,
}

#[derive(Default)]
struct RecorderState {
    running: Vec<RunningTest>,
    results: Vec<TestResult>,
    failures: Vec<TestFailure>,
    group_failures: Vec<GroupFailureRecord>,
    groups_started: usize,
}

impl RecorderState {
    fn timing(&self, test: &Test) -> (DateTime<Utc>, u64) {
        self.running
            .iter()
            .rev()
            .find(|r| r.test.ptr_eq(test))
            .map(|r| (r.started_at, r.timer.elapsed_ms()))
            .unwrap_or_else(|| (Utc::now(), 0))
    }

    fn running_mut(&mut self, test: &Test) -> Option<&mut RunningTest> {
        self.running.iter_mut().rev().find(|r| r.test.ptr_eq(test))
    }

    fn record_failure(&mut self, full_name: String, fault: &Fault) {
        if let Ok(failure) = TestFailure::create(full_name, fault.clone()) {
            self.failures.push(failure);
        }
    }
}

/// Subscribes to a runner and records every test outcome
pub struct TestRecorder {
    state: Rc<RefCell<RecorderState>>,
    subscriptions: Vec<Subscription>,
}

impl TestRecorder {
    /// Start recording events from `runner`
    pub fn attach(runner: &TestRunner) -> Self {
        let state = Rc::new(RefCell::new(RecorderState::default()));

        let subscriptions = vec![
            {
                let state = state.clone();
                runner.on_test_group_started(move |_| state.borrow_mut().groups_started += 1)
            },
            {
                let state = state.clone();
                runner.on_test_group_failed(move |group, fault| {
                    let mut state = state.borrow_mut();
                    state.group_failures.push(GroupFailureRecord {
                        full_name: group.full_name(),
                        message: fault.message().to_string(),
                        fault_kind: fault.kind(),
                    });
                    state.record_failure(group.full_name(), fault);
                })
            },
            {
                let state = state.clone();
                runner.on_test_started(move |test| {
                    state.borrow_mut().running.push(RunningTest {
                        test: test.clone(),
                        started_at: Utc::now(),
                        timer: Timer::start(test.full_name()),
                        passed_at: None,
                    });
                })
            },
            {
                let state = state.clone();
                runner.on_test_passed(move |test| {
                    let mut state = state.borrow_mut();
                    let (started_at, duration_ms) = state.timing(test);
                    let index = state.results.len();
                    state
                        .results
                        .push(TestResult::pass(test.full_name(), started_at, duration_ms));
                    if let Some(running) = state.running_mut(test) {
                        running.passed_at = Some(index);
                    }
                })
            },
            {
                let state = state.clone();
                runner.on_test_failed(move |test, fault| {
                    let mut state = state.borrow_mut();
                    let (started_at, duration_ms) = state.timing(test);
                    let result =
                        TestResult::fail(test.full_name(), started_at, duration_ms, fault);
                    // A later passed subscriber can still fail the test
                    match state.running_mut(test).and_then(|r| r.passed_at.take()) {
                        Some(index) => state.results[index] = result,
                        None => state.results.push(result),
                    }
                    state.record_failure(test.full_name(), fault);
                })
            },
            {
                let state = state.clone();
                runner.on_test_ended(move |test| {
                    let mut state = state.borrow_mut();
                    if let Some(pos) = state.running.iter().rposition(|r| r.test.ptr_eq(test)) {
                        let running = state.running.remove(pos);
                        running.timer.stop();
                    }
                })
            },
        ];

        debug!("Recorder attached with {} subscriptions", subscriptions.len());
        Self {
            state,
            subscriptions,
        }
    }

    /// Stop recording; results gathered so far are kept
    pub fn detach(&self) {
        for subscription in &self.subscriptions {
            subscription.dispose();
        }
    }

    pub fn results(&self) -> Vec<TestResult> {
        self.state.borrow().results.clone()
    }

    /// Every failed test and group, in the order they failed
    pub fn failures(&self) -> Vec<TestFailure> {
        self.state.borrow().failures.clone()
    }

    pub fn summary(&self) -> RunSummary {
        let state = self.state.borrow();
        RunSummary::new(
            state.results.clone(),
            state.group_failures.clone(),
            state.groups_started,
        )
    }
}
