//! Test execution runner
//!
//! Runs groups and tests synchronously, tracks the current group and fires
//! lifecycle events. Faults and panics raised by a body are contained and
//! reported through the failure events.
//!
//! Panics are caught with `catch_unwind`, so the default panic hook still
//! prints its `thread ... panicked at` line to stderr for every contained
//! panic. Install a custom hook with `std::panic::set_hook` to silence it.

use futures::executor::block_on;
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::assertions::Test;
use crate::compare::{CompareFunctions, ToValue};
use crate::config::RunnerConfig;
use crate::event::{Event, Subscription};
use crate::message::AssertMessageFunctions;
use crate::models::{check_name, invoke_caught, Fault, TestChild, TestGroup};

use super::parameters::{TestGroupParameters, TestParameters};

type TestFilter = Box<dyn Fn(&Test) -> bool>;

/// Restores the runner's current group when a group call finishes
struct CursorGuard<'a> {
    cursor: &'a RefCell<Option<TestGroup>>,
    previous: Option<TestGroup>,
}

impl<'a> CursorGuard<'a> {
    fn enter(cursor: &'a RefCell<Option<TestGroup>>, group: TestGroup) -> Self {
        let previous = cursor.replace(Some(group));
        Self { cursor, previous }
    }
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        *self.cursor.borrow_mut() = self.previous.take();
    }
}

/// Runs test groups and tests and reports what happened to subscribers
pub struct TestRunner {
    config: RunnerConfig,
    compare_functions: Rc<CompareFunctions>,
    message_functions: Rc<AssertMessageFunctions>,
    test_filter: Option<TestFilter>,
    current_group: RefCell<Option<TestGroup>>,

    group_started: Event<TestGroup>,
    group_failed: Event<(TestGroup, Fault)>,
    group_ended: Event<TestGroup>,
    test_started: Event<Test>,
    test_failed: Event<(Test, Fault)>,
    test_passed: Event<Test>,
    test_ended: Event<Test>,
}

impl TestRunner {
    /// Create a runner with the default configuration
    pub fn new() -> Self {
        Self::from_config(RunnerConfig::default())
    }

    pub fn from_config(config: RunnerConfig) -> Self {
        Self {
            config,
            compare_functions: Rc::new(CompareFunctions::new()),
            message_functions: Rc::new(AssertMessageFunctions::new()),
            test_filter: None,
            current_group: RefCell::new(None),
            group_started: Event::new(),
            group_failed: Event::new(),
            group_ended: Event::new(),
            test_started: Event::new(),
            test_failed: Event::new(),
            test_passed: Event::new(),
            test_ended: Event::new(),
        }
    }

    /// Use `compare_functions` for every test created by this runner
    pub fn with_compare_functions(mut self, compare_functions: CompareFunctions) -> Self {
        self.compare_functions = Rc::new(compare_functions);
        self
    }

    /// Use `message_functions` for every test created by this runner
    pub fn with_message_functions(mut self, message_functions: AssertMessageFunctions) -> Self {
        self.message_functions = Rc::new(message_functions);
        self
    }

    /// Only invoke tests for which `filter` returns `true`
    pub fn with_test_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Test) -> bool + 'static,
    {
        self.test_filter = Some(Box::new(filter));
        self
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn compare_functions(&self) -> &CompareFunctions {
        &self.compare_functions
    }

    pub fn message_functions(&self) -> &AssertMessageFunctions {
        &self.message_functions
    }

    /// The group whose body is currently running, if any
    pub fn current_group(&self) -> Option<TestGroup> {
        self.current_group.borrow().clone()
    }

    /// Whether `test`'s body should run
    pub fn should_invoke_test(&self, test: &Test) -> bool {
        if self.config.should_skip(&test.full_name()) {
            return false;
        }
        self.test_filter.as_ref().map_or(true, |filter| filter(test))
    }

    /// Render `value` with the runner's configured stringification
    pub fn to_string(&self, value: impl ToValue) -> String {
        self.message_functions.render(&value.to_value())
    }

    /// Run a group of tests
    ///
    /// A fault or panic from `body` or a `group_started` subscriber is
    /// reported through `group_failed`. An invalid name is returned as an
    /// error, and so is a fault raised by a `group_failed` or `group_ended`
    /// subscriber of a nested group, so that the enclosing group reports it.
    pub fn test_group<F>(&self, name: impl Into<String>, body: F) -> Result<(), Fault>
    where
        F: FnOnce() -> Result<(), Fault>,
    {
        let separator = self.config.full_name_separator.clone();
        self.test_group_with(name, separator, body)
    }

    /// [`TestRunner::test_group`] with an explicit full-name separator
    pub fn test_group_with<F>(
        &self,
        name: impl Into<String>,
        full_name_separator: impl Into<String>,
        body: F,
    ) -> Result<(), Fault>
    where
        F: FnOnce() -> Result<(), Fault>,
    {
        let name = name.into();
        check_name(&name, "name")?;

        let group = TestGroup::create(name, self.current_group(), full_name_separator)?;
        let _cursor = CursorGuard::enter(&self.current_group, group.clone());
        debug!("Group started: {}", group);

        let result = invoke_caught(|| {
            self.group_started.invoke(&group);
            body()
        });

        let mut escaped = None;
        if let Err(fault) = result {
            warn!("Group {} failed: {}", group, fault);
            let args = (group.clone(), fault);
            escaped = notify(|| self.group_failed.invoke(&args)).err();
        }

        let ended = notify(|| self.group_ended.invoke(&group));
        debug!("Group ended: {}", group);
        escalate(group.as_child(), ended.err().or(escaped))
    }

    /// Run a single test in the current group
    ///
    /// A fault or panic from `body`, or from a `test_started` or
    /// `test_passed` subscriber, is reported through `test_failed` and does
    /// not fail the enclosing group. An invalid name is returned as an
    /// error, and so is a fault raised by a `test_failed` or `test_ended`
    /// subscriber while the test is inside a group.
    pub fn test<F>(&self, name: impl Into<String>, body: F) -> Result<(), Fault>
    where
        F: FnOnce(&Test) -> Result<(), Fault>,
    {
        let separator = self.config.full_name_separator.clone();
        self.test_with(name, separator, body)
    }

    /// [`TestRunner::test`] with an explicit full-name separator
    pub fn test_with<F>(
        &self,
        name: impl Into<String>,
        full_name_separator: impl Into<String>,
        body: F,
    ) -> Result<(), Fault>
    where
        F: FnOnce(&Test) -> Result<(), Fault>,
    {
        let name = name.into();
        check_name(&name, "name")?;

        let test = Test::create(
            name,
            self.current_group(),
            full_name_separator,
            self.compare_functions.clone(),
            self.message_functions.clone(),
        )?;

        if !self.should_invoke_test(&test) {
            debug!("Test skipped: {}", test);
            return Ok(());
        }

        debug!("Test started: {}", test);
        let result = invoke_caught(|| {
            self.test_started.invoke(&test);
            body(&test)?;
            info!("✓ {}", test);
            self.test_passed.invoke(&test);
            Ok(())
        });

        let mut escaped = None;
        if let Err(fault) = result {
            warn!("✗ {}: {}", test, fault);
            let args = (test.clone(), fault);
            escaped = notify(|| self.test_failed.invoke(&args)).err();
        }

        let ended = notify(|| self.test_ended.invoke(&test));
        escalate(test.as_child(), ended.err().or(escaped))
    }

    /// Run a group named after the type `T`
    pub fn test_type_group<T: ?Sized, F>(&self, body: F) -> Result<(), Fault>
    where
        F: FnOnce() -> Result<(), Fault>,
    {
        let separator = self.config.type_full_name_separator.clone();
        self.test_group_with(std::any::type_name::<T>(), separator, body)
    }

    /// Run a test named after the type `T`
    pub fn test_type<T: ?Sized, F>(&self, body: F) -> Result<(), Fault>
    where
        F: FnOnce(&Test) -> Result<(), Fault>,
    {
        let separator = self.config.type_full_name_separator.clone();
        self.test_with(std::any::type_name::<T>(), separator, body)
    }

    /// Run a group named after a method
    pub fn test_method_group<F>(&self, method_name: impl Into<String>, body: F) -> Result<(), Fault>
    where
        F: FnOnce() -> Result<(), Fault>,
    {
        let separator = self.config.type_full_name_separator.clone();
        self.test_group_with(method_name, separator, body)
    }

    /// Run a test named after a method
    pub fn test_method<F>(&self, method_name: impl Into<String>, body: F) -> Result<(), Fault>
    where
        F: FnOnce(&Test) -> Result<(), Fault>,
    {
        let separator = self.config.type_full_name_separator.clone();
        self.test_with(method_name, separator, body)
    }

    /// Run a group whose body is a future, blocking until it completes
    pub fn test_group_async<F, Fut>(&self, name: impl Into<String>, body: F) -> Result<(), Fault>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), Fault>>,
    {
        self.test_group(name, || block_on(body()))
    }

    /// Run a test whose body is a future, blocking until it completes
    pub fn test_async<F, Fut>(&self, name: impl Into<String>, body: F) -> Result<(), Fault>
    where
        F: FnOnce(Test) -> Fut,
        Fut: Future<Output = Result<(), Fault>>,
    {
        self.test(name, |test| block_on(body(test.clone())))
    }

    /// Run a group described by `params`
    ///
    /// A missing separator falls back to the configured default.
    pub fn run_group(&self, params: TestGroupParameters<'_>) -> Result<(), Fault> {
        let (name, separator, body) = params
            .set_full_name_separator_if_unset(self.config.full_name_separator.clone())
            .into_parts()?;
        let separator = separator.unwrap_or_default();
        self.test_group_with(name, separator, body)
    }

    /// Run a test described by `params`
    pub fn run_test(&self, params: TestParameters<'_>) -> Result<(), Fault> {
        let (name, separator, body) = params
            .set_full_name_separator_if_unset(self.config.full_name_separator.clone())
            .into_parts()?;
        let separator = separator.unwrap_or_default();
        self.test_with(name, separator, body)
    }

    pub fn on_test_group_started<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&TestGroup) + 'static,
    {
        self.group_started.subscribe(callback)
    }

    pub fn on_test_group_failed<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&TestGroup, &Fault) + 'static,
    {
        self.group_failed
            .subscribe(move |(group, fault): &(TestGroup, Fault)| callback(group, fault))
    }

    pub fn on_test_group_ended<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&TestGroup) + 'static,
    {
        self.group_ended.subscribe(callback)
    }

    pub fn on_test_started<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Test) + 'static,
    {
        self.test_started.subscribe(callback)
    }

    pub fn on_test_failed<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Test, &Fault) + 'static,
    {
        self.test_failed
            .subscribe(move |(test, fault): &(Test, Fault)| callback(test, fault))
    }

    pub fn on_test_passed<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Test) + 'static,
    {
        self.test_passed.subscribe(callback)
    }

    pub fn on_test_ended<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Test) + 'static,
    {
        self.test_ended.subscribe(callback)
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TestRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRunner")
            .field("config", &self.config)
            .field("current_group", &self.current_group())
            .field("has_test_filter", &self.test_filter.is_some())
            .finish()
    }
}

/// Fire a notification, turning a subscriber panic into a fault
fn notify<F: FnOnce()>(fire: F) -> Result<(), Fault> {
    invoke_caught(|| {
        fire();
        Ok(())
    })
}

/// Hand a subscriber fault to the enclosing group, or log it at the top level
///
/// A fault from the ended notification replaces an earlier one.
fn escalate(node: &TestChild, fault: Option<Fault>) -> Result<(), Fault> {
    match fault {
        Some(fault) if node.parent().is_some() => Err(fault),
        Some(fault) => {
            warn!("Subscriber for {} panicked: {}", node, fault);
            Ok(())
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FaultKind;
    use std::cell::{Cell, RefCell};

    type Log = Rc<RefCell<Vec<String>>>;

    fn record_all(runner: &TestRunner) -> (Log, Vec<Subscription>) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let subs = vec![
            {
                let log = log.clone();
                runner.on_test_group_started(move |g| log.borrow_mut().push(format!("group started: {g}")))
            },
            {
                let log = log.clone();
                runner.on_test_group_failed(move |g, f| {
                    log.borrow_mut().push(format!("group failed: {g}: {}", f.message()))
                })
            },
            {
                let log = log.clone();
                runner.on_test_group_ended(move |g| log.borrow_mut().push(format!("group ended: {g}")))
            },
            {
                let log = log.clone();
                runner.on_test_started(move |t| log.borrow_mut().push(format!("test started: {t}")))
            },
            {
                let log = log.clone();
                runner.on_test_failed(move |t, f| {
                    log.borrow_mut().push(format!("test failed: {t}: {}", f.message()))
                })
            },
            {
                let log = log.clone();
                runner.on_test_passed(move |t| log.borrow_mut().push(format!("test passed: {t}")))
            },
            {
                let log = log.clone();
                runner.on_test_ended(move |t| log.borrow_mut().push(format!("test ended: {t}")))
            },
        ];
        (log, subs)
    }

    #[test]
    fn test_group_rejects_empty_name() {
        let runner = TestRunner::new();
        let (log, _subs) = record_all(&runner);
        let invoked = Cell::new(false);

        let fault = runner
            .test_group("", || {
                invoked.set(true);
                Ok(())
            })
            .unwrap_err();

        assert_eq!(fault.kind(), FaultKind::Precondition);
        assert_eq!(
            fault.message(),
            "Expression: name\nExpected: not empty\nActual:   \"\""
        );
        assert!(!invoked.get());
        assert!(log.borrow().is_empty());
        assert!(runner.current_group().is_none());
    }

    #[test]
    fn test_rejects_empty_name() {
        let runner = TestRunner::new();
        let fault = runner.test("", |_| Ok(())).unwrap_err();
        assert_eq!(fault.kind(), FaultKind::Precondition);
    }

    #[test]
    fn test_passing_test_events() {
        let runner = TestRunner::new();
        let (log, _subs) = record_all(&runner);

        runner.test("adds", |t| t.assert_equal(2, 1 + 1)).unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["test started: adds", "test passed: adds", "test ended: adds"]
        );
    }

    #[test]
    fn test_failed_test_does_not_fail_group() {
        let runner = TestRunner::new();
        let (log, _subs) = record_all(&runner);

        let result = runner.test_group("g", || runner.test("t", |t| t.fail("x")));

        assert!(result.is_ok());
        assert_eq!(
            *log.borrow(),
            vec![
                "group started: g",
                "test started: g t",
                "test failed: g t: x",
                "test ended: g t",
                "group ended: g",
            ]
        );
    }

    #[test]
    fn test_group_failure_contained() {
        let runner = TestRunner::new();
        let (log, _subs) = record_all(&runner);

        let result = runner.test_group("g", || Err(Fault::new("Error", "x")));

        assert!(result.is_ok());
        assert_eq!(
            *log.borrow(),
            vec!["group started: g", "group failed: g: x", "group ended: g"]
        );
        assert!(runner.current_group().is_none());
    }

    #[test]
    fn test_group_panic_contained() {
        let runner = TestRunner::new();
        let failures = Rc::new(RefCell::new(Vec::new()));
        let f = failures.clone();
        let _sub = runner.on_test_group_failed(move |_, fault| f.borrow_mut().push(fault.clone()));
        let after_inner = RefCell::new(None);

        runner
            .test_group("outer", || {
                runner.test_group("inner", || panic!("boom"))?;
                *after_inner.borrow_mut() = runner.current_group().map(|g| g.full_name());
                Ok(())
            })
            .unwrap();

        let failures = failures.borrow();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].kind(), FaultKind::Panic);
        assert_eq!(failures[0].message(), "boom");
        assert_eq!(after_inner.into_inner().as_deref(), Some("outer"));
        assert!(runner.current_group().is_none());
    }

    #[test]
    fn test_nested_full_names_and_cursor() {
        let runner = TestRunner::new();
        let names = Rc::new(RefCell::new(Vec::new()));
        let n = names.clone();
        let _sub = runner.on_test_started(move |t| n.borrow_mut().push(t.full_name()));
        let cursors = RefCell::new(Vec::new());
        let observe = || {
            let name = runner.current_group().map(|g| g.full_name());
            cursors.borrow_mut().push(name.unwrap_or_default());
        };

        runner
            .test_group("a", || {
                observe();
                runner.test_group("b", || {
                    observe();
                    runner.test("c", |t| t.assert_equal(t.parent().map(|p| p.name()), Some("b")))
                })?;
                observe();
                runner.test("d", |_| Ok(()))
            })
            .unwrap();

        assert_eq!(*names.borrow(), vec!["a b c", "a d"]);
        assert_eq!(cursors.into_inner(), vec!["a", "a b", "a"]);
        assert!(runner.current_group().is_none());
    }

    #[test]
    fn test_group_with_separator() {
        let runner = TestRunner::new();
        let names = Rc::new(RefCell::new(Vec::new()));
        let n = names.clone();
        let _sub = runner.on_test_ended(move |t| n.borrow_mut().push(t.full_name()));

        runner
            .test_group("a", || runner.test_with("b", "/", |_| Ok(())))
            .unwrap();

        assert_eq!(*names.borrow(), vec!["a/b"]);
    }

    #[test]
    fn test_filter_skips_body_and_events() {
        let runner = TestRunner::new().with_test_filter(|t| t.name() != "skipped");
        let (log, _subs) = record_all(&runner);
        let invoked = Cell::new(false);

        runner
            .test("skipped", |_| {
                invoked.set(true);
                Ok(())
            })
            .unwrap();

        assert!(!invoked.get());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_config_skip() {
        let runner = TestRunner::from_config(RunnerConfig::default().with_skip("g slow"));
        let ran = Rc::new(RefCell::new(Vec::new()));

        runner
            .test_group("g", || {
                runner.test("slow", |t| {
                    ran.borrow_mut().push(t.full_name());
                    Ok(())
                })?;
                runner.test("fast", |t| {
                    ran.borrow_mut().push(t.full_name());
                    Ok(())
                })
            })
            .unwrap();

        assert_eq!(*ran.borrow(), vec!["g fast"]);
    }

    #[test]
    fn test_disposed_subscriber_not_called() {
        let runner = TestRunner::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let (f, s) = (first.clone(), second.clone());
        let sub1 = runner.on_test_started(move |_| f.set(f.get() + 1));
        let _sub2 = runner.on_test_started(move |_| s.set(s.get() + 1));

        assert!(sub1.dispose());
        runner.test("t", |_| Ok(())).unwrap();

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert!(!sub1.dispose());
    }

    #[test]
    fn test_subscriber_panic_in_started_fails_test() {
        let runner = TestRunner::new();
        let _bad = runner.on_test_started(|_| panic!("subscriber"));
        let (log, _subs) = record_all(&runner);
        let invoked = Cell::new(false);

        runner
            .test("t", |_| {
                invoked.set(true);
                Ok(())
            })
            .unwrap();

        assert!(!invoked.get());
        assert_eq!(
            *log.borrow(),
            vec!["test failed: t: subscriber", "test ended: t"]
        );
    }

    #[test]
    fn test_subscriber_panic_in_ended_contained() {
        let runner = TestRunner::new();
        let _bad = runner.on_test_group_ended(|_| panic!("subscriber"));

        runner.test_group("g", || Ok(())).unwrap();
        assert!(runner.current_group().is_none());
    }

    #[test]
    fn test_passed_subscriber_panic_fails_test() {
        let runner = TestRunner::new();
        let _bad = runner.on_test_passed(|_| panic!("x"));
        let (log, _subs) = record_all(&runner);

        runner.test_group("g", || runner.test("t", |_| Ok(()))).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "group started: g",
                "test started: g t",
                "test failed: g t: x",
                "test ended: g t",
                "group ended: g",
            ]
        );
    }

    #[test]
    fn test_ended_subscriber_panic_fails_enclosing_group() {
        let runner = TestRunner::new();
        let _bad = runner.on_test_ended(|t| {
            if t.name() == "e" {
                panic!("x");
            }
        });
        let (log, _subs) = record_all(&runner);

        runner
            .test_group("g", || {
                runner.test("t", |_| Ok(()))?;
                runner.test("e", |_| Ok(()))?;
                runner.test("never", |_| Ok(()))
            })
            .unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "group started: g",
                "test started: g t",
                "test passed: g t",
                "test ended: g t",
                "test started: g e",
                "test passed: g e",
                "group failed: g: x",
                "group ended: g",
            ]
        );
        assert!(runner.current_group().is_none());
    }

    #[test]
    fn test_failed_subscriber_panic_escapes_test() {
        let runner = TestRunner::new();
        let _bad = runner.on_test_failed(|_, _| panic!("listener"));
        let ended = Rc::new(Cell::new(0));
        let e = ended.clone();
        let _ended = runner.on_test_ended(move |_| e.set(e.get() + 1));

        let escaped = RefCell::new(None);
        runner
            .test_group("g", || {
                *escaped.borrow_mut() = runner.test("t", |t| t.fail("body")).err();
                Ok(())
            })
            .unwrap();

        assert_eq!(ended.get(), 1);
        let escaped = escaped.into_inner().unwrap();
        assert_eq!(escaped.kind(), FaultKind::Panic);
        assert_eq!(escaped.message(), "listener");
    }

    #[test]
    fn test_top_level_subscriber_panic_contained() {
        let runner = TestRunner::new();
        let _bad = runner.on_test_ended(|_| panic!("x"));

        assert!(runner.test("t", |_| Ok(())).is_ok());
    }

    #[test]
    fn test_nested_group_ended_panic_fails_outer_group() {
        let runner = TestRunner::new();
        let _bad = runner.on_test_group_ended(|g| {
            if g.name() == "inner" {
                panic!("x");
            }
        });
        let (log, _subs) = record_all(&runner);

        runner
            .test_group("outer", || runner.test_group("inner", || Ok(())))
            .unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "group started: outer",
                "group started: outer inner",
                "group failed: outer: x",
                "group ended: outer",
            ]
        );
    }

    #[test]
    fn test_configuration_fault_reported_as_test_failure() {
        let runner = TestRunner::new();
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let k = kinds.clone();
        let _failed = runner.on_test_failed(move |_, fault| k.borrow_mut().push(fault.kind()));
        let passed = Rc::new(Cell::new(false));
        let p = passed.clone();
        let _passed = runner.on_test_passed(move |_| p.set(true));

        runner.test("t", |t| t.assert_between("x", "y", 5)).unwrap();

        assert_eq!(*kinds.borrow(), vec![FaultKind::Configuration]);
        assert!(!passed.get());
    }

    #[test]
    fn test_type_and_method_names() {
        struct Calculator;

        let runner = TestRunner::new();
        let names = Rc::new(RefCell::new(Vec::new()));
        let n = names.clone();
        let _sub = runner.on_test_ended(move |t| n.borrow_mut().push(t.full_name()));

        runner
            .test_type_group::<Calculator, _>(|| runner.test_method("add", |_| Ok(())))
            .unwrap();

        let names = names.borrow();
        assert_eq!(names.len(), 1);
        assert!(names[0].ends_with("Calculator.add"));
        assert!(names[0].starts_with("everyone_runner::"));
    }

    #[test]
    fn test_type_test() {
        let runner = TestRunner::new();
        let name = Rc::new(RefCell::new(String::new()));
        let n = name.clone();
        let _sub = runner.on_test_passed(move |t| *n.borrow_mut() = t.full_name());

        runner
            .test_method_group("parse", || runner.test_type::<u32, _>(|_| Ok(())))
            .unwrap();

        assert_eq!(*name.borrow(), "parse.u32");
    }

    #[test]
    fn test_async_bodies() {
        let runner = TestRunner::new();
        let (log, _subs) = record_all(&runner);

        runner
            .test_group_async("g", || async {
                runner
                    .test_async("t", |test| async move { test.assert_equal(3, 3) })
            })
            .unwrap();
        runner
            .test_async("f", |test| async move { test.fail("later") })
            .unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "group started: g",
                "test started: g t",
                "test passed: g t",
                "test ended: g t",
                "group ended: g",
                "test started: f",
                "test failed: f: later",
                "test ended: f",
            ]
        );
    }

    #[test]
    fn test_run_parameters() {
        let runner = TestRunner::new();
        let names = Rc::new(RefCell::new(Vec::new()));
        let n = names.clone();
        let _sub = runner.on_test_ended(move |t| n.borrow_mut().push(t.full_name()));

        runner
            .run_group(TestGroupParameters::new().name("g").body(|| {
                runner.run_test(TestParameters::new().name("a").body(|_| Ok(())))?;
                runner.run_test(
                    TestParameters::new()
                        .name("b")
                        .full_name_separator("::")
                        .body(|_| Ok(())),
                )
            }))
            .unwrap();

        assert_eq!(*names.borrow(), vec!["g a", "g::b"]);

        let fault = runner.run_test(TestParameters::new().body(|_| Ok(()))).unwrap_err();
        assert_eq!(fault.kind(), FaultKind::Precondition);
    }

    #[test]
    fn test_custom_compare_functions_reach_tests() {
        let mut compare = CompareFunctions::new();
        compare.register_equal(
            crate::compare::ValueKind::Str,
            crate::compare::ValueKind::Str,
            |a, b, _| a.elements().map(|e| e.len()) == b.elements().map(|e| e.len()),
        );
        let runner = TestRunner::new().with_compare_functions(compare);
        let failed = Rc::new(Cell::new(false));
        let f = failed.clone();
        let _sub = runner.on_test_failed(move |_, _| f.set(true));

        runner.test("t", |t| t.assert_equal("abc", "xyz")).unwrap();

        assert!(!failed.get());
    }

    #[test]
    fn test_to_string() {
        let runner = TestRunner::new();
        assert_eq!(runner.to_string("a\tb"), "\"a\\tb\"");
        assert_eq!(runner.to_string(5), "5");
        assert_eq!(runner.to_string(None::<i32>), "null");
        assert_eq!(runner.to_string(vec![1, 2]), "[1,2]");
    }
}
