//! Failure values raised by test and group bodies
//!
//! A [`Fault`] plays the role an exception plays in other test frameworks:
//! it carries a kind, a type name, a message and an optional inner cause.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::escape_and_quote;

/// Type name used for explicit assertion failures
pub const TEST_FAILURE: &str = "TestFailure";

/// Type name used for missing comparison strategies
pub const CONFIGURATION_FAULT: &str = "ConfigurationFault";

/// Type name used for API misuse detected at an entry point
pub const PRECONDITION_FAILURE: &str = "PreconditionFailure";

/// Type name used for panics caught by the engine
pub const PANIC: &str = "Panic";

/// Broad classification of a fault
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// Raised by `fail` or a violated assertion
    Assertion,
    /// No comparison strategy exists for a pair of value kinds
    Configuration,
    /// An entry point was called with invalid arguments
    Precondition,
    /// Any other error returned from a body
    Unexpected,
    /// A panic unwound out of a body
    Panic,
}

impl FaultKind {
    /// Whether this fault came from the assertion vocabulary rather than a crash
    pub fn is_assertion(&self) -> bool {
        matches!(self, FaultKind::Assertion)
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::Assertion => write!(f, "assertion"),
            FaultKind::Configuration => write!(f, "configuration"),
            FaultKind::Precondition => write!(f, "precondition"),
            FaultKind::Unexpected => write!(f, "unexpected"),
            FaultKind::Panic => write!(f, "panic"),
        }
    }
}

/// A failure raised from a test body, a group body or an assertion
#[derive(Clone, Debug, Error)]
#[error("{}: {}", .type_name, escape_and_quote(.message))]
pub struct Fault {
    kind: FaultKind,
    type_name: Cow<'static, str>,
    message: String,
    #[source]
    cause: Option<Box<Fault>>,
}

impl Fault {
    /// Create a fault with an arbitrary type name
    pub fn new(type_name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Unexpected,
            type_name: type_name.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// An assertion failure carrying only a message
    pub fn assertion(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Assertion,
            ..Self::new(TEST_FAILURE, message)
        }
    }

    /// An assertion failure built from message lines
    pub fn assertion_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::assertion(join_lines(lines))
    }

    /// A missing-comparison-strategy fault naming both operand types
    pub fn configuration(lhs_type: &str, rhs_type: &str) -> Self {
        Self {
            kind: FaultKind::Configuration,
            ..Self::new(
                CONFIGURATION_FAULT,
                format!("No compare function found that matches the types {lhs_type} and {rhs_type}."),
            )
        }
    }

    /// A precondition violation built from message lines
    pub fn precondition<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            kind: FaultKind::Precondition,
            ..Self::new(PRECONDITION_FAILURE, join_lines(lines))
        }
    }

    /// Convert a caught panic payload
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };

        Self {
            kind: FaultKind::Panic,
            ..Self::new(PANIC, message)
        }
    }

    /// Convert any error, keeping its source chain as nested causes
    ///
    /// The outer fault is named after `E`. Sources that are themselves faults
    /// are kept as-is; other sources are named `Error`.
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        let erased: &(dyn std::error::Error + 'static) = &error;
        if let Some(fault) = erased.downcast_ref::<Fault>() {
            return fault.clone();
        }

        let mut fault = Self::new(short_type_name::<E>(), error.to_string());
        fault.cause = error.source().map(|s| Box::new(Self::from_source(s)));
        fault
    }

    fn from_source(source: &(dyn std::error::Error + 'static)) -> Self {
        if let Some(fault) = source.downcast_ref::<Fault>() {
            return fault.clone();
        }

        let mut fault = Self::new("Error", source.to_string());
        fault.cause = source.source().map(|s| Box::new(Self::from_source(s)));
        fault
    }

    /// Attach an inner cause
    pub fn with_cause(mut self, cause: Fault) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Override the fault kind
    pub fn with_kind(mut self, kind: FaultKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_deref()
    }

    /// Whether the fault's type name is `type_name`
    pub fn is(&self, type_name: &str) -> bool {
        self.type_name == type_name
    }

    /// Walk the cause chain for a fault named `type_name`
    ///
    /// Returns `self` when neither it nor any cause has that type name.
    pub fn unwrap_to(&self, type_name: &str) -> &Fault {
        let mut current = self;
        loop {
            if current.is(type_name) {
                return current;
            }
            match current.cause() {
                Some(cause) => current = cause,
                None => return self,
            }
        }
    }

    /// Iterate over this fault and all of its causes, outermost first
    pub fn chain(&self) -> impl Iterator<Item = &Fault> {
        std::iter::successors(Some(self), |f| f.cause())
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.type_name == other.type_name && self.message == other.message
    }
}

impl From<anyhow::Error> for Fault {
    fn from(error: anyhow::Error) -> Self {
        if let Some(fault) = error.downcast_ref::<Fault>() {
            return fault.clone();
        }

        let mut links: Vec<Fault> = error
            .chain()
            .map(|e| match e.downcast_ref::<Fault>() {
                Some(fault) => fault.clone(),
                None => Fault::new("Error", e.to_string()),
            })
            .collect();

        let mut fault = links.pop().unwrap_or_else(|| Fault::new("Error", String::new()));
        while let Some(outer) = links.pop() {
            fault = outer.with_cause(fault);
        }
        fault
    }
}

/// Run `action`, converting a panic into a [`FaultKind::Panic`] fault
///
/// The panic hook still runs before the panic is caught, so the default hook
/// prints the panic to stderr even though the caller receives a fault.
pub fn invoke_caught<F>(action: F) -> Result<(), Fault>
where
    F: FnOnce() -> Result<(), Fault>,
{
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(action)) {
        Ok(result) => result,
        Err(payload) => Err(Fault::from_panic(payload)),
    }
}

fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|l| l.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}
