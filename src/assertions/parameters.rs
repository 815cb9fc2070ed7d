//! Per-call assertion options

use crate::compare::CompareFunctions;
use crate::message::AssertMessageFunctions;

/// Optional settings for a single assertion call
///
/// Unset fields fall back to the owning test's configuration.
#[derive(Clone, Debug, Default)]
pub struct AssertParameters {
    pub message: Option<String>,
    pub compare_functions: Option<CompareFunctions>,
    pub message_functions: Option<AssertMessageFunctions>,
}

impl AssertParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text placed on a `Message:` line above the failure description
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn compare_functions(mut self, compare_functions: CompareFunctions) -> Self {
        self.compare_functions = Some(compare_functions);
        self
    }

    pub fn message_functions(mut self, message_functions: AssertMessageFunctions) -> Self {
        self.message_functions = Some(message_functions);
        self
    }
}

impl From<&str> for AssertParameters {
    fn from(message: &str) -> Self {
        Self::new().message(message)
    }
}

impl From<String> for AssertParameters {
    fn from(message: String) -> Self {
        Self::new().message(message)
    }
}
