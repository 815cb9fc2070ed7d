//! Failure message rendering
//!
//! Every message is an `Expected:` line followed by an `Actual:` line whose
//! value is aligned under the expected value, optionally preceded by a
//! `Message:` or `Expression:` line.

use crate::compare::{ToValue, Value};

use super::to_string::ToStringFunctions;

const EXPECTED: &str = "Expected: ";
const ACTUAL: &str = "Actual:   ";

/// Builds the text of assertion and precondition failures
#[derive(Clone, Debug, Default)]
pub struct AssertMessageFunctions {
    to_string_functions: ToStringFunctions,
}

impl AssertMessageFunctions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_to_string_functions(to_string_functions: ToStringFunctions) -> Self {
        Self { to_string_functions }
    }

    pub fn to_string_functions(&self) -> &ToStringFunctions {
        &self.to_string_functions
    }

    /// Render a value with the configured stringification rules
    pub fn render(&self, value: &Value) -> String {
        self.to_string_functions.to_string(value)
    }

    pub fn expected_equal(&self, expected: impl ToValue, actual: impl ToValue, message: Option<&str>) -> String {
        self.expected("", expected, actual, header("Message", message))
    }

    pub fn expected_not_equal(&self, not_expected: impl ToValue, actual: impl ToValue, message: Option<&str>) -> String {
        self.expected("not ", not_expected, actual, header("Message", message))
    }

    pub fn expected_same(&self, expected: impl ToValue, actual: impl ToValue, message: Option<&str>) -> String {
        self.expected("same as ", expected, actual, header("Message", message))
    }

    pub fn expected_not_same(&self, expected: impl ToValue, actual: impl ToValue, message: Option<&str>) -> String {
        self.expected("not same as ", expected, actual, header("Message", message))
    }

    pub fn expected_greater_than(&self, value: impl ToValue, lower_bound: impl ToValue, message: Option<&str>) -> String {
        self.expected("greater than ", lower_bound, value, header("Message", message))
    }

    pub fn expected_greater_than_or_equal_to(
        &self,
        value: impl ToValue,
        lower_bound: impl ToValue,
        message: Option<&str>,
    ) -> String {
        self.expected("greater than or equal to ", lower_bound, value, header("Message", message))
    }

    pub fn expected_between(
        &self,
        lower_bound: impl ToValue,
        value: impl ToValue,
        upper_bound: impl ToValue,
        message: Option<&str>,
    ) -> String {
        let prefix = "between ";
        let lines = [
            header("Message", message),
            Some(format!(
                "{EXPECTED}{prefix}{} and {}",
                self.render(&lower_bound.to_value()),
                self.render(&upper_bound.to_value())
            )),
            Some(format!(
                "{ACTUAL}{}{}",
                " ".repeat(prefix.len()),
                self.render(&value.to_value())
            )),
        ];
        join(lines)
    }

    /// Precondition text for an empty argument
    pub fn expected_not_empty(&self, expression: &str, actual: impl ToValue) -> String {
        join([
            header("Expression", Some(expression)),
            Some(format!("{EXPECTED}not empty")),
            Some(format!("{ACTUAL}{}", self.render(&actual.to_value()))),
        ])
    }

    /// Precondition description for a required value that was absent
    pub fn expected_not_null(&self, expression: &str, actual: impl ToValue) -> String {
        join([
            header("Expression", Some(expression)),
            Some(format!("{EXPECTED}not null")),
            Some(format!("{ACTUAL}{}", self.render(&actual.to_value()))),
        ])
    }

    fn expected(&self, prefix: &str, expected: impl ToValue, actual: impl ToValue, header: Option<String>) -> String {
        join([
            header,
            Some(format!("{EXPECTED}{prefix}{}", self.render(&expected.to_value()))),
            Some(format!(
                "{ACTUAL}{}{}",
                " ".repeat(prefix.len()),
                self.render(&actual.to_value())
            )),
        ])
    }
}

fn header(label: &str, text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(|t| format!("{label}: {t}"))
}

fn join<I>(lines: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    lines.into_iter().flatten().collect::<Vec<_>>().join("\n")
}
