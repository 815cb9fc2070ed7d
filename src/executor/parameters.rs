//! Parameter objects for group and test invocations

use crate::assertions::Test;
use crate::message::AssertMessageFunctions;
use crate::models::{check_name, Fault};

/// Body of a test group
pub type GroupBody<'a> = Box<dyn FnOnce() -> Result<(), Fault> + 'a>;

/// Body of a test
pub type TestBody<'a> = Box<dyn FnOnce(&Test) -> Result<(), Fault> + 'a>;

/// Name, separator and body for a single group or test call
///
/// Use the [`TestGroupParameters`] and [`TestParameters`] aliases.
pub struct ChildParameters<B> {
    name: Option<String>,
    full_name_separator: Option<String>,
    body: Option<B>,
}

pub type TestGroupParameters<'a> = ChildParameters<GroupBody<'a>>;
pub type TestParameters<'a> = ChildParameters<TestBody<'a>>;

impl<B> ChildParameters<B> {
    pub fn new() -> Self {
        Self {
            name: None,
            full_name_separator: None,
            body: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name the node after `T`'s full type path
    pub fn name_of<T: ?Sized>(self) -> Self {
        self.name(std::any::type_name::<T>())
    }

    pub fn full_name_separator(mut self, separator: impl Into<String>) -> Self {
        self.full_name_separator = Some(separator.into());
        self
    }

    /// Set the separator only if none was given yet
    pub fn set_full_name_separator_if_unset(mut self, separator: impl Into<String>) -> Self {
        if self.full_name_separator.is_none() {
            self.full_name_separator = Some(separator.into());
        }
        self
    }

    pub fn get_name(&self) -> Result<&str, Fault> {
        match self.name.as_deref() {
            Some(name) => {
                check_name(name, "name")?;
                Ok(name)
            }
            None => Err(Fault::precondition([
                AssertMessageFunctions::new().expected_not_empty("name", None::<&str>)
            ])),
        }
    }

    pub fn get_full_name_separator(&self) -> Option<&str> {
        self.full_name_separator.as_deref()
    }

    /// Split into name, separator and body, validating that name and body are present
    pub(super) fn into_parts(self) -> Result<(String, Option<String>, B), Fault> {
        self.get_name()?;
        let body = self.body.ok_or_else(|| {
            Fault::precondition([
                AssertMessageFunctions::new().expected_not_null("body", None::<&str>)
            ])
        })?;
        Ok((self.name.unwrap_or_default(), self.full_name_separator, body))
    }
}

impl<B> Default for ChildParameters<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ChildParameters<GroupBody<'a>> {
    pub fn body<F>(mut self, body: F) -> Self
    where
        F: FnOnce() -> Result<(), Fault> + 'a,
    {
        self.body = Some(Box::new(body));
        self
    }
}

impl<'a> ChildParameters<TestBody<'a>> {
    pub fn body<F>(mut self, body: F) -> Self
    where
        F: FnOnce(&Test) -> Result<(), Fault> + 'a,
    {
        self.body = Some(Box::new(body));
        self
    }
}
