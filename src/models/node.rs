//! Named nodes of the test tree
//!
//! Every group and test is a [`TestChild`]: a name, an optional parent group
//! and the separator placed before the name when building the full name.

use std::fmt;
use std::rc::Rc;

use super::fault::Fault;
use crate::message::AssertMessageFunctions;

/// Separator used between the names of ordinary groups and tests
pub const DEFAULT_FULL_NAME_SEPARATOR: &str = " ";

/// Separator used when a node is named after a type or method
pub const TYPE_FULL_NAME_SEPARATOR: &str = ".";

#[derive(Debug)]
struct ChildInner {
    name: String,
    parent: Option<TestGroup>,
    full_name_separator: String,
}

/// Identity shared by groups and tests
#[derive(Clone, Debug)]
pub struct TestChild {
    inner: Rc<ChildInner>,
}

impl TestChild {
    /// Create a node, rejecting an empty name
    pub fn create(
        name: impl Into<String>,
        parent: Option<TestGroup>,
        full_name_separator: impl Into<String>,
    ) -> Result<Self, Fault> {
        let name = name.into();
        check_name(&name, "name")?;

        Ok(Self {
            inner: Rc::new(ChildInner {
                name,
                parent,
                full_name_separator: full_name_separator.into(),
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn parent(&self) -> Option<&TestGroup> {
        self.inner.parent.as_ref()
    }

    pub fn full_name_separator(&self) -> &str {
        &self.inner.full_name_separator
    }

    /// The names of all ancestors and this node joined by their separators
    pub fn full_name(&self) -> String {
        match self.parent() {
            Some(parent) => format!(
                "{}{}{}",
                parent.full_name(),
                self.full_name_separator(),
                self.name()
            ),
            None => self.name().to_string(),
        }
    }

    /// Number of ancestors above this node
    pub fn depth(&self) -> usize {
        std::iter::successors(self.parent(), |g| g.parent()).count()
    }

    /// Whether both handles refer to the same node
    pub fn ptr_eq(&self, other: &TestChild) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for TestChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

/// A named group of tests and nested groups
#[derive(Clone, Debug)]
pub struct TestGroup {
    child: TestChild,
}

impl TestGroup {
    pub fn create(
        name: impl Into<String>,
        parent: Option<TestGroup>,
        full_name_separator: impl Into<String>,
    ) -> Result<Self, Fault> {
        Ok(Self {
            child: TestChild::create(name, parent, full_name_separator)?,
        })
    }

    /// A top-level group using the default separator
    pub fn root(name: impl Into<String>) -> Result<Self, Fault> {
        Self::create(name, None, DEFAULT_FULL_NAME_SEPARATOR)
    }

    /// A group nested under `self` using the default separator
    pub fn child(&self, name: impl Into<String>) -> Result<Self, Fault> {
        Self::create(name, Some(self.clone()), DEFAULT_FULL_NAME_SEPARATOR)
    }

    pub fn name(&self) -> &str {
        self.child.name()
    }

    pub fn parent(&self) -> Option<&TestGroup> {
        self.child.parent()
    }

    pub fn full_name(&self) -> String {
        self.child.full_name()
    }

    pub fn depth(&self) -> usize {
        self.child.depth()
    }

    pub fn as_child(&self) -> &TestChild {
        &self.child
    }

    pub fn ptr_eq(&self, other: &TestGroup) -> bool {
        self.child.ptr_eq(&other.child)
    }
}

impl fmt::Display for TestGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.child.fmt(f)
    }
}

/// Reject an empty name with a precondition fault naming `expression`
pub(crate) fn check_name(name: &str, expression: &str) -> Result<(), Fault> {
    if name.is_empty() {
        return Err(Fault::precondition([
            AssertMessageFunctions::new().expected_not_empty(expression, name)
        ]));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FaultKind;

    #[test]
    fn test_empty_name_rejected() {
        let fault = TestGroup::root("").unwrap_err();
        assert_eq!(fault.kind(), FaultKind::Precondition);
        assert_eq!(
            fault.message(),
            "Expression: name\nExpected: not empty\nActual:   \"\""
        );
    }

    #[test]
    fn test_root_full_name() {
        let group = TestGroup::root("a").unwrap();
        assert_eq!(group.name(), "a");
        assert!(group.parent().is_none());
        assert_eq!(group.full_name(), "a");
        assert_eq!(group.depth(), 0);
    }

    #[test]
    fn test_nested_full_name() {
        let c = TestGroup::root("c").unwrap();
        let b = c.child("b").unwrap();
        let a = b.child("a").unwrap();
        assert_eq!(b.full_name(), "c b");
        assert_eq!(a.full_name(), "c b a");
        assert_eq!(a.depth(), 2);
        assert!(a.parent().unwrap().ptr_eq(&b));
    }

    #[test]
    fn test_custom_separator() {
        let ty = TestGroup::create("Vec", None, TYPE_FULL_NAME_SEPARATOR).unwrap();
        let method = TestGroup::create("push", Some(ty.clone()), TYPE_FULL_NAME_SEPARATOR).unwrap();
        let leaf = TestChild::create("with empty vec", Some(method), " ").unwrap();
        assert_eq!(leaf.full_name(), "Vec.push with empty vec");
        assert_eq!(leaf.to_string(), "Vec.push with empty vec");
    }

    #[test]
    fn test_separator_belongs_to_child() {
        let root = TestGroup::create("root", None, "::").unwrap();
        assert_eq!(root.full_name(), "root");
        let child = TestChild::create("leaf", Some(root), "/").unwrap();
        assert_eq!(child.full_name(), "root/leaf");
    }
}
