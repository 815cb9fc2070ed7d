//! Value stringification used in failure messages

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::compare::{Value, ValueKind};

/// Custom renderer for one value kind
pub type ToStringFn = Rc<dyn Fn(&Value, &ToStringFunctions) -> String>;

/// Renders values as text, with optional per-kind overrides
#[derive(Clone, Default)]
pub struct ToStringFunctions {
    overrides: HashMap<ValueKind, ToStringFn>,
}

impl ToStringFunctions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the renderer for `kind`
    pub fn register<F>(&mut self, kind: ValueKind, f: F) -> &mut Self
    where
        F: Fn(&Value, &ToStringFunctions) -> String + 'static,
    {
        self.overrides.insert(kind, Rc::new(f));
        self
    }

    pub fn to_string(&self, value: &Value) -> String {
        if let Some(f) = self.overrides.get(&value.kind()) {
            return f(value, self);
        }

        match value {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::UInt(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Char(c) => format!("'{}'", c.escape_default()),
            Value::Str(s) => escape_and_quote(s),
            Value::Seq(items) => {
                let parts: Vec<String> = items.iter().map(|v| self.to_string(v)).collect();
                format!("[{}]", parts.join(","))
            }
            Value::Fault(fault) => format!("{}: {}", fault.type_name(), escape_and_quote(fault.message())),
        }
    }
}

impl fmt::Debug for ToStringFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToStringFunctions")
            .field("overrides", &self.overrides.len())
            .finish()
    }
}

/// Surround with double quotes, escaping quotes, backslashes and control characters
pub fn escape_and_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ToValue;
    use crate::models::Fault;

    fn render(value: impl ToValue) -> String {
        ToStringFunctions::new().to_string(&value.to_value())
    }

    #[test]
    fn test_primitives() {
        assert_eq!(render(None::<i32>), "null");
        assert_eq!(render(true), "true");
        assert_eq!(render(-5), "-5");
        assert_eq!(render(1.5), "1.5");
        assert_eq!(render('a'), "'a'");
        assert_eq!(render(""), "\"\"");
        assert_eq!(render("oops"), "\"oops\"");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(render("a\"b"), "\"a\\\"b\"");
        assert_eq!(render("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(render('\''), "'\\''");
    }

    #[test]
    fn test_sequences() {
        assert_eq!(render(Vec::<i32>::new()), "[]");
        assert_eq!(render(vec![1, 2, 3]), "[1,2,3]");
        assert_eq!(render(vec!["a", "b"]), "[\"a\",\"b\"]");
    }

    #[test]
    fn test_fault() {
        assert_eq!(render(Fault::new("Error", "abc")), "Error: \"abc\"");
    }

    #[test]
    fn test_override() {
        let mut functions = ToStringFunctions::new();
        functions.register(ValueKind::Bool, |v, _| match v {
            Value::Bool(true) => "True".to_string(),
            _ => "False".to_string(),
        });
        assert_eq!(functions.to_string(&true.to_value()), "True");
        assert_eq!(functions.to_string(&vec![false].to_value()), "[False]");
    }
}
