//! Comparison strategy registry
//!
//! Equality and ordering strategies are registered under a pair of
//! [`KindPattern`]s. A lookup picks the most specific pattern pair matching
//! the runtime kinds of the operands.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::value::{KindFamily, Value, ValueKind};
use crate::models::Fault;

/// Equality strategy; receives the registry for recursive comparisons
pub type EqualFn = Rc<dyn Fn(&Value, &Value, &CompareFunctions) -> bool>;

/// Ordering strategy; `None` means the values are unordered (e.g. NaN)
pub type CompareFn = Rc<dyn Fn(&Value, &Value, &CompareFunctions) -> Result<Option<Ordering>, Fault>>;

/// Operand pattern used as half of a registry key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindPattern {
    Exact(ValueKind),
    Family(KindFamily),
    Any,
}

impl KindPattern {
    pub fn matches(&self, kind: ValueKind) -> bool {
        match self {
            KindPattern::Exact(k) => *k == kind,
            KindPattern::Family(family) => kind.in_family(*family),
            KindPattern::Any => true,
        }
    }

    fn specificity(&self) -> u8 {
        match self {
            KindPattern::Exact(_) => 2,
            KindPattern::Family(_) => 1,
            KindPattern::Any => 0,
        }
    }
}

impl From<ValueKind> for KindPattern {
    fn from(kind: ValueKind) -> Self {
        KindPattern::Exact(kind)
    }
}

impl From<KindFamily> for KindPattern {
    fn from(family: KindFamily) -> Self {
        KindPattern::Family(family)
    }
}

struct Entry<F> {
    lhs: KindPattern,
    rhs: KindPattern,
    function: F,
}

impl<F: Clone> Clone for Entry<F> {
    fn clone(&self) -> Self {
        Self {
            lhs: self.lhs,
            rhs: self.rhs,
            function: self.function.clone(),
        }
    }
}

fn resolve<F>(entries: &[Entry<F>], lhs: ValueKind, rhs: ValueKind) -> Option<&F> {
    // Later registrations win ties, so scan from the back and keep the first best.
    let mut best: Option<(&Entry<F>, u8)> = None;
    for entry in entries.iter().rev() {
        if !entry.lhs.matches(lhs) || !entry.rhs.matches(rhs) {
            continue;
        }
        let score = entry.lhs.specificity() + entry.rhs.specificity();
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((entry, score));
        }
    }
    best.map(|(entry, _)| &entry.function)
}

/// Registry of equality and ordering strategies
#[derive(Clone)]
pub struct CompareFunctions {
    equal: Vec<Entry<EqualFn>>,
    compare: Vec<Entry<CompareFn>>,
}

impl CompareFunctions {
    /// A registry populated with the built-in strategies
    pub fn new() -> Self {
        let mut functions = Self::empty();
        functions.register_builtins();
        functions
    }

    /// A registry with no strategies at all
    pub fn empty() -> Self {
        Self {
            equal: Vec::new(),
            compare: Vec::new(),
        }
    }

    /// Register an equality strategy; it overrides equally specific earlier ones
    pub fn register_equal<F>(&mut self, lhs: impl Into<KindPattern>, rhs: impl Into<KindPattern>, f: F) -> &mut Self
    where
        F: Fn(&Value, &Value, &CompareFunctions) -> bool + 'static,
    {
        self.equal.push(Entry {
            lhs: lhs.into(),
            rhs: rhs.into(),
            function: Rc::new(f),
        });
        self
    }

    /// Register an ordering strategy; it overrides equally specific earlier ones
    pub fn register_compare<F>(&mut self, lhs: impl Into<KindPattern>, rhs: impl Into<KindPattern>, f: F) -> &mut Self
    where
        F: Fn(&Value, &Value, &CompareFunctions) -> Result<Option<Ordering>, Fault> + 'static,
    {
        self.compare.push(Entry {
            lhs: lhs.into(),
            rhs: rhs.into(),
            function: Rc::new(f),
        });
        self
    }

    /// Whether an ordering strategy exists for the pair of kinds
    pub fn has_compare(&self, lhs: ValueKind, rhs: ValueKind) -> bool {
        resolve(&self.compare, lhs, rhs).is_some()
    }

    pub fn are_equal(&self, lhs: &Value, rhs: &Value) -> bool {
        match resolve(&self.equal, lhs.kind(), rhs.kind()) {
            Some(f) => f(lhs, rhs, self),
            None => false,
        }
    }

    pub fn are_not_equal(&self, lhs: &Value, rhs: &Value) -> bool {
        !self.are_equal(lhs, rhs)
    }

    /// Order `lhs` against `rhs`
    ///
    /// Fails with a configuration fault when no strategy matches the kinds.
    pub fn compare(&self, lhs: &Value, rhs: &Value) -> Result<Option<Ordering>, Fault> {
        match resolve(&self.compare, lhs.kind(), rhs.kind()) {
            Some(f) => f(lhs, rhs, self),
            None => Err(Fault::configuration(lhs.kind().name(), rhs.kind().name())),
        }
    }

    pub fn is_less_than(&self, value: &Value, upper_bound: &Value) -> Result<bool, Fault> {
        Ok(self.compare(value, upper_bound)? == Some(Ordering::Less))
    }

    pub fn is_greater_than(&self, value: &Value, lower_bound: &Value) -> Result<bool, Fault> {
        Ok(self.compare(value, lower_bound)? == Some(Ordering::Greater))
    }

    pub fn is_greater_than_or_equal_to(&self, value: &Value, lower_bound: &Value) -> Result<bool, Fault> {
        Ok(matches!(
            self.compare(value, lower_bound)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }

    /// Inclusive range check; the upper side is only consulted when the lower side holds
    pub fn is_between(&self, lower_bound: &Value, value: &Value, upper_bound: &Value) -> Result<bool, Fault> {
        let above_lower = matches!(
            self.compare(lower_bound, value)?,
            Some(Ordering::Less | Ordering::Equal)
        );
        if !above_lower {
            return Ok(false);
        }
        Ok(matches!(
            self.compare(value, upper_bound)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    fn register_builtins(&mut self) {
        use KindPattern::Any;
        use ValueKind::*;

        self.register_equal(Any, Any, |_, _, _| false);
        self.register_equal(Null, Null, |_, _, _| true);
        self.register_equal(Bool, Bool, |a, b, _| match (a, b) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => false,
        });
        self.register_equal(KindFamily::Number, KindFamily::Number, |a, b, _| {
            numeric_order(a, b) == Some(Ordering::Equal)
        });
        self.register_equal(KindFamily::Text, KindFamily::Text, |a, b, _| text(a) == text(b));
        self.register_equal(KindFamily::Sequence, KindFamily::Sequence, |a, b, functions| {
            match (a.elements(), b.elements()) {
                (Some(a), Some(b)) => {
                    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| functions.are_equal(x, y))
                }
                _ => false,
            }
        });
        self.register_equal(Str, Str, |a, b, _| text(a) == text(b));
        self.register_equal(ValueKind::Fault, ValueKind::Fault, |a, b, _| match (a, b) {
            (Value::Fault(a), Value::Fault(b)) => a == b,
            _ => false,
        });

        self.register_compare(KindFamily::Number, KindFamily::Number, |a, b, _| Ok(numeric_order(a, b)));
        self.register_compare(Bool, Bool, |a, b, _| match (a, b) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
            _ => Ok(None),
        });
        self.register_compare(Char, Char, |a, b, _| match (a, b) {
            (Value::Char(a), Value::Char(b)) => Ok(Some(a.cmp(b))),
            _ => Ok(None),
        });
        self.register_compare(Str, Str, |a, b, _| match (a, b) {
            (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
            _ => Ok(None),
        });
        self.register_compare(Seq, Seq, |a, b, functions| match (a, b) {
            (Value::Seq(a), Value::Seq(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    match functions.compare(x, y)? {
                        Some(Ordering::Equal) => continue,
                        other => return Ok(other),
                    }
                }
                Ok(Some(a.len().cmp(&b.len())))
            }
            _ => Ok(None),
        });
    }
}

impl Default for CompareFunctions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CompareFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareFunctions")
            .field("equal", &self.equal.len())
            .field("compare", &self.compare.len())
            .finish()
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::Char(c) => Some(c.to_string()),
        Value::Str(s) => Some(s.clone()),
        _ => None,
    }
}

/// Order two numbers across integer, unsigned and floating representations
fn numeric_order(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::UInt(a), Value::UInt(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::UInt(b)) => Some(i128::from(*a).cmp(&i128::from(*b))),
        (Value::UInt(a), Value::Int(b)) => Some(i128::from(*a).cmp(&i128::from(*b))),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Float(a), Value::Int(b)) => integer_float_order(i128::from(*b), *a).map(Ordering::reverse),
        (Value::Float(a), Value::UInt(b)) => integer_float_order(i128::from(*b), *a).map(Ordering::reverse),
        (Value::Int(a), Value::Float(b)) => integer_float_order(i128::from(*a), *b),
        (Value::UInt(a), Value::Float(b)) => integer_float_order(i128::from(*a), *b),
        _ => None,
    }
}

/// Order an integer against a float without rounding the integer
fn integer_float_order(int: i128, float: f64) -> Option<Ordering> {
    // 2^127: every float at or beyond this magnitude is outside any i64/u64.
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

    if float.is_nan() {
        return None;
    }
    let whole = float.trunc();
    if whole >= LIMIT {
        return Some(Ordering::Less);
    }
    if whole <= -LIMIT {
        return Some(Ordering::Greater);
    }

    // `whole` is integral and in range, so the cast is exact.
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0f64.partial_cmp(&(float - whole)),
        other => Some(other),
    }
}
