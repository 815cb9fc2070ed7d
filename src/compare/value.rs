//! Runtime value model used by comparisons and failure messages

use std::fmt;

use crate::models::Fault;

/// Runtime type tag of a [`Value`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    Char,
    Str,
    Seq,
    Fault,
}

/// Groups of kinds that share comparison semantics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindFamily {
    Number,
    Text,
    Sequence,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Char => "char",
            ValueKind::Str => "string",
            ValueKind::Seq => "sequence",
            ValueKind::Fault => "fault",
        }
    }

    /// Whether this kind is a member of `family`
    pub fn in_family(&self, family: KindFamily) -> bool {
        match family {
            KindFamily::Number => matches!(self, ValueKind::Int | ValueKind::UInt | ValueKind::Float),
            KindFamily::Text => matches!(self, ValueKind::Char | ValueKind::Str),
            KindFamily::Sequence => matches!(self, ValueKind::Str | ValueKind::Seq),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A dynamically typed value handed to the comparison engine
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
    Seq(Vec<Value>),
    Fault(Fault),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::Char(_) => ValueKind::Char,
            Value::Str(_) => ValueKind::Str,
            Value::Seq(_) => ValueKind::Seq,
            Value::Fault(_) => ValueKind::Fault,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Elements of a sequence-like value; strings yield their characters
    pub fn elements(&self) -> Option<Vec<Value>> {
        match self {
            Value::Str(s) => Some(s.chars().map(Value::Char).collect()),
            Value::Seq(items) => Some(items.clone()),
            _ => None,
        }
    }
}

/// Conversion into a [`Value`]
///
/// Implemented for primitives, strings, slices, arrays, vectors, options and
/// faults. `None` converts to [`Value::Null`].
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Null
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl ToValue for Fault {
    fn to_value(&self) -> Value {
        Value::Fault(self.clone())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

macro_rules! signed_to_value {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::Int(*self as i64)
            }
        })*
    };
}

macro_rules! unsigned_to_value {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::UInt(*self as u64)
            }
        })*
    };
}

signed_to_value!(i8, i16, i32, i64, isize);
unsigned_to_value!(u8, u16, u32, u64, usize);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(1i32.to_value().kind(), ValueKind::Int);
        assert_eq!(1u8.to_value().kind(), ValueKind::UInt);
        assert_eq!(1.5f32.to_value().kind(), ValueKind::Float);
        assert_eq!("abc".to_value().kind(), ValueKind::Str);
        assert_eq!(['a', 'b'].to_value().kind(), ValueKind::Seq);
        assert_eq!(None::<i32>.to_value().kind(), ValueKind::Null);
        assert_eq!(Some(3i32).to_value().kind(), ValueKind::Int);
    }

    #[test]
    fn test_families() {
        assert!(ValueKind::Float.in_family(KindFamily::Number));
        assert!(ValueKind::Str.in_family(KindFamily::Sequence));
        assert!(ValueKind::Str.in_family(KindFamily::Text));
        assert!(!ValueKind::Seq.in_family(KindFamily::Text));
        assert!(!ValueKind::Bool.in_family(KindFamily::Number));
    }

    #[test]
    fn test_string_elements() {
        let elements = "ab".to_value().elements().unwrap();
        assert_eq!(elements.len(), 2);
        assert!(matches!(elements[0], Value::Char('a')));
        assert!(1i32.to_value().elements().is_none());
    }
}
