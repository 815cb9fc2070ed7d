//! Type-driven comparison engine
//!
//! Values are converted to [`Value`] and compared with the strategy the
//! [`CompareFunctions`] registry resolves for their runtime kinds.

mod functions;
mod value;

pub use functions::{CompareFn, CompareFunctions, EqualFn, KindPattern};
pub use value::{KindFamily, ToValue, Value, ValueKind};
