//! Failure message rendering

mod formatter;
mod to_string;

pub use formatter::AssertMessageFunctions;
pub use to_string::{escape_and_quote, ToStringFn, ToStringFunctions};
