//! Result recording
//!
//! Turns runner lifecycle events into serializable results.

mod recorder;

pub use recorder::TestRecorder;
