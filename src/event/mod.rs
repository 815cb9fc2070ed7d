//! Lifecycle event plumbing
//!
//! One [`Event`] exists per lifecycle signal; subscribing to one never
//! affects another.

mod hub;

pub use hub::{Event, Subscription};
