#![doc(html_root_url = "https://docs.rs/rehearse/latest")]
//! Public API for the `rehearse` library.
//!
//! This crate provides a fluent Given/When/Then chain for testing pure
//! state-transition functions such as reducers, together with a reducer
//! adapter and assertion-value helpers.

pub mod assert;
pub mod prelude;
pub mod reducer;
pub mod scenario;
pub mod select;

pub use assert::{AssertionError, should_contain, should_equal};
pub use reducer::{ReducerDriver, with_reducer};
pub use scenario::{Given, Then, When, given};
pub use select::{pipe, state};
