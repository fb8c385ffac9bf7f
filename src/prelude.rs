//! Optional convenience imports for common scenario workflows.
//!
//! This module is intentionally small and focused on high-frequency names.
//! Prefer importing specialised APIs directly from their owning modules.
//!
//! # Examples
//!
//! ```
//! use rehearse::prelude::*;
//!
//! given(1).when(|n| n + 1).then(state, should_equal(2));
//! ```

pub use crate::{
    assert::{AssertionError, should_contain, should_equal},
    reducer::{ReducerDriver, with_reducer},
    scenario::{Given, Then, When, given},
    select::{pipe, state},
};
