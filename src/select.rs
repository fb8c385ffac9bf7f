//! Selector helpers for `then` projections.
//!
//! Selectors extract the part of the state an assertion should see. The
//! two helpers here cover the ends of the spectrum: [`state`] projects
//! nothing away, and [`pipe`] composes finer selectors left to right.

/// Identity selector: assert on the raw state.
///
/// # Examples
///
/// ```
/// use rehearse::{given, should_equal, state};
///
/// given("ready").then(state, should_equal("ready"));
/// ```
#[must_use]
pub fn state<S>(value: S) -> S { value }

/// Compose two selectors left to right.
///
/// `pipe(f, g)` feeds the state through `f`, then `g`. Nest calls for
/// longer pipelines: `pipe(f, pipe(g, h))`.
///
/// # Examples
///
/// ```
/// use rehearse::{given, pipe, should_equal};
///
/// given(("a", 3)).then(pipe(|pair: (&str, i32)| pair.1, |n| n * 10), should_equal(30));
/// ```
#[must_use]
pub fn pipe<S, M, P>(
    first: impl FnOnce(S) -> M,
    second: impl FnOnce(M) -> P,
) -> impl FnOnce(S) -> P {
    move |value| second(first(value))
}
