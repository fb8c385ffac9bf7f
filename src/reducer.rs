//! Adapter turning reducers into scenario-chain transformers.
//!
//! A reducer here has the shape `Fn(Option<S>, &A) -> S`: called with
//! `None` it produces its initial state, called with `Some(state)` it
//! applies an action. The conventional initialisation action is
//! `A::default()`; action enums mark their init variant `#[default]`.

use std::{marker::PhantomData, sync::Arc};

use crate::scenario::{Given, given};

/// Wrap a reducer into a [`ReducerDriver`].
///
/// The reducer is invoked once, eagerly, with `None` and `A::default()`
/// to obtain the initial state. No validation is performed; whatever the
/// reducer does with an action, including panicking, propagates unchanged.
///
/// # Examples
///
/// ```
/// use rehearse::{should_equal, state, with_reducer};
///
/// #[derive(Debug, Default, Clone, Copy)]
/// enum Counter {
///     #[default]
///     Init,
///     Increment,
/// }
///
/// fn counter(state: Option<i64>, action: &Counter) -> i64 {
///     let count = state.unwrap_or(0);
///     match action {
///         Counter::Increment => count + 1,
///         Counter::Init => count,
///     }
/// }
///
/// let driver = with_reducer(counter);
/// driver
///     .given()
///     .when(driver.dispatch(Counter::Increment))
///     .then(state, should_equal(1));
/// ```
#[must_use]
pub fn with_reducer<S, A, R>(reducer: R) -> ReducerDriver<S, A, R>
where
    R: Fn(Option<S>, &A) -> S,
    A: Default,
{
    let initial = reducer(None, &A::default());
    ReducerDriver {
        reducer: Arc::new(reducer),
        initial,
        _actions: PhantomData,
    }
}

/// A reducer paired with its initial state and a dispatch factory.
pub struct ReducerDriver<S, A, R> {
    reducer: Arc<R>,
    initial: S,
    _actions: PhantomData<fn(&A)>,
}

impl<S, A, R> ReducerDriver<S, A, R>
where
    R: Fn(Option<S>, &A) -> S,
{
    /// The state produced by the initialisation call.
    #[must_use]
    pub fn initial_state(&self) -> S
    where
        S: Clone,
    {
        self.initial.clone()
    }

    /// Start a scenario chain from the initial state.
    #[must_use]
    pub fn given(&self) -> Given<S>
    where
        S: Clone,
    {
        given(self.initial.clone())
    }

    /// Turn an action into a `when`/`and`-compatible transformer.
    ///
    /// The returned closure applies `reducer(Some(state), &action)` and can
    /// be reused across chains.
    #[must_use]
    pub fn dispatch(&self, action: A) -> impl Fn(S) -> S + use<S, A, R> {
        let reducer = Arc::clone(&self.reducer);
        move |state| reducer(Some(state), &action)
    }
}
