//! Scenario nodes threading state through a Given/When/Then chain.
//!
//! A chain starts with [`given`], applies pure transformers with
//! [`Given::and`]/[`Given::when`], and checks projections of the resulting
//! state with `then`. Every method consumes its node and returns a fresh
//! one; state is never mutated in place, so a chain is safe to build and
//! run anywhere the host test harness schedules it.
//!
//! Transformers are `FnOnce(S) -> S`, selectors are `FnOnce(S) -> P`, and
//! assertions are `FnOnce(P)` that panic on mismatch. The panic propagates
//! straight into the test harness; nothing is caught here.

use tracing::debug;

/// Start a scenario chain from an initial state.
///
/// # Examples
///
/// ```
/// use rehearse::{given, should_equal, state};
///
/// given(2).when(|n| n + 1).then(state, should_equal(3));
/// ```
#[must_use]
pub fn given<S>(state: S) -> Given<S> {
    debug!("scenario started");
    Given { state }
}

/// Setup-phase node produced by [`given`].
#[derive(Debug, Clone)]
pub struct Given<S> {
    state: S,
}

/// Action-phase node produced by `when`.
#[derive(Debug, Clone)]
pub struct When<S> {
    state: S,
}

/// Assertion-phase node produced by `then`.
///
/// The state carried here is fixed at the moment the node was created;
/// further [`Then::and`] assertions always see that same state.
#[derive(Debug, Clone)]
pub struct Then<S> {
    state: S,
}

impl<S> Given<S> {
    /// Apply another setup transformer, staying in the setup phase.
    #[must_use]
    pub fn and(self, transform: impl FnOnce(S) -> S) -> Given<S> {
        debug!("applied setup transformer");
        Given {
            state: transform(self.state),
        }
    }

    /// Apply the action under test, moving to the action phase.
    #[must_use]
    pub fn when(self, transform: impl FnOnce(S) -> S) -> When<S> {
        debug!("applied action transformer");
        When {
            state: transform(self.state),
        }
    }

    /// Assert on a projection of the setup state.
    ///
    /// The selector receives a clone of the current state; the node's own
    /// state is carried into the returned [`Then`] unchanged. Pass
    /// [`state`](crate::select::state) to assert on the raw state, or
    /// [`pipe`](crate::select::pipe) to compose selectors.
    ///
    /// # Panics
    ///
    /// Whatever the assertion panics with on mismatch.
    pub fn then<P>(self, select: impl FnOnce(S) -> P, verify: impl FnOnce(P)) -> Then<S>
    where
        S: Clone,
    {
        run_assertion(self.state.clone(), select, verify);
        Then { state: self.state }
    }
}

impl<S> When<S> {
    /// Apply a further action transformer, staying in the action phase.
    #[must_use]
    pub fn and(self, transform: impl FnOnce(S) -> S) -> When<S> {
        debug!("applied action transformer");
        When {
            state: transform(self.state),
        }
    }

    /// Assert on a projection of the post-action state.
    ///
    /// # Panics
    ///
    /// Whatever the assertion panics with on mismatch.
    pub fn then<P>(self, select: impl FnOnce(S) -> P, verify: impl FnOnce(P)) -> Then<S>
    where
        S: Clone,
    {
        run_assertion(self.state.clone(), select, verify);
        Then { state: self.state }
    }
}

impl<S> Then<S> {
    /// Run another assertion against the same stored state.
    ///
    /// The state is the one fixed when this node was created; it is never
    /// re-derived from earlier transformers.
    ///
    /// # Panics
    ///
    /// Whatever the assertion panics with on mismatch.
    pub fn and<P>(self, select: impl FnOnce(S) -> P, verify: impl FnOnce(P)) -> Then<S>
    where
        S: Clone,
    {
        run_assertion(self.state.clone(), select, verify);
        self
    }

    /// Resume the action phase from the stored state.
    #[must_use]
    pub fn when(self, transform: impl FnOnce(S) -> S) -> When<S> {
        debug!("applied action transformer");
        When {
            state: transform(self.state),
        }
    }
}

fn run_assertion<S, P>(state: S, select: impl FnOnce(S) -> P, verify: impl FnOnce(P)) {
    verify(select(state));
    debug!("assertion held");
}
