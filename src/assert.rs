//! Assertion-value helpers for `then` and `and`.
//!
//! [`should_equal`] and [`should_contain`] turn an expected value into a
//! one-argument assertion closure suitable for the scenario chain. On
//! mismatch the closure panics with the rendered [`AssertionError`], which
//! the host test harness reports as a failed test. The checking logic is
//! factored into `Result`-returning functions so mismatch detection stays
//! unit-testable.

use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Mismatch detected by an assertion helper.
///
/// Rendered into the panic message; never caught inside the crate.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionError {
    /// Structural equality failed.
    #[error("expected {expected}, got {actual}")]
    NotEqual {
        /// Debug rendering of the expected value.
        expected: String,
        /// Debug rendering of the actual value.
        actual: String,
    },
    /// The entries named by the expected value differ in the actual value.
    #[error("expected {actual} to contain {expected}")]
    NotContained {
        /// JSON rendering of the expected entries.
        expected: String,
        /// JSON rendering of the actual value.
        actual: String,
    },
    /// `should_contain` needs a map-shaped expected value.
    #[error("should_contain expects a map-shaped value, got {expected}")]
    NotAnObject {
        /// JSON rendering of the offending expected value.
        expected: String,
    },
    /// A value could not be serialised for comparison.
    #[error("serialisation failed: {0}")]
    Unserialisable(String),
}

/// Build an assertion that the projection equals `expected`.
///
/// Comparison is `PartialEq`; cross-type comparisons such as `String`
/// against `&str` work wherever the standard library provides them.
///
/// # Examples
///
/// ```
/// use rehearse::{given, should_equal, state};
///
/// given(String::from("15")).then(state, should_equal("15"));
/// ```
///
/// # Panics
///
/// The returned closure panics when the projected value differs from
/// `expected`.
pub fn should_equal<A, E>(expected: E) -> impl Fn(A)
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    move |actual| {
        if let Err(error) = check_equal(&actual, &expected) {
            panic!("{error}");
        }
    }
}

/// Build an assertion that the projection contains the entries of
/// `expected`.
///
/// Both values are serialised to the JSON data model; only the top-level
/// keys present in `expected` are compared, and extra keys in the actual
/// value are ignored. The comparison is deliberately shallow: nested
/// values under a named key must match in full.
///
/// # Examples
///
/// ```
/// use rehearse::{given, should_contain, state};
/// use serde_json::json;
///
/// given(json!({ "user": "ada", "attempts": 3 }))
///     .then(state, should_contain(json!({ "user": "ada" })));
/// ```
///
/// # Panics
///
/// The returned closure panics when a named entry is missing or differs,
/// when `expected` is not map-shaped, or when either value cannot be
/// serialised.
pub fn should_contain<A, E>(expected: E) -> impl Fn(A)
where
    A: Serialize,
    E: Serialize,
{
    move |actual| {
        if let Err(error) = check_contains(&actual, &expected) {
            panic!("{error}");
        }
    }
}

fn check_equal<A, E>(actual: &A, expected: &E) -> Result<(), AssertionError>
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionError::NotEqual {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

fn check_contains<A, E>(actual: &A, expected: &E) -> Result<(), AssertionError>
where
    A: Serialize,
    E: Serialize,
{
    let expected = to_value(expected)?;
    let actual = to_value(actual)?;
    let Value::Object(wanted) = &expected else {
        return Err(AssertionError::NotAnObject {
            expected: expected.to_string(),
        });
    };
    let picked: serde_json::Map<String, Value> = match &actual {
        Value::Object(entries) => wanted
            .keys()
            .filter_map(|key| entries.get(key).map(|value| (key.clone(), value.clone())))
            .collect(),
        _ => serde_json::Map::new(),
    };
    if picked == *wanted {
        Ok(())
    } else {
        Err(AssertionError::NotContained {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, AssertionError> {
    serde_json::to_value(value).map_err(|error| AssertionError::Unserialisable(error.to_string()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Serialize;
    use serde_json::json;

    use super::{AssertionError, check_contains, check_equal, should_contain, should_equal};

    #[derive(Debug, Serialize)]
    struct Session {
        user: &'static str,
        attempts: u32,
    }

    #[rstest]
    fn equal_values_pass() {
        assert_eq!(check_equal(&4, &4), Ok(()));
        assert_eq!(check_equal(&String::from("on"), &"on"), Ok(()));
    }

    #[rstest]
    fn unequal_values_report_both_sides() {
        let error = check_equal(&1, &2).unwrap_err();
        assert_eq!(
            error,
            AssertionError::NotEqual {
                expected: "2".into(),
                actual: "1".into(),
            }
        );
    }

    #[rstest]
    #[case(json!({ "user": "ada" }), true)]
    #[case(json!({ "user": "ada", "attempts": 3 }), true)]
    #[case(json!({}), true)]
    #[case(json!({ "user": "bob" }), false)]
    #[case(json!({ "token": "x" }), false)]
    fn contains_compares_only_named_keys(#[case] expected: serde_json::Value, #[case] ok: bool) {
        let actual = Session {
            user: "ada",
            attempts: 3,
        };
        assert_eq!(check_contains(&actual, &expected).is_ok(), ok);
    }

    #[rstest]
    fn contains_is_shallow_under_named_keys() {
        let actual = json!({ "inner": { "a": 1, "b": 2 } });
        // A named key's value must match in full.
        assert!(check_contains(&actual, &json!({ "inner": { "a": 1 } })).is_err());
        assert!(check_contains(&actual, &json!({ "inner": { "a": 1, "b": 2 } })).is_ok());
    }

    #[rstest]
    fn non_object_actual_only_contains_the_empty_object() {
        assert!(check_contains(&5, &json!({})).is_ok());
        assert!(check_contains(&5, &json!({ "a": 1 })).is_err());
    }

    #[rstest]
    fn non_object_expected_is_rejected() {
        let error = check_contains(&json!({ "a": 1 }), &5).unwrap_err();
        assert!(matches!(error, AssertionError::NotAnObject { .. }));
    }

    #[rstest]
    fn helper_passes_silently_on_match() {
        should_equal(4)(4);
        should_contain(json!({ "user": "ada" }))(Session {
            user: "ada",
            attempts: 0,
        });
    }

    #[rstest]
    #[should_panic(expected = "expected 2, got 1")]
    fn should_equal_panics_with_the_rendered_error() {
        should_equal(2)(1);
    }

    #[rstest]
    #[should_panic(expected = "to contain")]
    fn should_contain_panics_with_the_rendered_error() {
        should_contain(json!({ "user": "bob" }))(Session {
            user: "ada",
            attempts: 0,
        });
    }
}
