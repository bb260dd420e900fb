//! Validator registration
//!
//! A [`Validator`] ties one named boolean predicate to the fixed message of
//! the [`FormationError`] it raises. Each domain type registers an ordered
//! table of validators once; [`run_validators`] walks that table in
//! declaration order and stops at the first failure.

use crate::error::FormationError;
use std::borrow::Cow;
use std::fmt;

/// How a validator decides pass/fail
enum Rule<T> {
    /// Arbitrary predicate over the object state
    Predicate(fn(&T) -> bool),

    /// Optional attribute must be one of a fixed set of values
    OneOf {
        allowed: &'static [&'static str],
        value: fn(&T) -> Option<&str>,
    },
}

/// Named constraint on a domain object
///
/// Predicates are plain function pointers: they read the object and must
/// not mutate it.
///
/// # Example
/// ```rust
/// use blockkit_core::Validator;
///
/// struct Title(String);
///
/// let v = Validator::new("title_length", "title cannot exceed 5 characters", |t: &Title| {
///     t.0.len() <= 5
/// });
/// assert!(v.check(&Title("short".into())).is_ok());
/// assert!(v.check(&Title("too long".into())).is_err());
/// ```
pub struct Validator<T> {
    name: &'static str,
    message: Cow<'static, str>,
    rule: Rule<T>,
}

impl<T> Validator<T> {
    /// Create validator from predicate and failure message
    #[must_use]
    pub fn new(
        name: &'static str,
        message: impl Into<Cow<'static, str>>,
        predicate: fn(&T) -> bool,
    ) -> Self {
        Self {
            name,
            message: message.into(),
            rule: Rule::Predicate(predicate),
        }
    }

    /// Create enumerated-value validator
    ///
    /// Passes when `value` returns `None` or one of `allowed`. The message is
    /// the standard [`enum_message`] for `attribute`.
    #[must_use]
    pub fn one_of(
        name: &'static str,
        attribute: &str,
        allowed: &'static [&'static str],
        value: fn(&T) -> Option<&str>,
    ) -> Self {
        Self {
            name,
            message: Cow::Owned(enum_message(attribute, allowed)),
            rule: Rule::OneOf { allowed, value },
        }
    }

    /// Validator name (the predicate it wraps)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Message carried by the error this validator raises
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluate the predicate against `target`
    ///
    /// # Errors
    /// Returns [`FormationError`] with this validator's message if the
    /// predicate does not hold.
    pub fn check(&self, target: &T) -> Result<(), FormationError> {
        let passed = match &self.rule {
            Rule::Predicate(predicate) => predicate(target),
            Rule::OneOf { allowed, value } => value(target).map_or(true, |v| allowed.contains(&v)),
        };

        if passed {
            Ok(())
        } else {
            tracing::debug!(validator = self.name, "formation check failed: {}", self.message);
            Err(FormationError::new(self.message.clone()))
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Run every validator in order, short-circuiting on the first failure
///
/// # Errors
/// The first failing validator's [`FormationError`]. Later validators are not
/// evaluated.
pub fn run_validators<T>(target: &T, validators: &[Validator<T>]) -> Result<(), FormationError> {
    validators.iter().try_for_each(|validator| validator.check(target))
}

/// Standard message for enumerated-value constraints
#[must_use]
pub fn enum_message(attribute: &str, allowed: &[&str]) -> String {
    format!(
        "{attribute} attribute must be one of the following values: {}",
        allowed.join(", ")
    )
}

/// Check that `value` has at most `max` characters
#[inline]
#[must_use]
pub fn within_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Like [`within_length`], treating an absent value as valid
#[inline]
#[must_use]
pub fn optional_within_length(value: Option<&str>, max: usize) -> bool {
    value.map_or(true, |v| within_length(v, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Probe {
        test: String,
        style: Option<String>,
        calls: Cell<u32>,
    }

    impl Probe {
        fn new(test: &str) -> Self {
            Self {
                test: test.to_string(),
                style: None,
                calls: Cell::new(0),
            }
        }
    }

    fn probe_validators() -> Vec<Validator<Probe>> {
        vec![
            Validator::new("test_valid", "some validation message", |p: &Probe| {
                within_length(&p.test, 10)
            }),
            Validator::new("always_valid_test", "this should never fail", |p: &Probe| {
                p.calls.set(p.calls.get() + 1);
                true
            }),
        ]
    }

    #[test]
    fn passing_validators_return_ok() {
        let probe = Probe::new("a test");
        assert!(run_validators(&probe, &probe_validators()).is_ok());
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn first_failure_short_circuits() {
        let probe = Probe::new("this string is far too long");
        let err = run_validators(&probe, &probe_validators()).unwrap_err();

        assert_eq!(err.message(), "some validation message");
        // second predicate never evaluated
        assert_eq!(probe.calls.get(), 0);
    }

    #[test]
    fn enum_validator_message() {
        let v: Validator<Probe> = Validator::one_of(
            "style_valid",
            "style",
            &["primary", "danger"],
            |p| p.style.as_deref(),
        );
        assert_eq!(
            v.message(),
            "style attribute must be one of the following values: primary, danger"
        );
        assert_eq!(v.name(), "style_valid");
    }

    #[test]
    fn enum_validator_membership() {
        let v: Validator<Probe> = Validator::one_of(
            "style_valid",
            "style",
            &["primary", "danger"],
            |p| p.style.as_deref(),
        );

        let mut probe = Probe::new("x");
        assert!(v.check(&probe).is_ok());

        probe.style = Some("danger".to_string());
        assert!(v.check(&probe).is_ok());

        probe.style = Some("invalid".to_string());
        assert!(v.check(&probe).is_err());
    }

    #[test]
    fn length_counts_characters() {
        assert!(within_length("ééé", 3));
        assert!(!within_length("éééé", 3));
        assert!(optional_within_length(None, 0));
        assert!(!optional_within_length(Some("ab"), 1));
    }
}
