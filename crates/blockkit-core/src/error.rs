//! Formation error
//!
//! The single error kind of the object model. Raised when a validator
//! predicate evaluates to `false`; carries that validator's fixed message.

use std::borrow::Cow;

/// A domain object violated one of its declared constraints
///
/// The message is the validator's static text (field name and limit), never
/// the offending value. Propagated untouched through `validate_json` and
/// `to_dict`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormationError {
    message: Cow<'static, str>,
}

impl FormationError {
    /// Create new formation error
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Validator message carried by this error
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
