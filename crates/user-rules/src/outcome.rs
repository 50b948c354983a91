//! Validation outcomes produced by rules.

use std::fmt;

use crate::error::RuleError;

/// Non-empty explanation attached to a failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reason(String);

impl Reason {
    /// Validate and construct a [`Reason`].
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyReason`] when `text` is empty or
    /// whitespace-only.
    pub fn new(text: impl Into<String>) -> Result<Self, RuleError> {
        let owned = text.into();
        if owned.trim().is_empty() {
            return Err(RuleError::EmptyReason);
        }
        Ok(Self(owned))
    }

    /// Reason for the built-in rules, whose messages are fixed literals.
    pub(crate) fn fixed(text: &'static str) -> Self {
        Self(text.to_owned())
    }

    /// Borrow the reason text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Reason {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Reason> for String {
    fn from(value: Reason) -> Self {
        value.0
    }
}

/// Outcome of applying a [`Rule`](crate::Rule) to a user.
///
/// An `Invalid` outcome is an ordinary value, not an error: callers branch on
/// [`is_valid`](Self::is_valid) and read [`reason`](Self::reason) for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The user satisfied the rule.
    Valid,
    /// The user failed the rule for the given reason.
    Invalid(Reason),
}

impl ValidationResult {
    /// Build an `Invalid` outcome from free text.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyReason`] when `reason` is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use user_rules::{RuleError, ValidationResult};
    ///
    /// let outcome = ValidationResult::invalid("too young").expect("reason is present");
    /// assert!(!outcome.is_valid());
    /// assert_eq!(outcome.reason(), Some("too young"));
    ///
    /// assert_eq!(ValidationResult::invalid("  "), Err(RuleError::EmptyReason));
    /// ```
    pub fn invalid(reason: impl Into<String>) -> Result<Self, RuleError> {
        Reason::new(reason).map(Self::Invalid)
    }

    pub(crate) fn rejected(reason: &'static str) -> Self {
        Self::Invalid(Reason::fixed(reason))
    }

    /// `true` only for [`ValidationResult::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Failure text for `Invalid`, `None` for `Valid`.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason.as_str()),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid(reason) => write!(f, "invalid: {reason}"),
        }
    }
}
