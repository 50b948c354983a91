//! Error types for the user-rules crate.
//!
//! [`UserError`] and [`RuleError`] describe contract violations: arguments
//! that were malformed at the point of construction or composition. A rule
//! judging a well-formed user to be unacceptable is not an error; see
//! [`ValidationResult`](crate::ValidationResult).

use thiserror::Error;

/// Errors raised when a [`User`](crate::User) cannot be built or updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// The username was empty or whitespace-only.
    #[error("Username cannot be empty")]
    EmptyUsername,

    /// The email was empty or whitespace-only.
    #[error("Email cannot be empty")]
    EmptyEmail,

    /// The password was empty or whitespace-only.
    #[error("Password cannot be empty")]
    EmptyPassword,

    /// The age was zero or negative.
    #[error("Age must be positive")]
    NonPositiveAge {
        /// The rejected age.
        age: i32,
    },

    /// The tier tag was empty or whitespace-only.
    #[error("User type cannot be null or empty")]
    EmptyTier,

    /// The tier tag did not name a known tier.
    #[error("Unknown user type: {tag}")]
    UnknownTier {
        /// The tag as supplied by the caller.
        tag: String,
    },
}

/// Errors raised while building rules or validation outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// An invalid outcome was constructed without a usable reason.
    #[error("Reason cannot be null or empty")]
    EmptyReason,

    /// A variadic combinator received no rules.
    #[error("At least one rule is required")]
    EmptyRuleSet,

    /// A rule name did not match the catalogue.
    #[error("unknown rule: {name}")]
    UnknownRule {
        /// The name as supplied by the caller.
        name: String,
    },

    /// A combination mode name was not recognised.
    #[error("unknown combination mode: {value}")]
    UnknownMode {
        /// The mode as supplied by the caller.
        value: String,
    },

    /// `xor` was asked to combine something other than two rules.
    #[error("xor combines exactly two rules, got {count}")]
    XorArity {
        /// Number of rules supplied.
        count: usize,
    },
}

/// Raised when command-line defaults cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load settings: {message}")]
pub struct SettingsError {
    /// Rendered configuration error.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_messages_match_field_order() {
        assert_eq!(UserError::EmptyUsername.to_string(), "Username cannot be empty");
        assert_eq!(UserError::EmptyEmail.to_string(), "Email cannot be empty");
        assert_eq!(UserError::EmptyPassword.to_string(), "Password cannot be empty");
        assert_eq!(
            UserError::NonPositiveAge { age: -3 }.to_string(),
            "Age must be positive"
        );
    }

    #[test]
    fn user_error_unknown_tier_formats_correctly() {
        let err = UserError::UnknownTier {
            tag: "gold".to_owned(),
        };
        assert_eq!(err.to_string(), "Unknown user type: gold");
    }

    #[test]
    fn user_error_empty_tier_formats_correctly() {
        assert_eq!(
            UserError::EmptyTier.to_string(),
            "User type cannot be null or empty"
        );
    }

    #[test]
    fn rule_error_empty_reason_formats_correctly() {
        assert_eq!(
            RuleError::EmptyReason.to_string(),
            "Reason cannot be null or empty"
        );
    }

    #[test]
    fn rule_error_empty_rule_set_formats_correctly() {
        assert_eq!(
            RuleError::EmptyRuleSet.to_string(),
            "At least one rule is required"
        );
    }

    #[test]
    fn rule_error_unknown_rule_formats_correctly() {
        let err = RuleError::UnknownRule {
            name: "email-is-nice".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown rule: email-is-nice");
    }

    #[test]
    fn rule_error_unknown_mode_formats_correctly() {
        let err = RuleError::UnknownMode {
            value: "most".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown combination mode: most");
    }

    #[test]
    fn settings_error_formats_correctly() {
        let err = SettingsError {
            message: "bad toml".to_owned(),
        };
        assert_eq!(err.to_string(), "failed to load settings: bad toml");
    }

    #[test]
    fn rule_error_xor_arity_formats_correctly() {
        let err = RuleError::XorArity { count: 3 };
        assert_eq!(err.to_string(), "xor combines exactly two rules, got 3");
    }
}
