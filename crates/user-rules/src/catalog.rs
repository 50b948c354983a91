//! Built-in rules over user fields.
//!
//! Every factory returns a fresh stateless [`Rule`]. The failure messages are
//! part of the public contract and must not change.
//!
//! [`RuleName`] gives each rule a stable kebab-case name so rule sets can be
//! chosen from the command line or configuration.

use std::fmt;
use std::str::FromStr;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::RuleError;
use crate::outcome::ValidationResult;
use crate::rule::Rule;
use crate::user::User;

fn check(
    reason: &'static str,
    predicate: impl Fn(&User) -> bool + Send + Sync + 'static,
) -> Rule {
    Rule::new(move |user| {
        if predicate(user) {
            ValidationResult::Valid
        } else {
            ValidationResult::rejected(reason)
        }
    })
}

/// Email must end with `il`.
#[must_use]
pub fn email_ends_with_il() -> Rule {
    check("Email must end with 'il'", |user| user.email().ends_with("il"))
}

/// Email must be longer than 10 characters.
#[must_use]
pub fn email_length_bigger_than_10() -> Rule {
    check("Email must be longer than 10 characters", |user| {
        user.email().chars().count() > 10
    })
}

/// Password must be longer than 8 characters.
#[must_use]
pub fn password_length_bigger_than_8() -> Rule {
    check("Password must be longer than 8 characters", |user| {
        user.password().chars().count() > 8
    })
}

/// Password may only contain letters and digits.
///
/// A letter is any character in a Unicode letter category (`L*`) and a digit
/// is a decimal number (`Nd`). Other numerics such as `½` or `Ⅻ` and
/// combining marks are rejected.
#[must_use]
pub fn password_includes_letters_numbers_only() -> Rule {
    check("Password must include only letters and numbers", |user| {
        user.password().chars().all(is_letter_or_digit)
    })
}

fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Password must contain `$`.
#[must_use]
pub fn password_includes_dollar_sign() -> Rule {
    check("Password must include the dollar sign '$'", |user| {
        user.password().contains('$')
    })
}

/// Password must not equal the username.
#[must_use]
pub fn password_is_different_from_username() -> Rule {
    check("Password must be different from username", |user| {
        user.password() != user.username()
    })
}

/// User must be older than 18.
#[must_use]
pub fn age_bigger_than_18() -> Rule {
    check("User must be older than 18", |user| user.age() > 18)
}

/// Username must be longer than 8 characters.
#[must_use]
pub fn username_length_bigger_than_8() -> Rule {
    check("Username must be longer than 8 characters", |user| {
        user.username().chars().count() > 8
    })
}

/// Stable names for the built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    /// [`email_ends_with_il`].
    EmailEndsWithIl,
    /// [`email_length_bigger_than_10`].
    EmailLongerThan10,
    /// [`password_length_bigger_than_8`].
    PasswordLongerThan8,
    /// [`password_includes_letters_numbers_only`].
    PasswordAlphanumeric,
    /// [`password_includes_dollar_sign`].
    PasswordHasDollarSign,
    /// [`password_is_different_from_username`].
    PasswordDiffersFromUsername,
    /// [`age_bigger_than_18`].
    AgeOver18,
    /// [`username_length_bigger_than_8`].
    UsernameLongerThan8,
}

impl RuleName {
    /// Every built-in rule in catalogue order.
    pub const ALL: [Self; 8] = [
        Self::EmailEndsWithIl,
        Self::EmailLongerThan10,
        Self::PasswordLongerThan8,
        Self::PasswordAlphanumeric,
        Self::PasswordHasDollarSign,
        Self::PasswordDiffersFromUsername,
        Self::AgeOver18,
        Self::UsernameLongerThan8,
    ];

    /// Kebab-case name accepted by [`RuleName::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmailEndsWithIl => "email-ends-with-il",
            Self::EmailLongerThan10 => "email-longer-than-10",
            Self::PasswordLongerThan8 => "password-longer-than-8",
            Self::PasswordAlphanumeric => "password-alphanumeric",
            Self::PasswordHasDollarSign => "password-has-dollar-sign",
            Self::PasswordDiffersFromUsername => "password-differs-from-username",
            Self::AgeOver18 => "age-over-18",
            Self::UsernameLongerThan8 => "username-longer-than-8",
        }
    }

    /// Build the named rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use user_rules::{RuleName, User};
    ///
    /// let rule = "age-over-18".parse::<RuleName>().expect("known rule").rule();
    /// let user = User::new("bob", "bob@example.il", "BobPassword$", 30).expect("valid user");
    /// assert!(rule.apply(&user).is_valid());
    /// ```
    #[must_use]
    pub fn rule(self) -> Rule {
        match self {
            Self::EmailEndsWithIl => email_ends_with_il(),
            Self::EmailLongerThan10 => email_length_bigger_than_10(),
            Self::PasswordLongerThan8 => password_length_bigger_than_8(),
            Self::PasswordAlphanumeric => password_includes_letters_numbers_only(),
            Self::PasswordHasDollarSign => password_includes_dollar_sign(),
            Self::PasswordDiffersFromUsername => password_is_different_from_username(),
            Self::AgeOver18 => age_bigger_than_18(),
            Self::UsernameLongerThan8 => username_length_bigger_than_8(),
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = RuleError;

    /// Parse a kebab-case rule name, ignoring ASCII case.
    ///
    /// Case folding also admits the older `email-ends-with-IL` spelling.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| RuleError::UnknownRule {
                name: name.to_owned(),
            })
    }
}
