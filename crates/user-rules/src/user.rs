//! User record model.

use std::fmt;
use std::str::FromStr;

use crate::error::UserError;

/// Account tier carried by a [`User`].
///
/// Tiers are labels only; no rule or ordering treats them differently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserTier {
    /// Entry tier, assigned when no other tier is requested.
    #[default]
    Basic,
    /// Premium tier.
    Premium,
    /// Platinum tier.
    Platinum,
}

impl UserTier {
    /// Every tier, lowest first.
    pub const ALL: [Self; 3] = [Self::Basic, Self::Premium, Self::Platinum];

    /// Lower-case tag accepted by [`UserTier::from_str`].
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Platinum => "platinum",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for UserTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserTier {
    type Err = UserError;

    /// Parse a tier tag after Unicode lowercasing. Surrounding whitespace is
    /// not trimmed.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag.trim().is_empty() {
            return Err(UserError::EmptyTier);
        }
        let folded = tag.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.tag() == folded)
            .ok_or_else(|| UserError::UnknownTier {
                tag: tag.to_owned(),
            })
    }
}

/// Application user.
///
/// ## Invariants
/// - `username`, `email` and `password` are non-empty once trimmed of
///   whitespace. The stored text is kept exactly as supplied.
/// - `age` is strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    email: String,
    password: String,
    age: i32,
    tier: UserTier,
}

impl User {
    /// Fallible constructor enforcing every field invariant.
    ///
    /// Fields are checked in declaration order and the first violation is
    /// returned. The user starts in the [`UserTier::Basic`] tier.
    ///
    /// # Errors
    ///
    /// Returns [`UserError`] naming the first field that is blank, or
    /// [`UserError::NonPositiveAge`] when `age` is zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use user_rules::{User, UserError};
    ///
    /// let user = User::new("alice", "alice@example.com", "Password123$", 25)
    ///     .expect("valid user");
    /// assert_eq!(user.username(), "alice");
    ///
    /// let err = User::new("   ", "alice@example.com", "Password123$", 25)
    ///     .expect_err("blank username");
    /// assert_eq!(err, UserError::EmptyUsername);
    /// ```
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        age: i32,
    ) -> Result<Self, UserError> {
        Ok(Self {
            username: require_text(username.into(), UserError::EmptyUsername)?,
            email: require_text(email.into(), UserError::EmptyEmail)?,
            password: require_text(password.into(), UserError::EmptyPassword)?,
            age: require_positive(age)?,
            tier: UserTier::default(),
        })
    }

    /// Return the same user tagged with `tier`.
    #[must_use]
    pub const fn with_tier(mut self, tier: UserTier) -> Self {
        self.tier = tier;
        self
    }

    /// Login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Plain-text password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Age in years.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Account tier.
    #[must_use]
    pub const fn tier(&self) -> UserTier {
        self.tier
    }

    /// Replace the username.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::EmptyUsername`] and leaves the user unchanged
    /// when `username` is blank.
    pub fn set_username(&mut self, username: impl Into<String>) -> Result<(), UserError> {
        self.username = require_text(username.into(), UserError::EmptyUsername)?;
        Ok(())
    }

    /// Replace the email.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::EmptyEmail`] and leaves the user unchanged when
    /// `email` is blank.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), UserError> {
        self.email = require_text(email.into(), UserError::EmptyEmail)?;
        Ok(())
    }

    /// Replace the password.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::EmptyPassword`] and leaves the user unchanged
    /// when `password` is blank.
    pub fn set_password(&mut self, password: impl Into<String>) -> Result<(), UserError> {
        self.password = require_text(password.into(), UserError::EmptyPassword)?;
        Ok(())
    }

    /// Replace the age.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NonPositiveAge`] and leaves the user unchanged
    /// when `age` is zero or negative.
    pub fn set_age(&mut self, age: i32) -> Result<(), UserError> {
        self.age = require_positive(age)?;
        Ok(())
    }

    /// Move the user to another tier.
    pub const fn set_tier(&mut self, tier: UserTier) {
        self.tier = tier;
    }
}

/// Renders as `<Tier>User{username=.., email=.., age=..}`.
///
/// The password is never included.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}User{{username={}, email={}, age={}}}",
            self.tier, self.username, self.email, self.age
        )
    }
}

/// Build a user in the tier named by `tag`.
///
/// The tag is matched case-insensitively against `basic`, `premium` and
/// `platinum`. The tag is checked before any user field.
///
/// # Errors
///
/// Returns [`UserError::EmptyTier`] or [`UserError::UnknownTier`] for a bad
/// tag, otherwise any error from [`User::new`].
///
/// # Examples
///
/// ```
/// use user_rules::{UserTier, create_user};
///
/// let user = create_user("Platinum", "admin", "admin@yzw.co.il", "abc123", 34)
///     .expect("valid user");
/// assert_eq!(user.tier(), UserTier::Platinum);
/// ```
pub fn create_user(
    tag: &str,
    username: impl Into<String>,
    email: impl Into<String>,
    password: impl Into<String>,
    age: i32,
) -> Result<User, UserError> {
    let tier = tag.parse::<UserTier>()?;
    Ok(User::new(username, email, password, age)?.with_tier(tier))
}

fn require_text(value: String, error: UserError) -> Result<String, UserError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(value)
}

const fn require_positive(age: i32) -> Result<i32, UserError> {
    if age <= 0 {
        return Err(UserError::NonPositiveAge { age });
    }
    Ok(age)
}

#[cfg(test)]
mod tests;
