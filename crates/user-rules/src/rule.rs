//! Rules and the combinators that compose them.
//!
//! A [`Rule`] is a pure function from a [`User`] to a [`ValidationResult`].
//! Combinators never mutate their operands; they wrap them in a new rule, so
//! a rule may be cloned into any number of compositions.
//!
//! | Combinator | Evaluation | Outcome |
//! |---|---|---|
//! | [`Rule::and`] | stops at the first failure | first failure, else `other` |
//! | [`Rule::or`] | stops at the first success | first success, else `other` |
//! | [`Rule::xor`] | both sides | valid iff exactly one side is valid |
//! | [`Rule::all`] | in order, stops at the first failure | first failure, else valid |
//! | [`Rule::none`] | in order, stops at the first success | valid iff every rule fails |

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::trace;

use crate::error::RuleError;
use crate::outcome::ValidationResult;
use crate::user::User;

const XOR_FAILED: &str = "XOR validation failed: both are either valid or invalid";
const NONE_FAILED: &str = "At least one validation passed when none should";

type Check = dyn Fn(&User) -> ValidationResult + Send + Sync;

/// A composable validation rule over [`User`] records.
#[derive(Clone)]
pub struct Rule(Arc<Check>);

impl Rule {
    /// Wrap a check function as a rule.
    ///
    /// The function must be referentially transparent: the same user always
    /// yields an equivalent outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use user_rules::{Rule, User, ValidationResult};
    ///
    /// let short_name = Rule::new(|user: &User| {
    ///     if user.username().len() < 6 {
    ///         ValidationResult::Valid
    ///     } else {
    ///         ValidationResult::invalid("username too long").expect("reason is present")
    ///     }
    /// });
    ///
    /// let user = User::new("bob", "bob@example.il", "BobPassword$", 30).expect("valid user");
    /// assert!(short_name.apply(&user).is_valid());
    /// ```
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&User) -> ValidationResult + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Evaluate the rule against `user`.
    #[must_use]
    pub fn apply(&self, user: &User) -> ValidationResult {
        (self.0)(user)
    }

    /// Both rules must pass; the first failure wins.
    ///
    /// `other` is not evaluated when `self` fails.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |user| {
            let outcome = self.apply(user);
            if outcome.is_valid() {
                other.apply(user)
            } else {
                outcome
            }
        })
    }

    /// At least one rule must pass.
    ///
    /// `other` is not evaluated when `self` passes. When both fail the
    /// outcome is `other`'s.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |user| {
            let outcome = self.apply(user);
            if outcome.is_valid() {
                outcome
            } else {
                other.apply(user)
            }
        })
    }

    /// Exactly one rule must pass.
    ///
    /// Both sides are always evaluated and their individual reasons are
    /// discarded on failure.
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        Self::new(move |user| {
            let first = self.apply(user).is_valid();
            let second = other.apply(user).is_valid();
            if first ^ second {
                ValidationResult::Valid
            } else {
                ValidationResult::rejected(XOR_FAILED)
            }
        })
    }

    /// Every rule must pass; returns the first failure in order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyRuleSet`] when `rules` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use user_rules::{Rule, RuleError, User, catalog};
    ///
    /// let rule = Rule::all([
    ///     catalog::email_length_bigger_than_10(),
    ///     catalog::email_ends_with_il(),
    /// ])
    /// .expect("at least one rule");
    ///
    /// let user = User::new("alice", "alice@example.com", "Password123$", 25)
    ///     .expect("valid user");
    /// assert_eq!(rule.apply(&user).reason(), Some("Email must end with 'il'"));
    ///
    /// assert!(matches!(Rule::all([]), Err(RuleError::EmptyRuleSet)));
    /// ```
    pub fn all<I>(rules: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = Self>,
    {
        let members = collect_non_empty(rules)?;
        Ok(Self::new(move |user| {
            for (position, rule) in members.iter().enumerate() {
                let outcome = rule.apply(user);
                if !outcome.is_valid() {
                    trace!(position, reason = outcome.reason(), "all: rule failed");
                    return outcome;
                }
            }
            ValidationResult::Valid
        }))
    }

    /// Every rule must fail.
    ///
    /// Evaluation stops at the first rule that passes.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyRuleSet`] when `rules` is empty.
    pub fn none<I>(rules: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = Self>,
    {
        let members = collect_non_empty(rules)?;
        Ok(Self::new(move |user| {
            members
                .iter()
                .position(|rule| rule.apply(user).is_valid())
                .map_or(ValidationResult::Valid, |position| {
                    trace!(position, "none: rule passed");
                    ValidationResult::rejected(NONE_FAILED)
                })
        }))
    }

    /// At least one rule must pass; folds `rules` with [`Rule::or`].
    ///
    /// When every rule fails the outcome is the last rule's.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyRuleSet`] when `rules` is empty.
    pub fn any<I>(rules: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = Self>,
    {
        rules
            .into_iter()
            .reduce(Self::or)
            .ok_or(RuleError::EmptyRuleSet)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}

fn collect_non_empty<I>(rules: I) -> Result<Vec<Rule>, RuleError>
where
    I: IntoIterator<Item = Rule>,
{
    let members: Vec<Rule> = rules.into_iter().collect();
    if members.is_empty() {
        return Err(RuleError::EmptyRuleSet);
    }
    Ok(members)
}

/// How a list of rules is folded into a single rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CombineMode {
    /// [`Rule::all`].
    #[default]
    All,
    /// [`Rule::any`].
    Any,
    /// [`Rule::none`].
    None,
    /// [`Rule::xor`] over exactly two rules.
    Xor,
}

impl CombineMode {
    /// Name accepted by [`CombineMode::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Any => "any",
            Self::None => "none",
            Self::Xor => "xor",
        }
    }

    /// Fold `rules` into one rule using this mode.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyRuleSet`] for an empty list, or
    /// [`RuleError::XorArity`] when [`CombineMode::Xor`] does not receive
    /// exactly two rules.
    pub fn combine(self, rules: Vec<Rule>) -> Result<Rule, RuleError> {
        match self {
            Self::All => Rule::all(rules),
            Self::Any => Rule::any(rules),
            Self::None => Rule::none(rules),
            Self::Xor => {
                let count = rules.len();
                match <[Rule; 2]>::try_from(rules) {
                    Ok([first, second]) => Ok(first.xor(second)),
                    Err(_) => Err(RuleError::XorArity { count }),
                }
            }
        }
    }
}

impl fmt::Display for CombineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CombineMode {
    type Err = RuleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [Self::All, Self::Any, Self::None, Self::Xor]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| RuleError::UnknownMode {
                value: value.to_owned(),
            })
    }
}
