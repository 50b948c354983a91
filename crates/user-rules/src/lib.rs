//! Composable validation rules and comparator-driven ordering for user
//! records.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Building [`User`] records whose fields are checked at construction
//! - Built-in field rules in [`catalog`], each producing a [`Rule`]
//! - Composing rules with [`Rule::and`], [`Rule::or`], [`Rule::xor`],
//!   [`Rule::all`] and [`Rule::none`]
//! - Stable in-place sorting of records with [`sort_by`]
//!
//! Rule failures are values ([`ValidationResult::Invalid`]); malformed
//! arguments are errors ([`UserError`], [`RuleError`]).
//!
//! # Example
//!
//! ```
//! use user_rules::{User, ValidationResult, catalog};
//!
//! let rule = catalog::email_length_bigger_than_10().and(catalog::email_ends_with_il());
//!
//! let alice = User::new("alice", "alice@example.com", "Password123$", 25).expect("valid user");
//! let bob = User::new("bob", "bob@example.il", "BobPassword$", 30).expect("valid user");
//!
//! assert_eq!(rule.apply(&alice).reason(), Some("Email must end with 'il'"));
//! assert_eq!(rule.apply(&bob), ValidationResult::Valid);
//! ```

pub mod catalog;
pub mod cli;
mod error;
mod ordering;
mod outcome;
mod rule;
pub mod settings;
mod user;

pub use catalog::RuleName;
pub use error::{RuleError, SettingsError, UserError};
pub use ordering::{sort_by, sort_by_key};
pub use outcome::{Reason, ValidationResult};
pub use rule::{CombineMode, Rule};
pub use user::{User, UserTier, create_user};
