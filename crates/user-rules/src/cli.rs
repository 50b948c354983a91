//! CLI support for the `user-rules` binary.
//!
//! Parsing and rendering live here so the binary stays a thin shell and the
//! command behaviour can be exercised in tests without spawning a process.

use std::fmt;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::info;

use crate::catalog::RuleName;
use crate::error::{RuleError, SettingsError, UserError};
use crate::ordering::{sort_by, sort_by_key};
use crate::outcome::ValidationResult;
use crate::rule::CombineMode;
use crate::settings::RulesSettings;
use crate::user::{User, create_user};

/// `user-rules` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user-rules",
    about = "Check users against composable rules and sort user records",
    version
)]
pub struct CliArgs {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a user against a composed rule set.
    Check(CheckArgs),
    /// Sort the sample users and print them before and after each pass.
    Sort(SortArgs),
    /// List the built-in rule names.
    Rules,
}

/// Arguments for `user-rules check`.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Tier tag: basic, premium or platinum.
    #[arg(long, default_value = "basic")]
    pub tier: String,
    /// Username of the user to check.
    #[arg(long)]
    pub username: String,
    /// Email of the user to check.
    #[arg(long)]
    pub email: String,
    /// Password of the user to check.
    #[arg(long)]
    pub password: String,
    /// Age of the user to check.
    #[arg(long, allow_negative_numbers = true)]
    pub age: i32,
    /// Rule to apply; repeat for several. Defaults to every built-in rule.
    #[arg(long = "rule", value_name = "name")]
    pub rules: Vec<String>,
    /// How the rules combine: all, any, none or xor.
    #[arg(long, value_name = "mode")]
    pub mode: Option<String>,
}

/// Arguments for `user-rules sort`.
#[derive(Debug, Clone, Args)]
pub struct SortArgs {
    /// Key to sort by; repeat to sort again. Defaults to username, then age.
    #[arg(long = "by", value_enum, value_name = "key")]
    pub keys: Vec<SortKey>,
}

/// Field the sample users are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Ascending username.
    Username,
    /// Ascending age.
    Age,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Username => "username",
            Self::Age => "age",
        })
    }
}

/// Result of `user-rules check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// The user that was checked.
    pub user: User,
    /// Rules that were combined, in evaluation order.
    pub rules: Vec<RuleName>,
    /// How the rules were combined.
    pub mode: CombineMode,
    /// Outcome of the composite rule.
    pub outcome: ValidationResult,
}

impl CheckReport {
    /// Console rendering: the user, the verdict and any reason.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![self.user.to_string()];
        match self.outcome.reason() {
            None => lines.push("User is valid".to_owned()),
            Some(reason) => {
                lines.push("User is not valid".to_owned());
                lines.push(format!("Reason: {reason}"));
            }
        }
        lines.join("\n")
    }
}

/// Run a parsed command and return its console output.
///
/// # Errors
///
/// Returns [`CliError`] when the user, the rule names or the combination mode
/// are rejected.
pub fn run(args: CliArgs, settings: &RulesSettings) -> Result<String, CliError> {
    match args.command {
        Command::Check(check_args) => Ok(check(&check_args, settings)?.render()),
        Command::Sort(sort_args) => sort_report(&sort_args.keys),
        Command::Rules => Ok(rule_listing()),
    }
}

/// Build the user and apply the requested composite rule.
///
/// `--mode` wins over the configured default mode.
///
/// # Errors
///
/// Returns [`CliError::User`] for a rejected user or tier and
/// [`CliError::Rule`] for unknown rules, an unknown mode or a rule list the
/// mode cannot combine.
///
/// # Example
///
/// ```
/// use user_rules::cli::{CheckArgs, check};
/// use user_rules::settings::RulesSettings;
///
/// let args = CheckArgs {
///     tier: "platinum".to_owned(),
///     username: "admin".to_owned(),
///     email: "admin@#yzw.co.il".to_owned(),
///     password: "abc123".to_owned(),
///     age: 34,
///     rules: vec![
///         "email-longer-than-10".to_owned(),
///         "email-ends-with-IL".to_owned(),
///         "password-alphanumeric".to_owned(),
///     ],
///     mode: None,
/// };
/// let settings = RulesSettings { default_mode: None, json_logs: false };
///
/// let report = check(&args, &settings).expect("check runs");
/// assert!(report.outcome.is_valid());
/// ```
pub fn check(args: &CheckArgs, settings: &RulesSettings) -> Result<CheckReport, CliError> {
    let user = create_user(
        &args.tier,
        &args.username,
        &args.email,
        &args.password,
        args.age,
    )?;
    let rules = resolve_rule_names(&args.rules)?;
    let mode = args
        .mode
        .as_deref()
        .map_or_else(|| settings.default_mode(), str::parse)?;
    let composite = mode.combine(rules.iter().map(|name| name.rule()).collect())?;
    let outcome = composite.apply(&user);
    info!(
        username = user.username(),
        %mode,
        rules = rules.len(),
        valid = outcome.is_valid(),
        "user checked"
    );
    Ok(CheckReport {
        user,
        rules,
        mode,
        outcome,
    })
}

/// The users sorted by `user-rules sort`, in their initial order.
///
/// # Errors
///
/// Propagates [`UserError`] from user construction.
pub fn sample_users() -> Result<Vec<User>, UserError> {
    Ok(vec![
        User::new("charlie", "charlie@mail.com", "123", 30)?,
        User::new("alice", "alice@mail.com", "123", 28)?,
        User::new("bob", "bob@mail.com", "123", 25)?,
    ])
}

/// Sort the sample users by each key in turn, rendering every step.
///
/// An empty key list sorts by username and then by age.
///
/// # Errors
///
/// Propagates [`UserError`] from building the sample users.
pub fn sort_report(keys: &[SortKey]) -> Result<String, CliError> {
    let plan: &[SortKey] = if keys.is_empty() {
        &[SortKey::Username, SortKey::Age]
    } else {
        keys
    };
    let mut users = sample_users()?;
    let mut sections = Vec::with_capacity(plan.len() * 2);
    for key in plan {
        sections.push(render_section(&format!("Before sorting by {key}:"), &users));
        match key {
            SortKey::Username => {
                sort_by(&mut users, |left, right| left.username().cmp(right.username()));
            }
            SortKey::Age => sort_by_key(&mut users, User::age),
        }
        sections.push(render_section(&format!("After sorting by {key}:"), &users));
    }
    Ok(sections.join("\n\n"))
}

/// Built-in rule names, one per line.
#[must_use]
pub fn rule_listing() -> String {
    RuleName::ALL.map(RuleName::as_str).join("\n")
}

fn resolve_rule_names(raw: &[String]) -> Result<Vec<RuleName>, RuleError> {
    if raw.is_empty() {
        return Ok(RuleName::ALL.to_vec());
    }
    raw.iter().map(|name| name.parse()).collect()
}

fn render_section(heading: &str, users: &[User]) -> String {
    let mut lines = vec![heading.to_owned()];
    lines.extend(
        users
            .iter()
            .map(|user| format!("{} (age: {})", user.username(), user.age())),
    );
    lines.join("\n")
}

/// Errors surfaced by the CLI flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The user or its tier was rejected.
    #[error("invalid user: {source}")]
    User {
        /// Underlying user error.
        #[from]
        #[source]
        source: UserError,
    },
    /// A rule name, mode or rule list was rejected.
    #[error("invalid rules: {source}")]
    Rule {
        /// Underlying rule error.
        #[from]
        #[source]
        source: RuleError,
    },
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
