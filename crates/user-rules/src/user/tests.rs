//! Tests for the user record model.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn alice() -> User {
    User::new("alice", "alice@example.com", "Password123$", 25).expect("valid user")
}

#[rstest]
fn new_user_keeps_fields_verbatim() {
    let user = User::new("  bob ", "bob@example.il", "BobPassword$", 30).expect("valid user");

    assert_eq!(user.username(), "  bob ");
    assert_eq!(user.email(), "bob@example.il");
    assert_eq!(user.password(), "BobPassword$");
    assert_eq!(user.age(), 30);
    assert_eq!(user.tier(), UserTier::Basic);
}

#[rstest]
#[case("", "a@b.com", "secret", 20, UserError::EmptyUsername)]
#[case(" \t", "a@b.com", "secret", 20, UserError::EmptyUsername)]
#[case("ada", "", "secret", 20, UserError::EmptyEmail)]
#[case("ada", "   ", "secret", 20, UserError::EmptyEmail)]
#[case("ada", "a@b.com", "", 20, UserError::EmptyPassword)]
#[case("ada", "a@b.com", "\n", 20, UserError::EmptyPassword)]
#[case("ada", "a@b.com", "secret", 0, UserError::NonPositiveAge { age: 0 })]
#[case("ada", "a@b.com", "secret", -7, UserError::NonPositiveAge { age: -7 })]
fn new_user_rejects_invalid_fields(
    #[case] username: &str,
    #[case] email: &str,
    #[case] password: &str,
    #[case] age: i32,
    #[case] expected: UserError,
) {
    let err = User::new(username, email, password, age).expect_err("construction should fail");
    assert_eq!(err, expected);
}

#[rstest]
fn first_failing_field_is_reported() {
    let err = User::new("", "", "", 0).expect_err("construction should fail");
    assert_eq!(err, UserError::EmptyUsername);
}

#[rstest]
fn age_of_one_is_accepted() {
    let user = User::new("ada", "a@b.com", "secret", 1).expect("valid user");
    assert_eq!(user.age(), 1);
}

#[rstest]
fn rejected_setters_leave_user_unchanged(alice: User) {
    let mut user = alice.clone();

    assert_eq!(user.set_username(" "), Err(UserError::EmptyUsername));
    assert_eq!(user.set_email(""), Err(UserError::EmptyEmail));
    assert_eq!(user.set_password("  "), Err(UserError::EmptyPassword));
    assert_eq!(user.set_age(-1), Err(UserError::NonPositiveAge { age: -1 }));

    assert_eq!(user, alice);
}

#[rstest]
fn accepted_setters_update_fields(alice: User) {
    let mut user = alice;

    user.set_username("alice_smith").expect("valid username");
    user.set_email("alice@example.il").expect("valid email");
    user.set_password("Secret$42").expect("valid password");
    user.set_age(26).expect("valid age");
    user.set_tier(UserTier::Premium);

    assert_eq!(user.username(), "alice_smith");
    assert_eq!(user.email(), "alice@example.il");
    assert_eq!(user.password(), "Secret$42");
    assert_eq!(user.age(), 26);
    assert_eq!(user.tier(), UserTier::Premium);
}

#[rstest]
#[case("basic", UserTier::Basic)]
#[case("PREMIUM", UserTier::Premium)]
#[case("Platinum", UserTier::Platinum)]
#[case("PrEmIuM", UserTier::Premium)]
fn tier_tags_parse_case_insensitively(#[case] tag: &str, #[case] expected: UserTier) {
    assert_eq!(tag.parse::<UserTier>(), Ok(expected));
}

#[rstest]
#[case("", UserError::EmptyTier)]
#[case("   ", UserError::EmptyTier)]
#[case("gold", UserError::UnknownTier { tag: "gold".to_owned() })]
#[case(" basic", UserError::UnknownTier { tag: " basic".to_owned() })]
#[case("PLATİNUM", UserError::UnknownTier { tag: "PLATİNUM".to_owned() })]
fn bad_tier_tags_are_rejected(#[case] tag: &str, #[case] expected: UserError) {
    assert_eq!(tag.parse::<UserTier>(), Err(expected));
}

#[rstest]
fn create_user_tags_the_requested_tier() {
    let user = create_user("premium", "carol", "carol@example.com", "pw", 41).expect("valid user");

    assert_eq!(user.tier(), UserTier::Premium);
    assert_eq!(user.username(), "carol");
}

#[rstest]
fn create_user_checks_tag_before_fields() {
    let err = create_user("diamond", "", "", "", 0).expect_err("unknown tier");
    assert_eq!(
        err,
        UserError::UnknownTier {
            tag: "diamond".to_owned()
        }
    );
}

#[rstest]
fn display_names_tier_and_hides_password(alice: User) {
    let user = alice.with_tier(UserTier::Platinum);

    let rendered = user.to_string();

    assert_eq!(
        rendered,
        "PlatinumUser{username=alice, email=alice@example.com, age=25}"
    );
    assert!(!rendered.contains("Password123$"));
}
