//! Tests for identifiers, status parsing and the persisted record layout.

use super::*;
use crate::test_support::sample_user;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case(" user-1", UserValidationError::InvalidId)]
#[case("user-1 ", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_round_trips_through_string() {
    let id = UserId::new("user-0042-deadbeef").expect("valid id");
    let raw: String = id.clone().into();
    assert_eq!(UserId::try_from(raw), Ok(id));
}

#[rstest]
#[case("Active", UserStatus::Active)]
#[case("Inactive", UserStatus::Inactive)]
#[case("Pending", UserStatus::Pending)]
#[case("Blacklisted", UserStatus::Blacklisted)]
fn status_parses_exact_names(#[case] raw: &str, #[case] expected: UserStatus) {
    assert_eq!(raw.parse::<UserStatus>(), Ok(expected));
    assert_eq!(expected.to_string(), raw);
}

#[rstest]
#[case("active")]
#[case("ACTIVE")]
#[case("Suspended")]
#[case("")]
fn status_rejects_anything_else(#[case] raw: &str) {
    assert!(matches!(
        raw.parse::<UserStatus>(),
        Err(UserValidationError::UnknownStatus { .. })
    ));
}

#[rstest]
fn status_deserialisation_rejects_unknown_values() {
    let result = serde_json::from_value::<UserStatus>(json!("Suspended"));
    assert!(result.is_err());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn tier_accepts_one_to_three(#[case] value: u8) {
    assert_eq!(Tier::try_from(value).map(Tier::get), Ok(value));
}

#[rstest]
#[case(0)]
#[case(4)]
fn tier_rejects_other_values(#[case] value: u8) {
    assert_eq!(
        Tier::try_from(value),
        Err(UserValidationError::TierOutOfRange { value })
    );
}

#[rstest]
fn record_serialises_with_camel_case_keys() {
    let record = sample_user("user-1", "Lendsqr", UserStatus::Active);
    let value = serde_json::to_value(&record).expect("serialise");

    for key in [
        "id",
        "organization",
        "username",
        "email",
        "phoneNumber",
        "dateJoined",
        "status",
        "profile",
        "tier",
        "accountSummary",
        "educationAndEmployment",
        "socials",
        "guarantors",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["status"], json!("Active"));
    assert_eq!(value["profile"]["avatarUrl"], json!(null));
    assert_eq!(value["educationAndEmployment"]["monthlyIncome"], json!([200000, 400000]));
}

#[rstest]
fn record_round_trips_through_json() {
    let record = sample_user("user-2", "Irorun", UserStatus::Pending);
    let json = serde_json::to_string(&record).expect("serialise");
    let decoded: UserRecord = serde_json::from_str(&json).expect("deserialise");
    assert_eq!(decoded, record);
}

#[rstest]
fn date_joined_day_truncates_to_the_calendar_date() {
    let mut record = sample_user("user-3", "Lendsqr", UserStatus::Active);
    record.date_joined = "2024-01-15T10:30:00.000Z".to_owned();
    assert_eq!(record.date_joined_day(), "2024-01-15");

    record.date_joined = "2024".to_owned();
    assert_eq!(record.date_joined_day(), "2024");
}

#[rstest]
fn with_status_changes_only_the_status() {
    let record = sample_user("user-4", "Lendsqr", UserStatus::Active);
    let updated = record.with_status(UserStatus::Blacklisted);
    assert_eq!(updated.status, UserStatus::Blacklisted);
    assert_eq!(
        UserRecord {
            status: UserStatus::Active,
            ..updated
        },
        record
    );
}
