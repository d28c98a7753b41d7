//! Unit tests for account and device entities

use chrono::{Duration, Utc};
use crate::domain::entities::account::{Account, AccountProfile, Role};
use crate::domain::entities::device::DevicePlatform;

fn sample_account() -> Account {
    Account::new(
        "jane@corp.com".to_string(),
        "$2b$04$hash".to_string(),
        "Jane".to_string(),
        "Doe".to_string(),
        Role::Employee,
        Utc::now(),
    )
}

#[test]
fn test_new_account_is_unverified_and_disabled() {
    let account = sample_account();

    assert!(!account.verified);
    assert!(!account.enabled);
    assert!(!account.is_active());
    assert_eq!(account.timezone, "UTC");
    assert_eq!(account.role, Role::Employee);
    assert_eq!(account.created_at, account.updated_at);
}

#[test]
fn test_mark_verified_and_enabled_is_idempotent() {
    let mut account = sample_account();
    let later = account.created_at + Duration::minutes(3);

    assert!(account.mark_verified_and_enabled(later));
    assert!(account.verified && account.enabled);
    assert_eq!(account.updated_at, later);

    assert!(!account.mark_verified_and_enabled(later + Duration::minutes(1)));
    assert_eq!(account.updated_at, later);
}

#[test]
fn test_profile_never_exposes_password_hash() {
    let account = sample_account();
    let json = serde_json::to_value(account.profile()).unwrap();

    assert_eq!(json["firstName"], "Jane");
    assert_eq!(json["lastName"], "Doe");
    assert_eq!(json["email"], "jane@corp.com");
    assert_eq!(json["role"], "Employee");
    assert!(json.get("passwordHash").is_none());

    let full = serde_json::to_value(&account).unwrap();
    assert!(full.get("password_hash").is_none());
}

#[test]
fn test_profile_from_account() {
    let account = sample_account();
    let profile = AccountProfile::from(&account);
    assert_eq!(profile.id, account.id);
}

#[test]
fn test_role_names_round_trip() {
    for role in Role::ALL {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
    assert_eq!(
        serde_json::to_string(&Role::EmployeeRelationsHr).unwrap(),
        "\"Employee Relations HR\""
    );
    assert!("Janitor".parse::<Role>().is_err());
}

#[test]
fn test_device_platform_parsing() {
    assert_eq!("android".parse::<DevicePlatform>(), Ok(DevicePlatform::Android));
    assert_eq!(" iOS ".parse::<DevicePlatform>(), Ok(DevicePlatform::Ios));
    assert_eq!("WEB".parse::<DevicePlatform>(), Ok(DevicePlatform::Web));
    assert!("blackberry".parse::<DevicePlatform>().is_err());
}
