//! Account entity representing a registered employee identity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organisational role carried by an account and snapshotted into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Admin HR")]
    AdminHr,
    #[serde(rename = "Payroll HR")]
    PayrollHr,
    #[serde(rename = "Recruitment HR")]
    RecruitmentHr,
    #[serde(rename = "Employee Relations HR")]
    EmployeeRelationsHr,
    #[serde(rename = "HR Analyst")]
    HrAnalyst,
    #[serde(rename = "General HR")]
    GeneralHr,
    /// Assigned to self-registered accounts
    #[default]
    #[serde(rename = "Employee")]
    Employee,
}

impl Role {
    /// Every role, in display order
    pub const ALL: [Role; 7] = [
        Role::AdminHr,
        Role::PayrollHr,
        Role::RecruitmentHr,
        Role::EmployeeRelationsHr,
        Role::HrAnalyst,
        Role::GeneralHr,
        Role::Employee,
    ];

    /// Persisted and displayed name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::AdminHr => "Admin HR",
            Role::PayrollHr => "Payroll HR",
            Role::RecruitmentHr => "Recruitment HR",
            Role::EmployeeRelationsHr => "Employee Relations HR",
            Role::HrAnalyst => "HR Analyst",
            Role::GeneralHr => "General HR",
            Role::Employee => "Employee",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}

/// Input for creating an account through the account write path.
///
/// Carries the plaintext password; it is hashed before anything is stored.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Account entity representing a registered employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Login email, trimmed and lowercased
    pub email: String,

    /// bcrypt hash of the password; never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Organisational role
    pub role: Role,

    /// Whether the email address has been confirmed
    pub verified: bool,

    /// Whether the account may be used; only ever set together with `verified`
    pub enabled: bool,

    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub date_of_joining: Option<NaiveDate>,

    /// IANA timezone name
    pub timezone: String,

    /// Timestamp of the last successful login
    pub last_login_at: Option<DateTime<Utc>>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new unverified, disabled account
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        role: Role,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            role,
            verified: false,
            enabled: false,
            first_name,
            last_name,
            phone: None,
            department: None,
            job_title: None,
            date_of_joining: None,
            timezone: String::from("UTC"),
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account as verified and enabled in one step.
    ///
    /// Returns `false` when the account was already in that state.
    pub fn mark_verified_and_enabled(&mut self, now: DateTime<Utc>) -> bool {
        if self.verified && self.enabled {
            return false;
        }
        self.verified = true;
        self.enabled = true;
        self.updated_at = now;
        true
    }

    /// Replaces the stored credential hash
    pub fn set_password_hash(&mut self, password_hash: String, now: DateTime<Utc>) {
        self.password_hash = password_hash;
        self.updated_at = now;
    }

    /// Whether the account may be used to sign in
    pub fn is_active(&self) -> bool {
        self.verified && self.enabled
    }

    /// Public projection returned to API clients
    pub fn profile(&self) -> AccountProfile {
        AccountProfile::from(self)
    }
}

/// Public view of an account; never carries credential material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Account> for AccountProfile {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.clone(),
            role: account.role,
        }
    }
}
