//! Shared test doubles and sample records.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::ports::LatencySleeper;
use crate::domain::{
    AccountSummary, EducationAndEmployment, Guarantor, Profile, Socials, Tier, UserId,
    UserRecord, UserStatus,
};

/// Clock whose current time only moves when a test advances it.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    /// Clock frozen at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let delta = match TimeDelta::from_std(delta) {
            Ok(delta) => delta,
            Err(error) => {
                panic!("failed to convert Duration to TimeDelta: {error}; delta={delta:?}",)
            }
        };
        *self.lock_clock() += delta;
    }

    /// Move the clock forward by whole seconds; negative values rewind it.
    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Sleeper that returns at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateSleeper;

#[async_trait]
impl LatencySleeper for ImmediateSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// Records every requested delay and returns immediately.
#[derive(Default)]
pub struct RecordingSleeper(pub Mutex<Vec<Duration>>);

impl RecordingSleeper {
    /// Delays requested so far, in order.
    pub fn recorded(&self) -> Vec<Duration> {
        match self.0.lock() {
            Ok(entries) => entries.clone(),
            Err(_) => panic!("sleeper mutex"),
        }
    }
}

#[async_trait]
impl LatencySleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        let mut entries = match self.0.lock() {
            Ok(entries) => entries,
            Err(_) => panic!("sleeper mutex"),
        };
        entries.push(duration);
    }
}

fn user_id(raw: &str) -> UserId {
    match UserId::new(raw) {
        Ok(id) => id,
        Err(error) => panic!("sample id {raw:?} is invalid: {error}"),
    }
}

fn tier(value: u8) -> Tier {
    match Tier::try_from(value) {
        Ok(tier) => tier,
        Err(error) => panic!("sample tier {value} is invalid: {error}"),
    }
}

/// A complete record with the given identity, organisation and status.
///
/// Contact fields are derived from `id` so records built with different ids
/// never collide on username or email.
pub fn sample_user(id: &str, organization: &str, status: UserStatus) -> UserRecord {
    let handle: String = id.chars().filter(char::is_ascii_alphanumeric).collect();
    let domain = organization.to_lowercase();
    UserRecord {
        id: user_id(id),
        organization: organization.to_owned(),
        username: handle.clone(),
        email: format!("{handle}@{domain}.com"),
        phone_number: "08000000000".to_owned(),
        date_joined: "2021-06-01T09:15:00.000Z".to_owned(),
        status,
        profile: Profile {
            full_name: format!("Sample {handle}"),
            avatar_url: None,
            bvn: "22345678901".to_owned(),
            gender: "Female".to_owned(),
            marital_status: "Single".to_owned(),
            children: "None".to_owned(),
            type_of_residence: "Parent's Apartment".to_owned(),
        },
        tier: tier(2),
        account_summary: AccountSummary {
            balance: 200_000,
            account_number: "9912345678".to_owned(),
            bank_name: "Providus Bank".to_owned(),
        },
        education_and_employment: EducationAndEmployment {
            level_of_education: "B.Sc".to_owned(),
            employment_status: "Employed".to_owned(),
            sector_of_employment: "FinTech".to_owned(),
            duration_of_employment: "2 years".to_owned(),
            office_email: format!("{handle}@work.{domain}.com"),
            monthly_income: [200_000, 400_000],
            loan_repayment: 40_000,
        },
        socials: Socials {
            twitter: format!("@{handle}"),
            facebook: format!("Sample {handle}"),
            instagram: format!("@{handle}"),
        },
        guarantors: vec![Guarantor {
            full_name: "Debby Ogana".to_owned(),
            phone_number: "07060780922".to_owned(),
            email: "debby@gmail.com".to_owned(),
            relationship: "Sister".to_owned(),
        }],
    }
}

/// Three records used across filter, search and workflow tests.
///
/// | id | username | organisation | status | joined | phone |
/// |---|---|---|---|---|---|
/// | 1 | johndoe | Lendsqr | Active | 2024-01-15 | 08012345678 |
/// | 2 | janesmith | Irorun | Pending | 2024-02-20 | 08098765432 |
/// | 3 | bobwilson | Lendsqr | Blacklisted | 2024-01-15 | 07011112222 |
pub fn reference_users() -> Vec<UserRecord> {
    let rows = [
        ("1", "johndoe", "John Doe", "Lendsqr", UserStatus::Active, "2024-01-15T10:30:00.000Z", "08012345678"),
        ("2", "janesmith", "Jane Smith", "Irorun", UserStatus::Pending, "2024-02-20T14:45:00.000Z", "08098765432"),
        ("3", "bobwilson", "Bob Wilson", "Lendsqr", UserStatus::Blacklisted, "2024-01-15T08:00:00.000Z", "07011112222"),
    ];
    rows.into_iter()
        .map(|(id, username, full_name, organization, status, date_joined, phone)| {
            let mut record = sample_user(id, organization, status);
            record.username = username.to_owned();
            record.email = format!("{username}@{}.com", organization.to_lowercase());
            record.phone_number = phone.to_owned();
            record.date_joined = date_joined.to_owned();
            record.profile.full_name = full_name.to_owned();
            record
        })
        .collect()
}

/// `count` records named `User 1` to `User <count>`, all at one organisation.
pub fn numbered_users(count: usize, organization: &str) -> Vec<UserRecord> {
    (1..=count)
        .map(|index| {
            let mut record = sample_user(&format!("user-{index:04}"), organization, UserStatus::Active);
            record.profile.full_name = format!("User {index}");
            record
        })
        .collect()
}
