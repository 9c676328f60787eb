//! Deterministic user generation from seed definitions.
//!
//! The same seed value always produces identical output: every random
//! choice, including the identifier suffix, is drawn from a `ChaCha8Rng`
//! seeded from the definition.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedRegistry};
use crate::seed::{
    AccountSummarySeed, EducationAndEmploymentSeed, ExampleUserSeed, GuarantorSeed, ProfileSeed,
    SocialsSeed, StatusSeed,
};
use crate::validation::{is_valid_username, sanitize_name_part};

/// Maximum number of attempts to generate a valid username.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Characters of the lowercased username used as the email handle.
const EMAIL_HANDLE_LEN: usize = 12;

/// Every seventh user gets an email without the numeric suffix.
const PLAIN_EMAIL_INTERVAL: usize = 7;

const GENDERS: [&str; 2] = ["Male", "Female"];
const MARITAL_STATUSES: [&str; 3] = ["Single", "Married", "Divorced"];
const RESIDENCE_TYPES: [&str; 4] = [
    "Parent's Apartment",
    "Rented Apartment",
    "Owned Apartment",
    "Company Provided",
];
const EDUCATION_LEVELS: [&str; 4] = ["B.Sc", "M.Sc", "HND", "OND"];
const EMPLOYMENT_STATUSES: [&str; 3] = ["Employed", "Unemployed", "Self-employed"];
const SECTORS: [&str; 6] = [
    "FinTech",
    "Retail",
    "Health",
    "Education",
    "Construction",
    "Energy",
];
const BANKS: [&str; 5] = [
    "Providus Bank",
    "GTBank",
    "Access Bank",
    "Zenith Bank",
    "UBA",
];
const RELATIONSHIPS: [&str; 4] = ["Sister", "Brother", "Parent", "Friend"];

/// Generates example users from a seed definition.
///
/// Each user receives:
///
/// - An identifier `user-NNNN-xxxxxxxx` (one-based index, eight hex digits)
/// - An organization drawn from the registry and one of the four statuses
/// - A username built from a generated first and last name
/// - An email `<handle>[<index>]@<organization>.com` and an 11-digit phone
/// - A join timestamp between 2020 and 2022
/// - The profile, account, employment, socials and guarantor payload
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - Username generation fails after maximum retries
/// - The registry has no organizations
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_users};
///
/// let json = r#"{
///     "version": 1,
///     "organizations": ["Lendsqr"],
///     "seeds": [{"name": "test", "seed": 42, "userCount": 3}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let users = generate_example_users(&registry, seed_def).expect("generated");
///
/// assert_eq!(users.len(), 3);
/// assert!(users.iter().all(|user| user.organization == "Lendsqr"));
/// let again = generate_example_users(&registry, seed_def).expect("generated");
/// assert_eq!(users, again);
/// ```
pub fn generate_example_users(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<Vec<ExampleUserSeed>, GenerationError> {
    if registry.organizations().is_empty() {
        return Err(GenerationError::NoOrganizations);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut users = Vec::with_capacity(seed_def.user_count());

    for index in 0..seed_def.user_count() {
        let user = generate_single_user(&mut rng, registry.organizations(), index)?;
        users.push(user);
    }

    Ok(users)
}

/// Generated first and last name with their concatenation.
struct Name {
    first: String,
    last: String,
}

impl Name {
    fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    fn username(&self) -> String {
        format!("{}{}", self.first, self.last)
    }
}

fn generate_single_user(
    rng: &mut ChaCha8Rng,
    organizations: &[String],
    index: usize,
) -> Result<ExampleUserSeed, GenerationError> {
    let name = generate_name(rng)?;
    let organization = organizations
        .choose(rng)
        .cloned()
        .ok_or(GenerationError::NoOrganizations)?;
    let status = StatusSeed::ALL.choose(rng).copied().unwrap_or_default();
    let domain = format!("{}.com", sanitize_name_part(&organization).to_lowercase());

    let username = name.username();
    let handle: String = username.to_lowercase().chars().take(EMAIL_HANDLE_LEN).collect();
    let email = if index.is_multiple_of(PLAIN_EMAIL_INTERVAL) {
        format!("{handle}@{domain}")
    } else {
        format!("{handle}{index}@{domain}")
    };

    let id_token = Uuid::from_u128(rng.random()).simple().to_string();
    let id_suffix: String = id_token.chars().take(8).collect();

    let profile = ProfileSeed {
        full_name: name.full(),
        avatar_url: None,
        bvn: digits(rng, 11),
        gender: pick(rng, &GENDERS),
        marital_status: pick(rng, &MARITAL_STATUSES),
        children: if rng.random_ratio(1, 3) {
            "None".to_owned()
        } else {
            rng.random_range(1_u8..=4).to_string()
        },
        type_of_residence: pick(rng, &RESIDENCE_TYPES),
    };

    let account_summary = AccountSummarySeed {
        balance: stepped_amount(rng, 5_000, 5_000_000, 2_500),
        account_number: digits(rng, 10),
        bank_name: pick(rng, &BANKS),
    };

    let education_and_employment = generate_employment(rng, &name, &domain);

    let socials = SocialsSeed {
        twitter: format!("@{handle}"),
        facebook: name.full(),
        instagram: format!("@{handle}"),
    };

    let relationship = pick(rng, &RELATIONSHIPS);
    let guarantors = (0..2)
        .map(|_| generate_guarantor(rng, &relationship))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExampleUserSeed {
        id: format!("user-{:04}-{id_suffix}", index.saturating_add(1)),
        organization,
        username,
        email,
        phone_number: phone_number(rng),
        date_joined: joined_timestamp(rng),
        status,
        profile,
        tier: rng.random_range(1_u8..=3),
        account_summary,
        education_and_employment,
        socials,
        guarantors,
    })
}

fn generate_employment(
    rng: &mut ChaCha8Rng,
    name: &Name,
    domain: &str,
) -> EducationAndEmploymentSeed {
    let years = rng.random_range(1_u8..=9);
    let duration = if years == 1 {
        "1 year".to_owned()
    } else {
        format!("{years} years")
    };
    let min_income = stepped_amount(rng, 20_000, 800_000, 5_000);
    let max_income = min_income.saturating_add(stepped_amount(rng, 50_000, 600_000, 5_000));
    let loan_repayment = min_income
        .checked_div(5_000)
        .unwrap_or_default()
        .saturating_mul(1_000)
        .max(5_000);

    EducationAndEmploymentSeed {
        level_of_education: pick(rng, &EDUCATION_LEVELS),
        employment_status: pick(rng, &EMPLOYMENT_STATUSES),
        sector_of_employment: pick(rng, &SECTORS),
        duration_of_employment: duration,
        office_email: format!(
            "{}.{}@{domain}",
            name.first.to_lowercase(),
            name.last.to_lowercase()
        ),
        monthly_income: [min_income, max_income],
        loan_repayment,
    }
}

fn generate_guarantor(
    rng: &mut ChaCha8Rng,
    relationship: &str,
) -> Result<GuarantorSeed, GenerationError> {
    let name = generate_name(rng)?;
    Ok(GuarantorSeed {
        full_name: name.full(),
        phone_number: phone_number(rng),
        email: format!("{}@gmail.com", name.first.to_lowercase()),
        relationship: relationship.to_owned(),
    })
}

/// Generates a name whose concatenation is a valid username.
///
/// Name parts are stripped of characters other than ASCII letters and
/// digits. Candidates that end up too short or too long are retried.
fn generate_name(rng: &mut ChaCha8Rng) -> Result<Name, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first_raw: String = FirstName(EN).fake_with_rng(rng);
        let last_raw: String = LastName(EN).fake_with_rng(rng);
        let name = Name {
            first: sanitize_name_part(&first_raw),
            last: sanitize_name_part(&last_raw),
        };

        if !name.first.is_empty()
            && !name.last.is_empty()
            && is_valid_username(&name.username())
        {
            return Ok(name);
        }
    }

    Err(GenerationError::UsernameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

fn pick(rng: &mut ChaCha8Rng, options: &[&str]) -> String {
    options
        .choose(rng)
        .map(|option| (*option).to_owned())
        .unwrap_or_default()
}

fn digits(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len)
        .filter_map(|_| char::from_digit(rng.random_range(0..10), 10))
        .collect()
}

fn phone_number(rng: &mut ChaCha8Rng) -> String {
    format!("0{}", digits(rng, 10))
}

/// Amount in `[min, max)` on a grid of `step`.
fn stepped_amount(rng: &mut ChaCha8Rng, min: u64, max: u64, step: u64) -> u64 {
    let steps = max
        .saturating_sub(min)
        .checked_div(step)
        .unwrap_or_default()
        .max(1);
    min.saturating_add(rng.random_range(0..steps).saturating_mul(step))
}

fn joined_timestamp(rng: &mut ChaCha8Rng) -> String {
    let year = rng.random_range(2020_u16..=2022);
    let month = rng.random_range(1_u8..=12);
    let day = rng.random_range(1_u8..=28);
    let hour = rng.random_range(0_u8..24);
    let minute = rng.random_range(0_u8..60);
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:00.000Z")
}
