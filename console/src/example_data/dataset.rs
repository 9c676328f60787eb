//! Loading the default dataset from the seed registry.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use example_data::{
    ExampleUserSeed, GenerationError, RegistryError, SeedRegistry, StatusSeed,
    generate_example_users,
};
use thiserror::Error;
use tracing::info;

use crate::domain::{
    AccountSummary, EducationAndEmployment, Guarantor, Profile, Socials, Tier, UserId,
    UserRecord, UserStatus, UserValidationError,
};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while building the default dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing or seed lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// User generation failed.
    #[error("example data generation error: {0}")]
    Generation(#[from] GenerationError),
    /// A generated user does not form a valid record.
    #[error("generated user {id} is invalid: {source}")]
    InvalidRecord {
        /// Seed identifier of the offending user.
        id: String,
        /// Field that failed validation.
        #[source]
        source: UserValidationError,
    },
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
    /// A user count override of zero would leave the console without defaults.
    #[error("example data user count must be at least 1")]
    ZeroUserCount,
}

/// Generate the default dataset described by `settings`.
///
/// The same registry and seed always produce the same records.
pub fn load_default_users(settings: &ExampleDataSettings) -> Result<Vec<UserRecord>, DatasetError> {
    let seed_name = settings.seed_name();
    if seed_name.is_empty() {
        return Err(DatasetError::EmptySeedName);
    }
    if settings.user_count() == Some(0) {
        return Err(DatasetError::ZeroUserCount);
    }

    let registry = load_registry(&settings.registry_path())?;
    let named = registry.find_seed(seed_name)?;
    let seed = match settings.user_count() {
        Some(count) => named.with_user_count(count),
        None => named.clone(),
    };

    let users = generate_example_users(&registry, &seed)?
        .into_iter()
        .map(convert_seed_user)
        .collect::<Result<Vec<_>, _>>()?;
    info!(seed = seed_name, count = users.len(), "default dataset generated");
    Ok(users)
}

const fn convert_status(status: StatusSeed) -> UserStatus {
    match status {
        StatusSeed::Active => UserStatus::Active,
        StatusSeed::Inactive => UserStatus::Inactive,
        StatusSeed::Pending => UserStatus::Pending,
        StatusSeed::Blacklisted => UserStatus::Blacklisted,
    }
}

/// Map one generated user onto the console's record type.
pub fn convert_seed_user(seed: ExampleUserSeed) -> Result<UserRecord, DatasetError> {
    let invalid = |id: &str| {
        let id = id.to_owned();
        move |source: UserValidationError| DatasetError::InvalidRecord { id, source }
    };
    let id = UserId::new(&seed.id).map_err(invalid(&seed.id))?;
    let tier = Tier::try_from(seed.tier).map_err(invalid(&seed.id))?;

    let ExampleUserSeed {
        organization,
        username,
        email,
        phone_number,
        date_joined,
        status,
        profile,
        account_summary,
        education_and_employment,
        socials,
        guarantors,
        ..
    } = seed;

    Ok(UserRecord {
        id,
        organization,
        username,
        email,
        phone_number,
        date_joined,
        status: convert_status(status),
        profile: Profile {
            full_name: profile.full_name,
            avatar_url: profile.avatar_url,
            bvn: profile.bvn,
            gender: profile.gender,
            marital_status: profile.marital_status,
            children: profile.children,
            type_of_residence: profile.type_of_residence,
        },
        tier,
        account_summary: AccountSummary {
            balance: account_summary.balance,
            account_number: account_summary.account_number,
            bank_name: account_summary.bank_name,
        },
        education_and_employment: EducationAndEmployment {
            level_of_education: education_and_employment.level_of_education,
            employment_status: education_and_employment.employment_status,
            sector_of_employment: education_and_employment.sector_of_employment,
            duration_of_employment: education_and_employment.duration_of_employment,
            office_email: education_and_employment.office_email,
            monthly_income: education_and_employment.monthly_income,
            loan_repayment: education_and_employment.loan_repayment,
        },
        socials: Socials {
            twitter: socials.twitter,
            facebook: socials.facebook,
            instagram: socials.instagram,
        },
        guarantors: guarantors
            .into_iter()
            .map(|guarantor| Guarantor {
                full_name: guarantor.full_name,
                phone_number: guarantor.phone_number,
                email: guarantor.email,
                relationship: guarantor.relationship,
            })
            .collect(),
    })
}

fn load_registry(path: &Path) -> Result<SeedRegistry, DatasetError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    let file_name = path.file_name().ok_or_else(|| DatasetError::RegistryRead {
        path: path.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ),
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|source| {
        DatasetError::RegistryRead {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(|source| DatasetError::RegistryRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(SeedRegistry::from_json(&contents)?)
}
