//! Domain types, rules and services for the users console.
//!
//! Everything here is independent of how records are stored, cached or
//! displayed; adapters reach the domain through [`ports`].

pub mod auth;
pub mod error;
pub mod filters;
pub mod login;
pub mod ports;
pub mod records;
pub mod runtime;
pub mod search;
pub mod status;
pub mod user;
pub mod user_status;
pub mod users_page;
pub mod users_query;

mod query_key;

pub use self::auth::{AuthenticatedUser, LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::filters::{UserFilters, apply_filters};
pub use self::login::{DEMO_EMAIL, DEMO_PASSWORD, DemoLoginService};
pub use self::query_key::{QueryKey, QueryKeyFilter, UsersQueryParams};
pub use self::records::RecordSource;
pub use self::runtime::{DEFAULT_LATENCY, DEFAULT_STALE_TIME, QueryRuntime, TokioSleeper};
pub use self::search::{SEARCH_RESULT_LIMIT, SearchTerm, search};
pub use self::status::{StatusAction, StatusTone, available_actions, available_actions_for};
pub use self::user::{
    AccountSummary, EducationAndEmployment, Guarantor, Profile, Socials, Tier, UserId,
    UserRecord, UserStatus, UserValidationError,
};
pub use self::user_status::UserStatusService;
pub use self::users_page::UsersPage;
pub use self::users_query::UsersQueryService;
