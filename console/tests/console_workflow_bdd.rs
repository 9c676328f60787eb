//! Behavioural tests for the end-to-end console workflow.
//!
//! Scenarios drive the composed [`ConsoleState`] through its ports: demo
//! sign-in, filtering, paging, debounced search and status changes that
//! invalidate cached queries.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;

use pagination::PageRequest;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;
use users_console::domain::ports::StatusActionRequest;
use users_console::domain::{
    AuthenticatedUser, DEMO_EMAIL, DEMO_PASSWORD, Error, ErrorCode, LoginCredentials,
    QueryRuntime, StatusAction, UserFilters, UserId, UserRecord, UserStatus, UsersPage,
    UsersQueryParams,
};
use users_console::test_support::{ImmediateSleeper, numbered_users, reference_users};
use users_console::{ConsoleSettings, ConsoleState};

/// Wrapper for non-Clone runtime handle.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Default, ScenarioState)]
struct ConsoleWorld {
    runtime: Slot<RuntimeHandle>,
    console: Slot<ConsoleState>,
    login_result: Slot<Result<AuthenticatedUser, Error>>,
    page: Slot<UsersPage>,
    found: Slot<Vec<UserRecord>>,
    status_result: Slot<Result<UserRecord, Error>>,
}

impl ConsoleWorld {
    fn start(&self, users: Vec<UserRecord>) {
        let runtime = Runtime::new().expect("create runtime");
        let settings = ConsoleSettings {
            debounce_ms: Some(10),
            ..ConsoleSettings::default()
        };
        let query_runtime = QueryRuntime {
            sleeper: Arc::new(ImmediateSleeper),
            ..QueryRuntime::default()
        };
        let console = ConsoleState::build_with_runtime(&settings, users, query_runtime)
            .expect("console builds");
        self.runtime.set(RuntimeHandle(Arc::new(runtime)));
        self.console.set(console);
    }

    fn run<F, T>(&self, operation: impl FnOnce(ConsoleState) -> F) -> T
    where
        F: Future<Output = T>,
    {
        let runtime = self.runtime.get().expect("runtime");
        let console = self.console.get().expect("console");
        runtime.0.block_on(operation(console))
    }

    fn list(&self, params: UsersQueryParams) {
        let page = self.run(|console| async move {
            console.users.list_users(&params).await.expect("list loads")
        });
        self.page.set(page);
    }

    fn page(&self) -> UsersPage {
        self.page.get().expect("a page should be loaded")
    }

    fn apply(&self, id: &str, action: StatusAction) {
        let request = StatusActionRequest {
            user_id: UserId::new(id).expect("valid id"),
            action,
            pagination: None,
        };
        let result =
            self.run(|console| async move { console.user_status.apply_action(&request).await });
        self.status_result.set(result);
    }

    fn is_authenticated(&self) -> bool {
        self.run(|console| async move {
            console
                .login
                .is_authenticated()
                .await
                .expect("session readable")
        })
    }
}

#[fixture]
fn world() -> ConsoleWorld {
    ConsoleWorld::default()
}

#[given("a console over the reference users")]
fn a_console_over_the_reference_users(world: &ConsoleWorld) {
    world.start(reference_users());
}

#[given("a console over {count:usize} generated users")]
fn a_console_over_generated_users(world: &ConsoleWorld, count: usize) {
    world.start(numbered_users(count, "Lendsqr"));
}

#[given("the users list has been loaded")]
fn the_users_list_has_been_loaded(world: &ConsoleWorld) {
    world.list(UsersQueryParams::default());
}

#[when("the demo account signs in")]
fn the_demo_account_signs_in(world: &ConsoleWorld) {
    let credentials =
        LoginCredentials::try_from_parts(DEMO_EMAIL, DEMO_PASSWORD).expect("valid credentials");
    let result = world.run(|console| async move { console.login.login(&credentials).await });
    world.login_result.set(result);
}

#[when("the demo account signs in with password {password}")]
fn the_demo_account_signs_in_with_password(world: &ConsoleWorld, password: String) {
    let credentials =
        LoginCredentials::try_from_parts(DEMO_EMAIL, &password).expect("valid credentials");
    let result = world.run(|console| async move { console.login.login(&credentials).await });
    world.login_result.set(result);
}

#[when("the users list is filtered by organization {organization}")]
fn the_users_list_is_filtered_by_organization(world: &ConsoleWorld, organization: String) {
    let filters = UserFilters {
        organization: Some(organization),
        ..UserFilters::default()
    };
    world.list(UsersQueryParams::new(PageRequest::default(), Some(filters)));
}

#[when("page {page:usize} of the users list is requested")]
fn page_of_the_users_list_is_requested(world: &ConsoleWorld, page: usize) {
    let pagination = PageRequest::default().with_page(page);
    world.list(UsersQueryParams::new(pagination, None));
}

#[when("the header search box settles on {typed}")]
fn the_header_search_box_settles_on(world: &ConsoleWorld, typed: String) {
    let found = world.run(|console| async move {
        let (handle, mut input) = console.search_input();
        handle.set("u");
        handle.set(typed);
        let term = input.next_query().await.expect("a term settles");
        console.users.search_users(&term).await.expect("search runs")
    });
    world.found.set(found);
}

#[when("user {id} is blacklisted")]
fn user_is_blacklisted(world: &ConsoleWorld, id: String) {
    world.apply(&id, StatusAction::Blacklist);
}

#[then("the console reports an authenticated session")]
fn the_console_reports_an_authenticated_session(world: &ConsoleWorld) {
    let user = world
        .login_result
        .get()
        .expect("login attempted")
        .expect("login succeeds");
    assert_eq!(user.email(), DEMO_EMAIL);
    assert!(world.is_authenticated());
}

#[then("sign-in fails as unauthorized")]
fn sign_in_fails_as_unauthorized(world: &ConsoleWorld) {
    match world.login_result.get().expect("login attempted") {
        Err(error) => assert_eq!(error.code(), ErrorCode::Unauthorized),
        Ok(user) => panic!("expected rejection, signed in as {user}"),
    }
}

#[then("the console reports no session")]
fn the_console_reports_no_session(world: &ConsoleWorld) {
    assert!(!world.is_authenticated());
}

#[then("the list holds {count:usize} users")]
fn the_list_holds_users(world: &ConsoleWorld, count: usize) {
    assert_eq!(world.page().filtered_count(), count);
}

#[then("every listed user belongs to {organization}")]
fn every_listed_user_belongs_to(world: &ConsoleWorld, organization: String) {
    let page = world.page();
    assert!(
        page.page_users
            .iter()
            .all(|user| user.organization == organization)
    );
}

#[then("the organization options are {first} and {second}")]
fn the_organization_options_are(world: &ConsoleWorld, first: String, second: String) {
    assert_eq!(world.page().organizations, vec![first, second]);
}

#[then("the page shows {count:usize} users")]
fn the_page_shows_users(world: &ConsoleWorld, count: usize) {
    assert_eq!(world.page().page_users.len(), count);
}

#[then("there are {count:usize} pages")]
fn there_are_pages(world: &ConsoleWorld, count: usize) {
    assert_eq!(world.page().total_pages, count);
}

#[then("{count:usize} users are found")]
fn users_are_found(world: &ConsoleWorld, count: usize) {
    let found = world.found.get().expect("search ran");
    assert_eq!(found.len(), count);
}

#[then("user {id} is shown as {status}")]
fn user_is_shown_as(world: &ConsoleWorld, id: String, status: String) {
    let id = UserId::new(id).expect("valid id");
    let expected: UserStatus = status.parse().expect("known status");
    let record = world.run(|console| async move {
        console.users.user(&id).await.expect("record loads")
    });
    assert_eq!(record.status, expected);
}

#[then("the users list shows user {id} as {status}")]
fn the_users_list_shows_user_as(world: &ConsoleWorld, id: String, status: String) {
    world.list(UsersQueryParams::default());
    let expected: UserStatus = status.parse().expect("known status");
    let page = world.page();
    let record = page
        .page_users
        .iter()
        .find(|user| user.id.as_ref() == id)
        .expect("user listed");
    assert_eq!(record.status, expected);
}

#[then("the status change fails as an invalid request")]
fn the_status_change_fails_as_an_invalid_request(world: &ConsoleWorld) {
    match world.status_result.get().expect("status change attempted") {
        Err(error) => assert_eq!(error.code(), ErrorCode::InvalidRequest),
        Ok(record) => panic!("expected rejection, got {:?}", record.status),
    }
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "Demo account signs in"
)]
fn demo_account_signs_in(world: ConsoleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "Wrong password is rejected"
)]
fn wrong_password_is_rejected(world: ConsoleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "Filtering the list by organization"
)]
fn filtering_the_list_by_organization(world: ConsoleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "Paging through a large collection"
)]
fn paging_through_a_large_collection(world: ConsoleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "Debounced header search is case-insensitive and capped"
)]
fn debounced_header_search_is_case_insensitive_and_capped(world: ConsoleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "Blacklisting a user refreshes cached views"
)]
fn blacklisting_a_user_refreshes_cached_views(world: ConsoleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "Actions outside the status rules are rejected"
)]
fn actions_outside_the_status_rules_are_rejected(world: ConsoleWorld) {
    let _ = world;
}
