//! Demo login: one hardcoded operator, remembered in the session marker.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::ports::{LoginService, SessionStore, SessionStoreError};
use super::{AuthenticatedUser, Error, LoginCredentials};

/// Email accepted by the demo login.
pub const DEMO_EMAIL: &str = "test@lendsqr.com";

/// Password accepted by the demo login.
pub const DEMO_PASSWORD: &str = "Test1234!";

/// [`LoginService`] accepting only the demo operator.
pub struct DemoLoginService<S> {
    sessions: Arc<S>,
}

impl<S> DemoLoginService<S> {
    /// Keep the session marker in `sessions`.
    pub fn new(sessions: Arc<S>) -> Self {
        Self { sessions }
    }
}

fn map_session_error(error: SessionStoreError) -> Error {
    match error {
        SessionStoreError::Storage { message } => {
            Error::service_unavailable(format!("session storage unavailable: {message}"))
        }
    }
}

#[async_trait]
impl<S: SessionStore> LoginService for DemoLoginService<S> {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthenticatedUser, Error> {
        if credentials.email() != DEMO_EMAIL || credentials.password() != DEMO_PASSWORD {
            warn!(email = credentials.email(), "login rejected");
            return Err(Error::unauthorized("invalid email or password"));
        }
        let user = AuthenticatedUser::new(credentials.email());
        self.sessions.mark(&user).await.map_err(map_session_error)?;
        info!(email = user.email(), "operator signed in");
        Ok(user)
    }

    async fn logout(&self) -> Result<(), Error> {
        self.sessions.clear().await.map_err(map_session_error)?;
        info!("operator signed out");
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, Error> {
        self.sessions.current().await.map_err(map_session_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockSessionStore;
    use crate::outbound::storage::{InMemoryKeyValueStorage, KeyValueSessionStore};
    use rstest::rstest;

    fn service() -> DemoLoginService<KeyValueSessionStore> {
        let storage = Arc::new(InMemoryKeyValueStorage::new());
        DemoLoginService::new(Arc::new(KeyValueSessionStore::new(storage)))
    }

    #[rstest]
    #[case("test@lendsqr.com", "Test1234!", true)]
    #[case("  test@lendsqr.com ", "Test1234!", true)]
    #[case("test@lendsqr.com", "test1234!", false)]
    #[case("TEST@lendsqr.com", "Test1234!", false)]
    #[case("other@lendsqr.com", "Test1234!", false)]
    #[tokio::test]
    async fn only_the_demo_operator_signs_in(
        #[case] email: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let service = service();
        let creds = LoginCredentials::try_from_parts(email, password).expect("credentials shape");
        let result = service.login(&creds).await;
        match (should_succeed, result) {
            (true, Ok(user)) => assert_eq!(user.email(), DEMO_EMAIL),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(user)) => panic!("expected failure, got success: {user}"),
        }
        assert_eq!(
            service.is_authenticated().await.expect("marker readable"),
            should_succeed
        );
    }

    #[tokio::test]
    async fn logout_clears_the_marker() {
        let service = service();
        let creds = LoginCredentials::try_from_parts(DEMO_EMAIL, DEMO_PASSWORD).expect("shape");
        service.login(&creds).await.expect("login");
        assert_eq!(
            service.current_user().await.expect("read"),
            Some(AuthenticatedUser::new(DEMO_EMAIL))
        );

        service.logout().await.expect("logout");
        assert!(!service.is_authenticated().await.expect("read"));
    }

    #[tokio::test]
    async fn storage_failures_are_service_unavailable() {
        let mut sessions = MockSessionStore::new();
        sessions
            .expect_mark()
            .return_once(|_| Err(SessionStoreError::storage("quota exceeded")));
        let service = DemoLoginService::new(Arc::new(sessions));
        let creds = LoginCredentials::try_from_parts(DEMO_EMAIL, DEMO_PASSWORD).expect("shape");

        let err = service.login(&creds).await.expect_err("marker write fails");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
