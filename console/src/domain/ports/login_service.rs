//! Driving port for the demo login screen.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Error, LoginCredentials};

/// Domain use-case port for signing in and out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check credentials and record the signed-in operator.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthenticatedUser, Error>;

    /// Forget the signed-in operator.
    async fn logout(&self) -> Result<(), Error>;

    /// The signed-in operator, if any.
    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, Error>;

    /// Whether an operator is signed in.
    async fn is_authenticated(&self) -> Result<bool, Error> {
        Ok(self.current_user().await?.is_some())
    }
}
