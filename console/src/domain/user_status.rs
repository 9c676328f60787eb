//! Status mutations: write the collection, then invalidate what it changed.
//!
//! A mutation awaits the simulated latency, updates one record's status in
//! the loaded collection, persists the whole collection and invalidates the
//! list page the caller was viewing plus the record's detail entry. Writes
//! are serialised so concurrent mutations never lose each other's changes.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::PageRequest;
use serde_json::json;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, warn};

use super::ports::{
    QueryCache, QueryCacheError, RecordStore, StatusActionRequest, UpdateStatusRequest,
    UserStatusCommand,
};
use super::records::RecordSource;
use super::runtime::QueryRuntime;
use super::status::available_actions;
use super::{Error, QueryKeyFilter, StatusAction, UserId, UserRecord, UserStatus};

/// Mutation service implementing the [`UserStatusCommand`] driving port.
pub struct UserStatusService<S, C> {
    source: RecordSource<S>,
    cache: Arc<C>,
    runtime: QueryRuntime,
    write_gate: AsyncMutex<()>,
}

impl<S, C> UserStatusService<S, C> {
    /// Apply changes to `source` and invalidate affected queries in `cache`.
    pub fn new(source: RecordSource<S>, cache: Arc<C>, runtime: QueryRuntime) -> Self {
        Self {
            source,
            cache,
            runtime,
            write_gate: AsyncMutex::new(()),
        }
    }
}

fn action_not_available(record: &UserRecord, action: StatusAction) -> Error {
    Error::invalid_request(format!(
        "cannot {action} a user whose status is {}",
        record.status
    ))
    .with_details(json!({
        "userId": record.id.as_ref(),
        "status": record.status.as_str(),
        "action": action.as_str(),
    }))
}

impl<S, C> UserStatusService<S, C>
where
    S: RecordStore,
    C: QueryCache,
{
    fn map_cache_error(error: QueryCacheError) -> Error {
        match error {
            QueryCacheError::Backend { message } => {
                Error::service_unavailable(format!("query cache unavailable: {message}"))
            }
        }
    }

    async fn invalidate(
        &self,
        user_id: &UserId,
        pagination: Option<PageRequest>,
    ) -> Result<(), Error> {
        let filters = [
            QueryKeyFilter::UsersPage(pagination.unwrap_or_default()),
            QueryKeyFilter::User(user_id.clone()),
        ];
        for filter in filters {
            let marked = self
                .cache
                .invalidate(&filter)
                .await
                .map_err(|error| {
                    warn!(%filter, %error, "query invalidation failed");
                    Self::map_cache_error(error)
                })?;
            debug!(%filter, marked, "invalidated cached queries");
        }
        Ok(())
    }

    /// Load, change one record's status as `decide` says, persist and
    /// invalidate.
    async fn update_with<F>(
        &self,
        user_id: &UserId,
        pagination: Option<PageRequest>,
        decide: F,
    ) -> Result<UserRecord, Error>
    where
        F: FnOnce(&UserRecord) -> Result<UserStatus, Error> + Send,
    {
        self.runtime.sleeper.sleep(self.runtime.latency).await;
        let _guard = self.write_gate.lock().await;

        let mut records = self.source.load().await?;
        let Some(record) = records.iter_mut().find(|record| record.id == *user_id) else {
            warn!(%user_id, "status update for unknown user");
            return Err(Error::not_found(format!("User with id {user_id} not found")));
        };
        let previous = record.status;
        let status = decide(record)?;
        record.status = status;
        let updated = record.clone();

        self.source.save(&records).await?;
        self.invalidate(user_id, pagination).await?;
        info!(%user_id, from = %previous, to = %status, "user status updated");
        Ok(updated)
    }
}

#[async_trait]
impl<S, C> UserStatusCommand for UserStatusService<S, C>
where
    S: RecordStore,
    C: QueryCache,
{
    async fn update_status(&self, request: &UpdateStatusRequest) -> Result<UserRecord, Error> {
        let status = request.status;
        self.update_with(&request.user_id, request.pagination, move |_| Ok(status))
            .await
    }

    async fn apply_action(&self, request: &StatusActionRequest) -> Result<UserRecord, Error> {
        let action = request.action;
        self.update_with(&request.user_id, request.pagination, move |record| {
            if available_actions(record.status).contains(&action) {
                Ok(action.target_status())
            } else {
                Err(action_not_available(record, action))
            }
        })
        .await
    }
}
