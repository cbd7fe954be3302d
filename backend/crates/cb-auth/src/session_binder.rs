use crate::{Result as AuthErrorResult, SessionToken};

use cb_core::{Session, User};
use cb_db::SessionRepository;

use chrono::{Duration, Utc};
use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Maps session tokens to user ids across requests
pub struct SessionBinder {
    sessions: SessionRepository,
    ttl: Duration,
}

impl SessionBinder {
    pub fn new(pool: SqlitePool, ttl: Duration) -> Self {
        Self {
            sessions: SessionRepository::new(pool),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session for `user` and hand back its token
    pub async fn bind(&self, user: &User) -> AuthErrorResult<SessionToken> {
        let token = SessionToken::generate();
        let session = Session::new(token.as_str().to_string(), user.id, self.ttl);
        self.sessions.create(&session).await?;

        debug!("Bound session for user {}", user.id);
        Ok(token)
    }

    /// The user currently bound to `token`, if the session exists and has not
    /// expired. Expired rows are dropped on the way out.
    pub async fn resolve(&self, token: &SessionToken) -> AuthErrorResult<Option<Uuid>> {
        let Some(session) = self.sessions.find(token.as_str()).await? else {
            return Ok(None);
        };

        if session.is_expired_at(Utc::now()) {
            debug!("Session for user {} expired", session.user_id);
            self.sessions.delete(token.as_str()).await?;
            return Ok(None);
        }

        Ok(Some(session.user_id))
    }

    /// End the session. Unbinding an unknown or already-ended token is not an error.
    pub async fn unbind(&self, token: &SessionToken) -> AuthErrorResult<()> {
        if self.sessions.delete(token.as_str()).await? {
            debug!("Session unbound");
        }
        Ok(())
    }

    /// Delete every expired session, returning how many were removed
    pub async fn purge_expired(&self) -> AuthErrorResult<u64> {
        Ok(self.sessions.delete_expired(Utc::now()).await?)
    }
}
