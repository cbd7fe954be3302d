//! Periodic housekeeping that runs beside the HTTP server

use crate::ShutdownCoordinator;

use cb_auth::{LoginRateLimiter, SessionBinder};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Purge expired sessions and forget idle rate-limit keys every `interval`
/// until shutdown is signalled. A zero interval disables housekeeping and the
/// returned task finishes immediately.
pub fn spawn(
    sessions: Arc<SessionBinder>,
    login_limiter: LoginRateLimiter,
    interval: Duration,
    shutdown: &ShutdownCoordinator,
) -> JoinHandle<()> {
    if interval.is_zero() {
        info!("Maintenance task disabled (interval 0)");
        return tokio::spawn(async {});
    }

    let mut shutdown_guard = shutdown.subscribe_guard();

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Maintenance task started: every {}s", interval.as_secs());

        loop {
            tokio::select! {
                _ = shutdown_guard.wait() => {
                    info!("Maintenance task stopping");
                    break;
                }
                _ = ticker.tick() => {
                    run_once(&sessions, &login_limiter).await;
                }
            }
        }
    })
}

/// One housekeeping pass
pub async fn run_once(sessions: &SessionBinder, login_limiter: &LoginRateLimiter) {
    match sessions.purge_expired().await {
        Ok(0) => {}
        Ok(purged) => info!("Purged {} expired sessions", purged),
        Err(e) => warn!("Session purge failed: {}", e),
    }

    login_limiter.retain_recent();
    debug!(
        "Login rate limiter tracking {} keys",
        login_limiter.tracked_keys()
    );
}
