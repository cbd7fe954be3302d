use crate::Session;

use chrono::{Duration, Utc};
use uuid::Uuid;

#[test]
fn test_session_expiry() {
    let session = Session::new("token".into(), Uuid::new_v4(), Duration::minutes(30));

    assert!(!session.is_expired_at(Utc::now()));
    assert!(session.is_expired_at(session.expires_at));
    assert!(session.is_expired_at(Utc::now() + Duration::hours(1)));
}
