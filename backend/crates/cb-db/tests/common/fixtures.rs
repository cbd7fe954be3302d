use cb_core::User;
use cb_db::UserRepository;

use sqlx::SqlitePool;

/// Builds a user with a placeholder digest. Repository tests never verify it.
pub fn create_test_user(name: &str, email: &str) -> User {
    User::new(
        name.to_string(),
        email.to_string(),
        "$2b$04$placeholderplaceholderplaceholderplaceholder1234".to_string(),
    )
}

/// Builds and stores a user
pub async fn insert_test_user(pool: &SqlitePool, name: &str, email: &str) -> User {
    let user = create_test_user(name, email);
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}
