use crate::User;

#[test]
fn test_new_user_has_hash_and_fresh_id() {
    let a = User::new("Alice".into(), "a@x.com".into(), "$2b$04$hash".into());
    let b = User::new("Alice".into(), "a@x.com".into(), "$2b$04$hash".into());

    assert_eq!(a.password_hash.as_deref(), Some("$2b$04$hash"));
    assert_ne!(a.id, b.id);
}

#[test]
fn test_debug_redacts_password_hash() {
    let user = User::new("Alice".into(), "a@x.com".into(), "$2b$04$secret".into());
    let rendered = format!("{:?}", user);

    assert!(rendered.contains("Alice"));
    assert!(!rendered.contains("secret"));
}

#[test]
fn test_serialize_skips_password_hash() {
    let user = User::new("Alice".into(), "a@x.com".into(), "$2b$04$secret".into());
    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["email"], "a@x.com");
    assert!(json.get("password_hash").is_none());
}
