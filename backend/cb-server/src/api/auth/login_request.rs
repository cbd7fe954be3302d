use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    /// May be empty; the authenticator reports that as a failed login
    #[serde(default)]
    pub password: String,
}
