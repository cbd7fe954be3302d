use serde::Serialize;

/// Describes a form the client should render: where to submit it and which
/// fields it takes
#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub form: &'static str,
    pub action: &'static str,
    pub fields: &'static [&'static str],
}

impl FormResponse {
    pub fn register() -> Self {
        Self {
            form: "register",
            action: "/register",
            fields: &["name", "email", "password"],
        }
    }

    pub fn login() -> Self {
        Self {
            form: "login",
            action: "/login",
            fields: &["email", "password"],
        }
    }
}
