pub mod current_user;
pub mod guest;
pub mod session_cookie;
