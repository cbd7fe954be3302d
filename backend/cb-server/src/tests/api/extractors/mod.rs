mod current_user;
mod guest;
mod session_cookie;
