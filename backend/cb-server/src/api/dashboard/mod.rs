#[allow(clippy::module_inception)]
pub mod dashboard;
pub mod dashboard_response;
