pub mod authenticated_user;
pub mod json;

pub use authenticated_user::AuthenticatedUser;
pub use json::json_config;
