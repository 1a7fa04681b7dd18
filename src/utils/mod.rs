pub mod auth;
pub mod error;
pub mod extract;
pub mod password;
pub mod session;
