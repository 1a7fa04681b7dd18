pub mod login;
pub mod models;
pub mod signup;
