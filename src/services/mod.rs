//! Poll, vote, result and account logic. Functions here take a
//! [`Datastore`](crate::db::Datastore) and return domain errors only; the HTTP
//! mapping lives in `utils::error`.

pub mod poll_service;
pub mod results_service;
pub mod user_service;
pub mod vote_service;
