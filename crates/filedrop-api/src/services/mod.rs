//! Application services: the session authenticator, the upload transaction
//! coordinator, and the notification invoker.

pub mod auth;
pub mod notify;
pub mod upload;
