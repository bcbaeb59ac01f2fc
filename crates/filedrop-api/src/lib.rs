//! filedrop web application: session-authenticated file sharing.
//!
//! A logged-in user uploads a file with up to five recipient addresses; the
//! file is stored in object storage, an upload record is written to the
//! metadata table, and the notification function is invoked with a 7-day
//! download link.

pub mod auth;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod pages;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
