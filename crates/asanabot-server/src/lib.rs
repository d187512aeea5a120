//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod asana;
pub mod constants;
pub mod errors;
mod health;
pub mod hook_secret;
mod metrics;
pub mod middlewares;
mod oauth;
mod projects;
pub mod server;
mod utils;
mod webhook;
mod webhooks;

pub use errors::{Result, ServerError};
