//! API crate.
//!
//! Contains functions to communicate with the Asana REST API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod asana;
mod auth;
mod errors;

pub use asana::AsanaApiService;
pub use auth::TokenStore;
