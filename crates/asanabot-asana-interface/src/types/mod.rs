mod common;
mod events;
mod projects;
mod tasks;
mod webhooks;

pub use common::*;
pub use events::*;
pub use projects::*;
pub use tasks::*;
pub use webhooks::*;
