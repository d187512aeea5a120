mod webhook;
mod webhook_filter;

pub use webhook::{AsanaWebhook, AsanaWebhookCreation};
pub use webhook_filter::AsanaWebhookFilter;
