mod event;
mod event_action;
mod event_change;
mod webhook_payload;

pub use event::AsanaEvent;
pub use event_action::AsanaEventAction;
pub use event_change::AsanaEventChange;
pub use webhook_payload::AsanaWebhookPayload;
