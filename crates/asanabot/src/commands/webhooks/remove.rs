use async_trait::async_trait;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Remove a webhook
#[derive(Parser)]
pub(crate) struct WebhookRemoveCommand {
    /// Webhook GID
    webhook_id: String,
}

#[async_trait]
impl Command for WebhookRemoveCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        ctx.api_service.webhooks_delete(&self.webhook_id).await?;
        writeln!(
            ctx.writer.write().await,
            "Webhook {} deleted.",
            self.webhook_id
        )?;

        Ok(())
    }
}
