use anyhow::anyhow;
use async_trait::async_trait;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List webhooks of the configured workspace
#[derive(Parser)]
pub(crate) struct WebhookListCommand {
    /// Only list webhooks watching this resource
    #[clap(long)]
    resource: Option<String>,
}

#[async_trait]
impl Command for WebhookListCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let workspace_id = &ctx.config.api.asana.workspace_id;
        if workspace_id.is_empty() {
            return Err(anyhow!("Missing env. var.: BOT_API_ASANA_WORKSPACE_ID"));
        }

        let webhooks = ctx
            .api_service
            .webhooks_list(workspace_id, self.resource)
            .await?;
        if webhooks.is_empty() {
            writeln!(ctx.writer.write().await, "No webhook registered.")?;
        } else {
            for webhook in webhooks {
                writeln!(
                    ctx.writer.write().await,
                    "- {} ({}) {} [{}] -> {}",
                    webhook.gid,
                    if webhook.active { "active" } else { "inactive" },
                    webhook.resource.gid,
                    webhook.resource.resource_type_or_na(),
                    webhook.target
                )?;
            }
        }

        Ok(())
    }
}
