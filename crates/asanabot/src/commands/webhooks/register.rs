use anyhow::anyhow;
use asanabot_asana_interface::types::AsanaWebhookFilter;
use async_trait::async_trait;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Register the task webhook on the configured project
#[derive(Parser)]
pub(crate) struct WebhookRegisterCommand {
    /// Webhook target URL, defaults to `<BOT_SERVER_PUBLIC_URL>/webhook`
    #[clap(long)]
    target: Option<String>,
}

impl WebhookRegisterCommand {
    fn target(&self, ctx: &CommandContext) -> Result<String> {
        if let Some(target) = &self.target {
            return Ok(target.clone());
        }

        let public_url = ctx.config.server.public_url.trim_end_matches('/');
        if public_url.is_empty() {
            Err(anyhow!(
                "Missing webhook target: use --target or set BOT_SERVER_PUBLIC_URL"
            ))
        } else {
            Ok(format!("{public_url}/webhook"))
        }
    }
}

#[async_trait]
impl Command for WebhookRegisterCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let project_id = &ctx.config.api.asana.project_id;
        if project_id.is_empty() {
            return Err(anyhow!("Missing env. var.: BOT_API_ASANA_PROJECT_ID"));
        }

        let target = self.target(&ctx)?;
        let project = ctx.api_service.projects_get(project_id).await?;
        let webhook = ctx
            .api_service
            .webhooks_create(project_id, &target, &AsanaWebhookFilter::task_lifecycle())
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Webhook {} registered on project '{}' ({}) -> {}",
            webhook.gid,
            project.name,
            project.gid,
            webhook.target
        )?;

        Ok(())
    }
}
