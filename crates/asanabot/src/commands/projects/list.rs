use anyhow::anyhow;
use asanabot_asana_interface::types::ProjectDetails;
use async_trait::async_trait;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List projects of the configured workspace
#[derive(Parser)]
pub(crate) struct ProjectListCommand;

#[async_trait]
impl Command for ProjectListCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let workspace_id = &ctx.config.api.asana.workspace_id;
        if workspace_id.is_empty() {
            return Err(anyhow!("Missing env. var.: BOT_API_ASANA_WORKSPACE_ID"));
        }

        let projects = ctx.api_service.projects_list(workspace_id).await?;
        if projects.is_empty() {
            writeln!(ctx.writer.write().await, "No project found.")?;
        } else {
            for project in projects.into_iter().map(ProjectDetails::from) {
                writeln!(
                    ctx.writer.write().await,
                    "- {}: {} (owner: {})",
                    project.gid,
                    project.name,
                    project.owner.as_deref().unwrap_or("none")
                )?;
            }
        }

        Ok(())
    }
}
