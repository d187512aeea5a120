use asanabot_asana_interface::types::TaskDetails;
use async_trait::async_trait;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List tasks of a project, with assignees
#[derive(Parser)]
pub(crate) struct ProjectTasksCommand {
    /// Project GID
    project_id: String,
}

#[async_trait]
impl Command for ProjectTasksCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let tasks = ctx.api_service.project_tasks_list(&self.project_id).await?;
        if tasks.is_empty() {
            writeln!(ctx.writer.write().await, "No task found.")?;
        } else {
            for task in tasks.into_iter().map(TaskDetails::from) {
                writeln!(
                    ctx.writer.write().await,
                    "- [{}] {}: {} (assignee: {}, due: {})",
                    if task.completed { "x" } else { " " },
                    task.gid,
                    task.name,
                    task.assignee.as_deref().unwrap_or("none"),
                    task.due_on.as_deref().unwrap_or("none")
                )?;
            }
        }

        Ok(())
    }
}
