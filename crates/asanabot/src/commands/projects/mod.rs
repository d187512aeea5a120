//! Project commands.

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;

mod list;
mod tasks;

use self::{list::ProjectListCommand, tasks::ProjectTasksCommand};

/// Browse Asana projects
#[derive(Parser)]
pub(crate) struct ProjectCommand {
    #[clap(subcommand)]
    inner: ProjectSubCommand,
}

#[async_trait]
impl Command for ProjectCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum ProjectSubCommand {
    List(ProjectListCommand),
    Tasks(ProjectTasksCommand),
}

#[async_trait]
impl Command for ProjectSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::List(sub) => sub.execute(ctx).await,
            Self::Tasks(sub) => sub.execute(ctx).await,
        }
    }
}
