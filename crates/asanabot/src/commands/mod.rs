//! Commands.

use std::{io::Write, sync::Arc};

use asanabot_asana_interface::ApiService;
use asanabot_config::Config;
use async_trait::async_trait;
use clap::Subcommand;
use tokio::sync::RwLock;

use self::{projects::ProjectCommand, server::ServerCommand, webhooks::WebhookCommand};
use crate::Result;

mod projects;
mod server;
mod webhooks;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Projects(ProjectCommand),
    Webhooks(WebhookCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Projects(sub) => sub.execute(ctx).await,
            Self::Webhooks(sub) => sub.execute(ctx).await,
        }
    }
}
