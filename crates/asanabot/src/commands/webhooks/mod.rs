//! Webhook commands.

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;

mod list;
mod register;
mod remove;

use self::{
    list::WebhookListCommand, register::WebhookRegisterCommand, remove::WebhookRemoveCommand,
};

/// Manage Asana webhooks
#[derive(Parser)]
pub(crate) struct WebhookCommand {
    #[clap(subcommand)]
    inner: WebhookSubCommand,
}

#[async_trait]
impl Command for WebhookCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum WebhookSubCommand {
    List(WebhookListCommand),
    Register(WebhookRegisterCommand),
    Remove(WebhookRemoveCommand),
}

#[async_trait]
impl Command for WebhookSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::List(sub) => sub.execute(ctx).await,
            Self::Register(sub) => sub.execute(ctx).await,
            Self::Remove(sub) => sub.execute(ctx).await,
        }
    }
}
