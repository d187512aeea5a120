use async_trait::async_trait;

use crate::{
    types::{
        AsanaAttachment, AsanaOAuthToken, AsanaProject, AsanaTask, AsanaUser, AsanaWebhook,
        AsanaWebhookFilter,
    },
    Result,
};

/// Asana API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get the authenticated user.
    async fn users_me(&self) -> Result<AsanaUser>;
    /// List projects from a workspace, with owners.
    async fn projects_list(&self, workspace_id: &str) -> Result<Vec<AsanaProject>>;
    /// Get a project from its GID.
    async fn projects_get(&self, project_id: &str) -> Result<AsanaProject>;
    /// List tasks from a project, with assignees.
    async fn project_tasks_list(&self, project_id: &str) -> Result<Vec<AsanaTask>>;
    /// Get a task from its GID.
    async fn tasks_get(&self, task_id: &str) -> Result<AsanaTask>;
    /// List attachments of a task.
    async fn task_attachments_list(&self, task_id: &str) -> Result<Vec<AsanaAttachment>>;
    /// List attachment URLs of a task, skipping attachments without URL.
    async fn task_attachment_urls(&self, task_id: &str) -> Result<Vec<String>> {
        Ok(self
            .task_attachments_list(task_id)
            .await?
            .iter()
            .filter_map(|a| a.url().map(ToOwned::to_owned))
            .collect())
    }
    /// Post a comment on a task.
    async fn task_stories_post(&self, task_id: &str, text: &str) -> Result<String>;
    /// List webhooks from a workspace, optionally restricted to a resource.
    async fn webhooks_list(
        &self,
        workspace_id: &str,
        resource_id: Option<String>,
    ) -> Result<Vec<AsanaWebhook>>;
    /// Register a webhook.
    async fn webhooks_create(
        &self,
        resource_id: &str,
        target: &str,
        filters: &[AsanaWebhookFilter],
    ) -> Result<AsanaWebhook>;
    /// Delete a webhook.
    async fn webhooks_delete(&self, webhook_id: &str) -> Result<()>;
    /// Exchange an OAuth authorization code, and use the new access token.
    async fn oauth_token_exchange(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AsanaOAuthToken>;
}

