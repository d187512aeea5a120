//! Asana Api wrappers.

use asanabot_asana_http::AsanaApiService;
use asanabot_asana_interface::{
    types::{
        AsanaAttachment, AsanaOAuthToken, AsanaProject, AsanaTask, AsanaUser, AsanaWebhook,
        AsanaWebhookFilter,
    },
    ApiService, Result,
};
use asanabot_asana_null::NullApiService;
use asanabot_config::{ApiDriver, Config};
use async_trait::async_trait;

use crate::metrics::ASANA_API_CALLS;

/// Asana Api Service with metrics.
pub struct MetricsApiService {
    inner: Box<dyn ApiService>,
}

impl MetricsApiService {
    /// Creates a new service using the configured driver.
    pub fn new(config: Config) -> Self {
        let inner: Box<dyn ApiService> = match config.api.driver {
            ApiDriver::Asana => Box::new(AsanaApiService::new(config)),
            ApiDriver::Null => Box::new(NullApiService::new()),
        };

        Self::wrap(inner)
    }

    /// Wraps an existing service.
    pub fn wrap(inner: Box<dyn ApiService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ApiService for MetricsApiService {
    async fn users_me(&self) -> Result<AsanaUser> {
        ASANA_API_CALLS.inc();
        self.inner.users_me().await
    }

    async fn projects_list(&self, workspace_id: &str) -> Result<Vec<AsanaProject>> {
        ASANA_API_CALLS.inc();
        self.inner.projects_list(workspace_id).await
    }

    async fn projects_get(&self, project_id: &str) -> Result<AsanaProject> {
        ASANA_API_CALLS.inc();
        self.inner.projects_get(project_id).await
    }

    async fn project_tasks_list(&self, project_id: &str) -> Result<Vec<AsanaTask>> {
        ASANA_API_CALLS.inc();
        self.inner.project_tasks_list(project_id).await
    }

    async fn tasks_get(&self, task_id: &str) -> Result<AsanaTask> {
        ASANA_API_CALLS.inc();
        self.inner.tasks_get(task_id).await
    }

    async fn task_attachments_list(&self, task_id: &str) -> Result<Vec<AsanaAttachment>> {
        ASANA_API_CALLS.inc();
        self.inner.task_attachments_list(task_id).await
    }

    async fn task_stories_post(&self, task_id: &str, text: &str) -> Result<String> {
        ASANA_API_CALLS.inc();
        self.inner.task_stories_post(task_id, text).await
    }

    async fn webhooks_list(
        &self,
        workspace_id: &str,
        resource_id: Option<String>,
    ) -> Result<Vec<AsanaWebhook>> {
        ASANA_API_CALLS.inc();
        self.inner.webhooks_list(workspace_id, resource_id).await
    }

    async fn webhooks_create(
        &self,
        resource_id: &str,
        target: &str,
        filters: &[AsanaWebhookFilter],
    ) -> Result<AsanaWebhook> {
        ASANA_API_CALLS.inc();
        self.inner
            .webhooks_create(resource_id, target, filters)
            .await
    }

    async fn webhooks_delete(&self, webhook_id: &str) -> Result<()> {
        ASANA_API_CALLS.inc();
        self.inner.webhooks_delete(webhook_id).await
    }

    async fn oauth_token_exchange(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AsanaOAuthToken> {
        ASANA_API_CALLS.inc();
        self.inner.oauth_token_exchange(code, redirect_uri).await
    }
}
