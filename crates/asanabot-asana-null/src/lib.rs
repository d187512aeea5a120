//! Null driver for Asana API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use asanabot_asana_interface::{
    types::{
        AsanaAttachment, AsanaOAuthToken, AsanaProject, AsanaResource, AsanaTask, AsanaUser,
        AsanaWebhook, AsanaWebhookFilter,
    },
    ApiService, Result,
};
use async_trait::async_trait;

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn users_me(&self) -> Result<AsanaUser> {
        Ok(AsanaUser {
            gid: "0".into(),
            name: "null".into(),
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn projects_list(&self, workspace_id: &str) -> Result<Vec<AsanaProject>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn projects_get(&self, project_id: &str) -> Result<AsanaProject> {
        Ok(AsanaProject {
            gid: project_id.into(),
            ..Default::default()
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn project_tasks_list(&self, project_id: &str) -> Result<Vec<AsanaTask>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn tasks_get(&self, task_id: &str) -> Result<AsanaTask> {
        Ok(AsanaTask {
            gid: task_id.into(),
            ..Default::default()
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn task_attachments_list(&self, task_id: &str) -> Result<Vec<AsanaAttachment>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn task_stories_post(&self, task_id: &str, text: &str) -> Result<String> {
        Ok("0".into())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn webhooks_list(
        &self,
        workspace_id: &str,
        resource_id: Option<String>,
    ) -> Result<Vec<AsanaWebhook>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn webhooks_create(
        &self,
        resource_id: &str,
        target: &str,
        filters: &[AsanaWebhookFilter],
    ) -> Result<AsanaWebhook> {
        Ok(AsanaWebhook {
            gid: "0".into(),
            active: true,
            target: target.into(),
            resource: AsanaResource {
                gid: resource_id.into(),
                ..Default::default()
            },
            filters: filters.to_vec(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn webhooks_delete(&self, webhook_id: &str) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self, _code), ret)]
    async fn oauth_token_exchange(
        &self,
        _code: &str,
        redirect_uri: &str,
    ) -> Result<AsanaOAuthToken> {
        Ok(AsanaOAuthToken {
            token_type: "bearer".into(),
            ..Default::default()
        })
    }
}
