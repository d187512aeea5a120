//! Asana adapter

use std::sync::Arc;

use asanabot_asana_interface::{
    types::{
        AsanaAttachment, AsanaData, AsanaErrorBody, AsanaOAuthToken, AsanaProject, AsanaTask,
        AsanaUser, AsanaWebhook, AsanaWebhookCreation, AsanaWebhookFilter,
    },
    ApiService, Result,
};
use asanabot_config::Config;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    auth::{
        build_asana_url, build_oauth_url, get_anonymous_client_builder,
        get_authenticated_client_builder, TokenStore,
    },
    errors::AsanaError,
};

const PROJECT_OPT_FIELDS: &str = "name,owner.name,due_on,current_status.text,current_status.title";
const TASK_LIST_OPT_FIELDS: &str = "name,assignee.name,due_on,completed";

/// Asana API adapter implementation.
#[derive(Clone)]
pub struct AsanaApiService {
    config: Config,
    tokens: Arc<TokenStore>,
}

impl AsanaApiService {
    /// Creates new Asana API adapter.
    pub fn new(config: Config) -> Self {
        let tokens = Arc::new(TokenStore::new(config.api.asana.token.clone()));
        Self { config, tokens }
    }

    /// Token store used by this adapter.
    pub fn tokens(&self) -> Arc<TokenStore> {
        self.tokens.clone()
    }

    async fn get_client(&self) -> Result<Client, AsanaError> {
        get_authenticated_client_builder(&self.config, &self.tokens)
            .await?
            .build()
            .map_err(AsanaError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_asana_url(&self.config, path)
    }

    async fn send_data<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, AsanaError> {
        let response = Self::check_status(request.send().await?).await?;
        Ok(response.json::<AsanaData<T>>().await?.data)
    }

    async fn check_status(response: Response) -> Result<Response, AsanaError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let mut message = AsanaErrorBody::message_from_body(&body);
        if message.is_empty() {
            message = status.canonical_reason().unwrap_or("Unknown error").into();
        }

        Err(AsanaError::HttpStatusError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ApiService for AsanaApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn users_me(&self) -> Result<AsanaUser> {
        let request = self
            .get_client()
            .await?
            .get(self.build_url("/users/me".into()));

        Ok(Self::send_data(request).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn projects_list(&self, workspace_id: &str) -> Result<Vec<AsanaProject>> {
        let request = self
            .get_client()
            .await?
            .get(self.build_url("/projects".into()))
            .query(&[
                ("workspace", workspace_id),
                ("opt_fields", PROJECT_OPT_FIELDS),
            ]);

        Ok(Self::send_data(request).await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn projects_get(&self, project_id: &str) -> Result<AsanaProject> {
        let request = self
            .get_client()
            .await?
            .get(self.build_url(format!("/projects/{project_id}")))
            .query(&[("opt_fields", PROJECT_OPT_FIELDS)]);

        Ok(Self::send_data(request).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn project_tasks_list(&self, project_id: &str) -> Result<Vec<AsanaTask>> {
        let request = self
            .get_client()
            .await?
            .get(self.build_url(format!("/projects/{project_id}/tasks")))
            .query(&[("opt_fields", TASK_LIST_OPT_FIELDS)]);

        Ok(Self::send_data(request).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn tasks_get(&self, task_id: &str) -> Result<AsanaTask> {
        let request = self
            .get_client()
            .await?
            .get(self.build_url(format!("/tasks/{task_id}")));

        Ok(Self::send_data(request).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn task_attachments_list(&self, task_id: &str) -> Result<Vec<AsanaAttachment>> {
        let request = self
            .get_client()
            .await?
            .get(self.build_url(format!("/tasks/{task_id}/attachments")));

        Ok(Self::send_data(request).await?)
    }

    #[tracing::instrument(skip(self, text), ret)]
    async fn task_stories_post(&self, task_id: &str, text: &str) -> Result<String> {
        #[derive(Serialize)]
        struct StoryCreation<'a> {
            text: &'a str,
            #[serde(rename = "type")]
            kind: &'a str,
        }

        #[derive(Deserialize)]
        struct StoryCreated {
            gid: String,
        }

        let request = self
            .get_client()
            .await?
            .post(self.build_url(format!("/tasks/{task_id}/stories")))
            .json(&AsanaData::new(StoryCreation {
                text,
                kind: "comment",
            }));

        let story: StoryCreated = Self::send_data(request).await?;
        Ok(story.gid)
    }

    #[tracing::instrument(skip(self))]
    async fn webhooks_list(
        &self,
        workspace_id: &str,
        resource_id: Option<String>,
    ) -> Result<Vec<AsanaWebhook>> {
        let mut query = vec![("workspace", workspace_id.to_string())];
        if let Some(resource_id) = resource_id {
            query.push(("resource", resource_id));
        }

        let request = self
            .get_client()
            .await?
            .get(self.build_url("/webhooks".into()))
            .query(&query);

        Ok(Self::send_data(request).await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn webhooks_create(
        &self,
        resource_id: &str,
        target: &str,
        filters: &[AsanaWebhookFilter],
    ) -> Result<AsanaWebhook> {
        let request = self
            .get_client()
            .await?
            .post(self.build_url("/webhooks".into()))
            .json(&AsanaData::new(AsanaWebhookCreation {
                resource: resource_id.into(),
                target: target.into(),
                filters: filters.to_vec(),
            }));

        Ok(Self::send_data(request).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn webhooks_delete(&self, webhook_id: &str) -> Result<()> {
        let response = self
            .get_client()
            .await?
            .delete(self.build_url(format!("/webhooks/{webhook_id}")))
            .send()
            .await
            .map_err(AsanaError::from)?;

        Self::check_status(response).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, code))]
    async fn oauth_token_exchange(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AsanaOAuthToken> {
        let asana = &self.config.api.asana;
        let form = [
            ("grant_type", "authorization_code"),
            ("client_id", asana.client_id.as_str()),
            ("client_secret", asana.client_secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("code", code),
        ];

        let response = get_anonymous_client_builder(&self.config)
            .build()
            .map_err(AsanaError::from)?
            .post(build_oauth_url(&self.config, "/oauth_token"))
            .form(&form)
            .send()
            .await
            .map_err(AsanaError::from)?;

        let token = Self::check_status(response)
            .await?
            .json::<AsanaOAuthToken>()
            .await
            .map_err(AsanaError::from)?;

        self.tokens.set(token.access_token.clone()).await;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use asanabot_asana_interface::{types::ProjectDetails, ApiError};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, body_string_contains, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    async fn arrange(server: &MockServer, token: &str) -> AsanaApiService {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.asana.root_url = format!("{}/api/1.0", server.uri());
        config.api.asana.oauth_url = format!("{}/-", server.uri());
        config.api.asana.token = token.into();
        config.api.asana.client_id = "client-id".into();
        config.api.asana.client_secret = "client-secret".into();
        AsanaApiService::new(config)
    }

    #[tokio::test]
    async fn test_projects_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1.0/projects"))
            .and(query_param("workspace", "1100"))
            .and(header("authorization", "Bearer pat-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {
                        "gid": "1201",
                        "name": "Customs intake",
                        "owner": {"gid": "77", "name": "Glassbox", "resource_type": "user"},
                        "due_on": "2024-06-30",
                        "current_status": {"text": "On track"}
                    },
                    {"gid": "1202", "name": "Backlog", "owner": null}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange(&server, "pat-token").await;
        let projects: Vec<ProjectDetails> = service
            .projects_list("1100")
            .await
            .unwrap()
            .into_iter()
            .map(Into::into)
            .collect();

        assert_eq!(
            projects,
            vec![
                ProjectDetails {
                    gid: "1201".into(),
                    name: "Customs intake".into(),
                    owner: Some("Glassbox".into()),
                    due_on: Some("2024-06-30".into()),
                    current_status: Some("On track".into()),
                },
                ProjectDetails {
                    gid: "1202".into(),
                    name: "Backlog".into(),
                    ..Default::default()
                }
            ]
        );
    }

    #[tokio::test]
    async fn test_error_status_is_propagated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1.0/projects/42"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"message": "project: Unknown object: 42"}]
            })))
            .mount(&server)
            .await;

        let service = arrange(&server, "pat-token").await;
        let err = service.projects_get("42").await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::HttpStatus { status: 404, ref message } if message == "project: Unknown object: 42"
        ));
    }

    #[tokio::test]
    async fn test_missing_token_does_not_call_asana() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let service = arrange(&server, "").await;
        assert!(matches!(
            service.users_me().await,
            Err(ApiError::MissingToken)
        ));
    }

    #[tokio::test]
    async fn test_webhooks_create_sends_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/1.0/webhooks"))
            .and(body_json(json!({
                "data": {
                    "resource": "1201",
                    "target": "https://bot.example.com/webhook",
                    "filters": [
                        {"resource_type": "task", "action": "added"},
                        {"resource_type": "task", "action": "changed"},
                        {"resource_type": "task", "action": "deleted"}
                    ]
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {
                    "gid": "9001",
                    "active": true,
                    "target": "https://bot.example.com/webhook",
                    "resource": {"gid": "1201", "resource_type": "project", "name": "Customs intake"}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange(&server, "pat-token").await;
        let webhook = service
            .webhooks_create(
                "1201",
                "https://bot.example.com/webhook",
                &AsanaWebhookFilter::task_lifecycle(),
            )
            .await
            .unwrap();

        assert_eq!(webhook.gid, "9001");
        assert!(webhook.active);
        assert_eq!(webhook.resource.gid, "1201");
    }

    #[tokio::test]
    async fn test_webhooks_list_with_resource() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1.0/webhooks"))
            .and(query_param("workspace", "1100"))
            .and(query_param("resource", "1201"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange(&server, "pat-token").await;
        let webhooks = service
            .webhooks_list("1100", Some("1201".into()))
            .await
            .unwrap();
        assert!(webhooks.is_empty());
    }

    #[tokio::test]
    async fn test_webhooks_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/1.0/webhooks/9001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange(&server, "pat-token").await;
        service.webhooks_delete("9001").await.unwrap();
    }

    #[tokio::test]
    async fn test_oauth_exchange_replaces_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/-/oauth_token"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("code=the-code"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "oauth-token",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "refresh"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/1.0/users/me"))
            .and(header("authorization", "Bearer oauth-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"gid": "1", "name": "asanabot"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange(&server, "").await;
        let token = service
            .oauth_token_exchange("the-code", "http://localhost:8000/auth/callback")
            .await
            .unwrap();

        assert_eq!(token.expires_in, 3600);
        assert_eq!(service.users_me().await.unwrap().name, "asanabot");
    }

    #[tokio::test]
    async fn test_oauth_error_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/-/oauth_token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "The code has expired."
            })))
            .mount(&server)
            .await;

        let service = arrange(&server, "").await;
        let err = service
            .oauth_token_exchange("old-code", "http://localhost:8000/auth/callback")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApiError::HttpStatus { status: 400, ref message } if message == "The code has expired."
        ));
    }

    #[tokio::test]
    async fn test_task_attachment_urls() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1.0/tasks/1209/attachments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"gid": "1", "name": "invoice.pdf", "download_url": "https://files/invoice.pdf", "permanent_url": "https://app/1"},
                    {"gid": "2", "name": "packing.pdf", "download_url": null, "permanent_url": "https://app/2"},
                    {"gid": "3", "name": "link"}
                ]
            })))
            .mount(&server)
            .await;

        let service = arrange(&server, "pat-token").await;
        assert_eq!(
            service.task_attachment_urls("1209").await.unwrap(),
            vec!["https://files/invoice.pdf".to_string(), "https://app/2".into()]
        );
    }
}
