//! Webhook administration routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use asanabot_asana_interface::{types::AsanaWebhookFilter, ApiError};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{info, warn};

use crate::{server::AppContext, utils::base_url, ServerError};

#[tracing::instrument(skip_all)]
pub(crate) async fn register_webhook(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse> {
    let project_id = &ctx.config.api.asana.project_id;
    if project_id.is_empty() {
        return Err(ServerError::MissingConfiguration {
            detail: "Missing required Asana configuration",
        }
        .into());
    }

    let target = format!("{}/webhook", base_url(&ctx.config, &req));
    info!(project_id = %project_id, target = %target, message = "Registering webhook");

    match ctx.api_service.projects_get(project_id).await {
        Ok(_) => (),
        Err(ApiError::MissingToken) => return Err(ServerError::MissingToken.into()),
        Err(e) => {
            warn!(project_id = %project_id, error = %e, message = "Project verification failed");
            return Err(ServerError::InvalidProject {
                message: e.to_string(),
            }
            .into());
        }
    }

    // Asana sends the handshake while the creation call is pending.
    let webhook = {
        let _window = ctx.hook_secrets.open_handshake_window();
        ctx.api_service
            .webhooks_create(project_id, &target, &AsanaWebhookFilter::task_lifecycle())
            .await
            .map_err(ServerError::from)?
    };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "webhook_details": webhook,
    })))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn list_webhooks(ctx: web::Data<AppContext>) -> Result<HttpResponse> {
    let workspace_id = &ctx.config.api.asana.workspace_id;
    if workspace_id.is_empty() {
        return Err(ServerError::MissingConfiguration {
            detail: "Missing required Asana configuration",
        }
        .into());
    }

    let webhooks = ctx
        .api_service
        .webhooks_list(workspace_id, None)
        .await
        .map_err(ServerError::from)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "webhooks": webhooks,
    })))
}

#[tracing::instrument(skip(ctx))]
pub(crate) async fn delete_webhook(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let webhook_id = path.into_inner();
    ctx.api_service
        .webhooks_delete(&webhook_id)
        .await
        .map_err(ServerError::from)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": format!("Webhook {webhook_id} deleted successfully"),
    })))
}

pub(crate) async fn test_webhook() -> HttpResponse {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();

    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": "Webhook endpoint is accessible",
        "timestamp": timestamp,
    }))
}
