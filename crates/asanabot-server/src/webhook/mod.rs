//! Webhook handlers.

mod intake;

use std::collections::BTreeSet;

use actix_web::{
    http::header::HeaderMap,
    web::{self, Bytes},
    HttpRequest, HttpResponse, Result,
};
use asanabot_asana_interface::types::{AsanaEvent, AsanaWebhookPayload};
use tracing::{error, info, warn};

use self::intake::{assignment_intake, IntakeOutcome};
use crate::{
    constants::HOOK_SECRET_HEADER, metrics::WEBHOOK_EVENTS, server::AppContext, ServerError,
};

/// Handshake secret of a request, if it is a handshake.
///
/// An empty header is not a handshake.
pub(crate) fn extract_hook_secret(headers: &HeaderMap) -> Option<String> {
    headers
        .get(HOOK_SECRET_HEADER)
        .and_then(|x| x.to_str().ok())
        .filter(|x| !x.is_empty())
        .map(ToOwned::to_owned)
}

fn parse_payload(body: &[u8]) -> Option<AsanaWebhookPayload> {
    serde_json::from_slice::<AsanaWebhookPayload>(body)
        .ok()
        .filter(|p| !p.events.is_empty())
}

fn spawn_assignment_intake(ctx: web::Data<AppContext>, task_id: String) {
    actix_web::rt::spawn(async move {
        match assignment_intake(&ctx.config, ctx.api_service.as_ref(), &task_id).await {
            Ok(IntakeOutcome::Skipped { assignee }) => {
                info!(
                    task_id = %task_id,
                    assignee = ?assignee,
                    message = "Task not assigned to trigger assignee, skipping"
                );
            }
            Ok(IntakeOutcome::Processed {
                attachments,
                story_id,
            }) => {
                info!(
                    task_id = %task_id,
                    attachments = ?attachments,
                    story_id = ?story_id,
                    message = "Assignment intake done"
                );
            }
            Err(e) => {
                error!(task_id = %task_id, error = %e, message = "Assignment intake failed");
            }
        }
    });
}

fn log_event(event: &AsanaEvent) {
    WEBHOOK_EVENTS.inc();
    info!(
        action = ?event.action,
        resource_gid = %event.resource_gid(),
        resource_type = %event.resource_type(),
        message = "Asana event"
    );
}

/// Tasks whose assignee changed, once each, in delivery order.
fn assigned_task_ids(events: &[AsanaEvent]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    events
        .iter()
        .filter(|e| e.is_task_assignee_change())
        .map(|e| e.resource_gid().to_string())
        .filter(|gid| seen.insert(gid.clone()))
        .collect()
}

#[tracing::instrument(skip_all)]
pub(crate) async fn event_handler(
    req: HttpRequest,
    body: Bytes,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse> {
    if let Some(secret) = extract_hook_secret(req.headers()) {
        if !ctx.hook_secrets.capture(&secret).await {
            warn!("Asana handshake rejected, another secret is already in use");
            return Err(ServerError::HandshakeRejected.into());
        }

        info!("Asana handshake received");
        return Ok(HttpResponse::Ok()
            .insert_header((HOOK_SECRET_HEADER, secret))
            .body("Handshake successful"));
    }

    let payload = match parse_payload(&body) {
        Some(payload) => payload,
        None => {
            warn!("Empty or invalid payload received");
            return Ok(HttpResponse::Ok().body("Acknowledged empty or invalid payload."));
        }
    };

    payload.events.iter().for_each(log_event);
    for task_id in assigned_task_ids(&payload.events) {
        spawn_assignment_intake(ctx.clone(), task_id);
    }

    Ok(HttpResponse::Ok().body("Webhook event processed successfully"))
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(event_handler)));
}
