use actix_http::StatusCode;
use actix_web::{web, HttpResponse, Responder};

use crate::server::AppContext;

pub(crate) async fn root_route() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Asana Webhook API",
    }))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn health_check_route(ctx: web::Data<AppContext>) -> impl Responder {
    let asana_status = ctx.api_service.users_me().await.is_ok();
    let status_code = if asana_status {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    HttpResponse::build(status_code).json(serde_json::json!({
        "status": if asana_status { "healthy" } else { "unhealthy" },
        "asana": asana_status,
        "version": ctx.config.version,
    }))
}
