//! Asana OAuth routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use asanabot_config::Config;
use serde::Deserialize;
use tracing::info;
use urlencoding::encode;

use crate::{constants::OAUTH_SCOPES, server::AppContext, utils::base_url, ServerError};

#[derive(Debug, Deserialize)]
pub(crate) struct CallbackQuery {
    code: String,
}

fn redirect_uri(config: &Config, req: &HttpRequest) -> String {
    format!("{}/auth/callback", base_url(config, req))
}

fn build_authorize_url(config: &Config, redirect_uri: &str) -> String {
    format!(
        "{}/oauth_authorize?client_id={}&redirect_uri={}&response_type=code&scope={}",
        config.api.asana.oauth_url.trim_end_matches('/'),
        encode(&config.api.asana.client_id),
        encode(redirect_uri),
        encode(OAUTH_SCOPES)
    )
}

#[tracing::instrument(skip_all)]
pub(crate) async fn auth_asana(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse> {
    if ctx.config.api.asana.client_id.is_empty() {
        return Err(ServerError::MissingConfiguration {
            detail: "Missing Asana client ID",
        }
        .into());
    }

    let redirect_uri = redirect_uri(&ctx.config, &req);
    let auth_url = build_authorize_url(&ctx.config, &redirect_uri);
    info!(redirect_uri = %redirect_uri, message = "Generated Asana OAuth URL");

    Ok(HttpResponse::Ok().json(serde_json::json!({ "auth_url": auth_url })))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn auth_callback(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
    query: web::Query<CallbackQuery>,
) -> Result<HttpResponse> {
    let asana = &ctx.config.api.asana;
    if asana.client_id.is_empty() || asana.client_secret.is_empty() {
        return Err(ServerError::MissingConfiguration {
            detail: "Missing Asana OAuth configuration",
        }
        .into());
    }

    let redirect_uri = redirect_uri(&ctx.config, &req);
    let token = ctx
        .api_service
        .oauth_token_exchange(&query.code, &redirect_uri)
        .await
        .map_err(ServerError::from_oauth)?;

    info!(
        token_type = %token.token_type,
        expires_in = token.expires_in,
        message = "Obtained Asana access token"
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": "Successfully authenticated with Asana",
        "token_type": token.token_type,
        "expires_in": token.expires_in,
    })))
}
