//! Server middlewares.

#![allow(clippy::type_complexity)]

use std::{pin::Pin, rc::Rc};

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web::{BytesMut, Data},
    Error, HttpMessage,
};
use asanabot_config::Config;
use asanabot_crypto::Signature;
use futures::{
    future::{ok, Ready},
    stream::StreamExt,
    Future,
};

use crate::{
    constants::HOOK_SIGNATURE_HEADER, server::AppContext, webhook::extract_hook_secret,
    ServerError,
};

/// Signature verification configuration.
///
/// The secret is read from the [`AppContext`] hook secret store on each
/// request, so a secret captured during the handshake is used right away.
pub struct VerifySignature {
    enabled: bool,
}

impl VerifySignature {
    /// Create a new configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            enabled: !config.server.disable_webhook_signature,
        }
    }
}

// Middleware factory is `Transform` trait from actix-service crate
// `S` - type of the next service
// `B` - type of response's body
impl<S, B> Transform<S, ServiceRequest> for VerifySignature
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<EitherBody<B>>;
    type Transform = VerifySignatureMiddleware<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(VerifySignatureMiddleware {
            enabled: self.enabled,
            service: Rc::new(service),
        })
    }
}

/// Signature verification middleware.
pub struct VerifySignatureMiddleware<S> {
    enabled: bool,
    service: Rc<S>,
}

async fn verify_request_signature(req: &mut ServiceRequest) -> Result<(), Error> {
    let secret = match req.app_data::<Data<AppContext>>() {
        Some(ctx) => ctx.hook_secrets.get().await,
        None => None,
    };

    // No known secret yet, nothing to check against.
    let Some(secret) = secret else {
        return Ok(());
    };

    let signature = req
        .headers()
        .get(HOOK_SIGNATURE_HEADER)
        .ok_or(ServerError::MissingWebhookSignature)?
        .to_str()
        .map_err(|_| ServerError::InvalidWebhookSignature)?
        .to_string();

    let mut body = BytesMut::new();
    let mut stream = req.take_payload();

    while let Some(chunk) = stream.next().await {
        body.extend_from_slice(&chunk?);
    }

    match Signature(&signature).is_valid(&body, &secret) {
        Ok(false) | Err(_) => return Err(ServerError::InvalidWebhookSignature.into()),
        _ => (),
    }

    // Thanks https://github.com/actix/actix-web/issues/1457#issuecomment-617342438
    let (_, mut payload) = actix_http::h1::Payload::create(true);
    payload.unread_data(body.freeze());
    req.set_payload(payload.into());

    Ok(())
}

impl<S, B> Service<ServiceRequest> for VerifySignatureMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    type Response = ServiceResponse<EitherBody<B>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let enabled = self.enabled;

        Box::pin(async move {
            // Handshakes carry no signature.
            let is_handshake = extract_hook_secret(req.headers()).is_some();

            if enabled && !is_handshake && req.method() == Method::POST {
                if let Err(e) = verify_request_signature(&mut req).await {
                    return Ok(req.error_response(e).map_into_right_body());
                }
            }

            svc.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}
