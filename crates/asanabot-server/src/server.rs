//! Server module.

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error,
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use asanabot_asana_interface::ApiService;
use asanabot_config::Config;
use sentry_actix::Sentry;
use tracing::{info, warn};

use crate::{
    asana::MetricsApiService,
    health::{health_check_route, root_route},
    hook_secret::HookSecretStore,
    metrics::build_metrics_handler,
    middlewares::VerifySignature,
    oauth::{auth_asana, auth_callback},
    projects::{project_tasks_list, projects_list},
    webhook::configure_webhook_handlers,
    webhooks::{delete_webhook, list_webhooks, register_webhook, test_webhook},
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// API adapter
    pub api_service: Box<dyn ApiService>,
    /// Webhook secret
    pub hook_secrets: HookSecretStore,
}

impl AppContext {
    /// Create new app context.
    pub fn new(config: Config) -> Self {
        Self::new_with_adapters(config.clone(), Box::new(MetricsApiService::new(config)))
    }

    /// Create new app context using adapters.
    pub fn new_with_adapters(config: Config, api_service: Box<dyn ApiService>) -> Self {
        let hook_secrets = HookSecretStore::new(&config.server.webhook_secret);

        Self {
            config,
            api_service,
            hook_secrets,
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let prometheus = build_metrics_handler();

    App::new()
        .app_data(context.clone())
        .wrap(prometheus)
        .wrap(Sentry::new())
        .wrap(Logger::default())
        .wrap(Cors::permissive())
        .service(
            web::scope("/webhook")
                .wrap(VerifySignature::new(&context.config))
                .configure(configure_webhook_handlers),
        )
        .route("/", web::get().to(root_route))
        .route("/health", web::get().to(health_check_route))
        .route("/projects", web::get().to(projects_list))
        .route("/projects/{project_id}/tasks", web::get().to(project_tasks_list))
        .route("/register-webhook", web::post().to(register_webhook))
        .route("/list-webhooks", web::get().to(list_webhooks))
        .route("/webhooks/{webhook_id}", web::delete().to(delete_webhook))
        .route("/test-webhook", web::get().to(test_webhook))
        .route("/auth/asana", web::get().to(auth_asana))
        .route("/auth/callback", web::get().to(auth_callback))
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            // Display Bad Request response on invalid JSON data
            error::InternalError::from_response(
                "",
                HttpResponse::BadRequest().json(serde_json::json!({
                    "detail": err.to_string()
                })),
            )
            .into()
        }))
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting bot server",
    );

    if context.config.server.disable_webhook_signature {
        warn!("Signature verification is disabled. This can be a security concern.");
    } else if context.config.server.webhook_secret.is_empty() {
        warn!("Environment variable 'BOT_SERVER_WEBHOOK_SECRET' is not set. Signatures will not be checked until a handshake is received.");
    }

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
