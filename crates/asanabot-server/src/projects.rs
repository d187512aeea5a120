//! Project routes.

use actix_web::{web, HttpResponse, Result};
use asanabot_asana_interface::types::{ProjectDetails, TaskDetails};

use crate::{server::AppContext, ServerError};

#[tracing::instrument(skip_all)]
pub(crate) async fn projects_list(ctx: web::Data<AppContext>) -> Result<HttpResponse> {
    let workspace_id = &ctx.config.api.asana.workspace_id;
    if workspace_id.is_empty() {
        return Err(ServerError::MissingConfiguration {
            detail: "Missing Asana workspace ID",
        }
        .into());
    }

    let projects: Vec<ProjectDetails> = ctx
        .api_service
        .projects_list(workspace_id)
        .await
        .map_err(ServerError::from)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(&projects))
}

#[tracing::instrument(skip(ctx))]
pub(crate) async fn project_tasks_list(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let tasks: Vec<TaskDetails> = ctx
        .api_service
        .project_tasks_list(&path)
        .await
        .map_err(ServerError::from)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(&tasks))
}
