//! Assignment intake.

use asanabot_asana_interface::{ApiService, Result};
use asanabot_config::Config;
use tracing::info;

/// Outcome of an assignment intake.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum IntakeOutcome {
    /// Task is not assigned to the trigger assignee.
    Skipped { assignee: Option<String> },
    /// Task was picked up.
    Processed {
        attachments: Vec<String>,
        story_id: Option<String>,
    },
}

fn build_comment(assignee: &str, attachments: &[String]) -> String {
    let mut comment = format!("Task picked up by {assignee}.");
    if attachments.is_empty() {
        comment.push_str("\n\nNo attachments found.");
    } else {
        comment.push_str("\n\nAttachments:");
        for url in attachments {
            comment.push_str("\n- ");
            comment.push_str(url);
        }
    }

    comment
}

/// Handle a task newly assigned, if the assignee is the trigger assignee.
#[tracing::instrument(skip(config, api_service))]
pub(crate) async fn assignment_intake(
    config: &Config,
    api_service: &dyn ApiService,
    task_id: &str,
) -> Result<IntakeOutcome> {
    let task = api_service.tasks_get(task_id).await?;
    if !task.is_assigned_to(&config.trigger_assignee_name) {
        return Ok(IntakeOutcome::Skipped {
            assignee: task.assignee_name().map(ToOwned::to_owned),
        });
    }

    let attachments = api_service.task_attachment_urls(task_id).await?;
    info!(
        task_id = %task.gid,
        task_name = %task.name,
        due_on = ?task.due_on,
        attachments = attachments.len(),
        message = "Task assigned to trigger assignee"
    );

    let story_id = if config.server.enable_assignment_comments {
        let comment = build_comment(&config.trigger_assignee_name, &attachments);
        Some(api_service.task_stories_post(task_id, &comment).await?)
    } else {
        None
    };

    Ok(IntakeOutcome::Processed {
        attachments,
        story_id,
    })
}
