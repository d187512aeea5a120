use serde::{Deserialize, Serialize};

use super::AsanaProject;

/// Flattened project view served to clients.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct ProjectDetails {
    /// Global ID.
    pub gid: String,
    /// Name.
    pub name: String,
    /// Owner name.
    pub owner: Option<String>,
    /// Due date.
    pub due_on: Option<String>,
    /// Current status text.
    pub current_status: Option<String>,
}

impl From<AsanaProject> for ProjectDetails {
    fn from(project: AsanaProject) -> Self {
        Self {
            gid: project.gid,
            name: project.name,
            owner: project
                .owner
                .map(|o| o.name)
                .filter(|name| !name.is_empty()),
            due_on: project.due_on,
            current_status: project.current_status.and_then(|s| s.text.or(s.title)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{AsanaData, AsanaProjectStatus, AsanaUser};

    #[test]
    fn test_reshape_full_project() {
        let project = AsanaProject {
            gid: "1201".into(),
            name: "Customs intake".into(),
            owner: Some(AsanaUser {
                gid: "77".into(),
                name: "Glassbox".into(),
            }),
            due_on: Some("2024-06-30".into()),
            current_status: Some(AsanaProjectStatus {
                text: Some("On track".into()),
                title: None,
            }),
        };

        assert_eq!(
            ProjectDetails::from(project),
            ProjectDetails {
                gid: "1201".into(),
                name: "Customs intake".into(),
                owner: Some("Glassbox".into()),
                due_on: Some("2024-06-30".into()),
                current_status: Some("On track".into()),
            }
        );
    }

    #[test]
    fn test_reshape_from_asana_json_without_owner() {
        let body = r#"{"data": [{"gid": "1202", "name": "Backlog", "owner": null, "due_on": null}]}"#;
        let projects: AsanaData<Vec<AsanaProject>> = serde_json::from_str(body).unwrap();
        let details: Vec<ProjectDetails> = projects.data.into_iter().map(Into::into).collect();

        assert_eq!(
            details,
            vec![ProjectDetails {
                gid: "1202".into(),
                name: "Backlog".into(),
                ..Default::default()
            }]
        );
    }
}
