mod project;
mod project_details;

pub use project::{AsanaProject, AsanaProjectStatus};
pub use project_details::ProjectDetails;
