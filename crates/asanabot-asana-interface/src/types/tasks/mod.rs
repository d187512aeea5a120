mod attachment;
mod task;
mod task_details;

pub use attachment::AsanaAttachment;
pub use task::AsanaTask;
pub use task_details::TaskDetails;
