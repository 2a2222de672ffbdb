//! Application services for project management.

mod management;
mod requests;

pub use management::{ProjectService, ProjectServiceError, ProjectServiceResult};
pub use requests::{
    AddTaskToProjectRequest, ChangeProjectDescriptionRequest, ChangeProjectMembersRequest,
    ChangeProjectNameRequest, ChangeTaskStatusRequest, CreateProjectRequest, ReassignTaskRequest,
    RemoveTaskRequest,
};
