//! Application services for task tracking.

mod tracker;

pub use tracker::{
    CreateTaskRequest, NewCommentRequest, TaskService, TaskServiceError, TaskServiceResult,
    UpdateTaskRequest,
};
