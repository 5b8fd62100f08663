pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod server;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, ApiErrorResponse, ErrorDetail, Result as ApiResult},
    students::{
        create_student_request::CreateStudentRequest,
        student_dto::StudentDto,
        student_response::StudentResponse,
        students::create_student,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use server::{
    DRAIN_TIMEOUT, DrainOutcome, Server, ServerState, wait_for_shutdown_signal,
};
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};
