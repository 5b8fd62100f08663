//! Student REST API handlers
//!
//! The raw body is decoded by hand rather than through the `Json`
//! extractor so that an empty or malformed body is reported through the
//! error envelope instead of the extractor's plain-text rejection.

use crate::{ApiError, ApiResult, AppState, CreateStudentRequest, StudentDto, StudentResponse};

use sr_core::Student;

use axum::{Json, extract::State, http::StatusCode};
use bytes::Bytes;

// =============================================================================
// Handlers
// =============================================================================

/// POST /students
///
/// Register a new student
pub async fn create_student(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<StudentResponse>)> {
    if body.is_empty() {
        return Err(ApiError::decode("request body is empty"));
    }

    // A body that does not decode is never validated
    let request: CreateStudentRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::decode(format!("invalid request body: {e}")))?;

    let violations = request.validate(&state.validation);
    if !violations.is_empty() {
        return Err(ApiError::validation(violations));
    }

    let student = Student::new(request.name, request.email, request.age);
    log::info!("Registered student {}", student.id);

    Ok((
        StatusCode::CREATED,
        Json(StudentResponse {
            student: StudentDto::from(student),
        }),
    ))
}
