use crate::api::students::student_dto::StudentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: StudentDto,
}
