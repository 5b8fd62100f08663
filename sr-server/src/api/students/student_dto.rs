use sr_core::Student;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Wire representation of a student
#[derive(Debug, Serialize)]
pub struct StudentDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    pub created_at: DateTime<Utc>,
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
            age: student.age,
            created_at: student.created_at,
        }
    }
}
