//! Student entity - the resource served by the registry API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Age in years, when provided at registration
    pub age: Option<u8>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Create a new student with a fresh id
    pub fn new(name: String, email: String, age: Option<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            age,
            created_at: Utc::now(),
        }
    }
}
