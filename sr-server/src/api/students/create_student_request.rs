use sr_config::ValidationConfig;
use sr_core::{FieldViolation, validation};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    /// Student full name (required)
    pub name: String,

    /// Contact email address (required)
    pub email: String,

    /// Age in years (optional)
    #[serde(default)]
    pub age: Option<u8>,
}

impl CreateStudentRequest {
    /// Run every field constraint and collect every violation.
    ///
    /// Fields are checked in declaration order and each field reports its
    /// first failed constraint, so the result maps one field to exactly
    /// one message.
    pub fn validate(&self, limits: &ValidationConfig) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if let Some(v) = validation::validate_required(&self.name, "name")
            .or_else(|| validation::validate_max_length(&self.name, "name", limits.max_name_length))
        {
            violations.push(v);
        }

        if let Some(v) = validation::validate_required(&self.email, "email")
            .or_else(|| validation::validate_email(&self.email, "email"))
        {
            violations.push(v);
        }

        if let Some(age) = self.age
            && let Some(v) = validation::validate_range(age, "age", limits.min_age, limits.max_age)
        {
            violations.push(v);
        }

        violations
    }
}
