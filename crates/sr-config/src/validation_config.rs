use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_AGE, DEFAULT_MAX_NAME_LENGTH, DEFAULT_MIN_AGE,
};

use serde::Deserialize;

/// Limits applied to student registration fields
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_name_length: usize,
    pub min_age: u8,
    pub max_age: u8,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_name_length == 0 {
            return Err(ConfigError::validation(
                "validation.max_name_length must be at least 1",
            ));
        }

        if self.min_age > self.max_age {
            return Err(ConfigError::validation(format!(
                "validation.min_age ({}) must not exceed validation.max_age ({})",
                self.min_age, self.max_age
            )));
        }

        Ok(())
    }
}
