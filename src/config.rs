use std::env;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// The signed-in instructor; every course the session loads belongs to
    /// this name.
    pub instructor: String,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://attendance.db?mode=rwc".to_string());
        let instructor = env::var("INSTRUCTOR")
            .map_err(|_| AppError::BadRequest("INSTRUCTOR is not set".to_string()))?;

        Ok(Self {
            database_url,
            instructor,
        })
    }
}
