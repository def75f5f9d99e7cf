use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Names on both sides of the aggregate must carry visible text.
    pub fn validate_name(param: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::invalid_argument(param, "cannot be empty"));
        }
        Ok(())
    }

    pub fn validate_unsaved(param: &str, id: i32) -> Result<(), AppError> {
        if id != 0 {
            return Err(AppError::invalid_argument(
                param,
                format!("already persisted with id {}", id),
            ));
        }
        Ok(())
    }
}
