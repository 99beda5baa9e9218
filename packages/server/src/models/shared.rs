use crate::error::AppError;

/// Return the trimmed name, or a validation error when it is missing or blank.
pub fn require_name(name: Option<&str>, message: &str) -> Result<String, AppError> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(AppError::Validation(message.to_string())),
    }
}
