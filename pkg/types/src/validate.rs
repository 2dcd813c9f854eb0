use pkg_constants::limits::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};
use thiserror::Error;

/// Why a create request was rejected before reaching the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,
    #[error(
        "name '{0}' must start with a letter and end with a letter or number; \
         valid characters are lowercase letters a-z, digits 0-9 and hyphens (-)"
    )]
    InvalidNameFormat(String),
    #[error("name cannot exceed {max} characters (got {len})", max = MAX_NAME_LENGTH)]
    NameTooLong { len: usize },
    #[error("description is required")]
    EmptyDescription,
    #[error(
        "description cannot exceed {max} characters (got {len})",
        max = MAX_DESCRIPTION_LENGTH
    )]
    DescriptionTooLong { len: usize },
}

/// Validate a service account name.
/// Rules: `^[a-z]([-a-z0-9]*[a-z0-9])?$`, at most 32 chars.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let starts_with_letter = trimmed.starts_with(|c: char| c.is_ascii_lowercase());
    let ends_alphanumeric =
        trimmed.ends_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit());
    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !(starts_with_letter && ends_alphanumeric && valid_chars) {
        return Err(ValidationError::InvalidNameFormat(trimmed.to_string()));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong { len });
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::DescriptionTooLong { len });
    }
    Ok(())
}
