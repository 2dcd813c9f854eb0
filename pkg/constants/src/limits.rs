//! Field limits enforced on create.

/// Maximum length of a service account name.
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum length of a service account description.
pub const MAX_DESCRIPTION_LENGTH: usize = 255;
