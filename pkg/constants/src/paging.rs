//! Pagination constants.

/// First page number; pages are 1-based.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when none (or an invalid one) is requested.
pub const DEFAULT_PER_PAGE: u64 = 50;
