//! Centralized constants for the service-accounts workspace.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod api;
pub mod limits;
pub mod paging;
pub mod paths;
