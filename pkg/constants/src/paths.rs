//! Filesystem path constants.

/// Config directory name under the user's config dir (e.g. `~/.config/sactl`).
pub const CONFIG_DIR_NAME: &str = "sactl";

/// Config file name inside `CONFIG_DIR_NAME`.
pub const CONFIG_FILE_NAME: &str = "config.yaml";
