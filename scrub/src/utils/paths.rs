// scrub/src/utils/paths.rs
//! Default file locations.

use std::path::PathBuf;

pub const CONFIG_DIR_NAME: &str = "scrub";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// `~/.config/scrub/config.yaml` on every platform. `None` if there is no home directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    })
}
