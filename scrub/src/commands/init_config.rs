// scrub/src/commands/init_config.rs
//! `scrub --init-config`: writes the example configuration to the default location.

use anyhow::{bail, Context, Result};
use log::info;
use std::path::Path;

use scrub_core::ScrubConfig;

use crate::ui::output_format::info_msg;

/// Writes [`ScrubConfig::example`] to `path`. Refuses to overwrite an existing file.
pub fn run_init_config(path: &Path, quiet: bool) -> Result<()> {
    if path.exists() {
        bail!(
            "Config file already exists at: {}. Edit it manually or delete it to create a new one.",
            path.display()
        );
    }

    ScrubConfig::example()
        .write_to_file(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    info!("Example configuration written to {}.", path.display());

    if !quiet {
        info_msg(format!("Created example config at: {}", path.display()));
        info_msg("Edit this file to add your corporate terms.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use test_log::test;

    #[test]
    fn test_writes_example_into_new_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".config").join("scrub").join("config.yaml");
        run_init_config(&path, true).unwrap();
        assert_eq!(ScrubConfig::load_from_file(&path).unwrap(), ScrubConfig::example());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "corporate:\n  deny_list: [\"keep-me\"]\n").unwrap();

        let err = run_init_config(&path, true).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        let kept = ScrubConfig::load_from_file(&path).unwrap();
        assert_eq!(kept.corporate.deny_list, vec!["keep-me"]);
    }
}
