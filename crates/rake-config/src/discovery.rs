//! Locating `.rake.toml` files.
//!
//! Project configs are collected from the working directory upwards through its
//! ancestors. A config marked `root = true` ends the walk; otherwise the global
//! `~/.rake.toml` is consulted last.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".rake.toml";

/// Lists the config files that apply in `cwd`, highest precedence first.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let ends_walk = is_root_config(&candidate);
        configs.push(candidate);
        if ends_walk {
            debug!(
                root = %dir.display(),
                count = configs.len(),
                "config walk ended at root config"
            );
            return configs;
        }
    }

    if let Some(global) = global_config_path()
        && global.is_file()
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    debug!(count = configs.len(), "discovered config files");
    configs
}

/// The user's home directory, if one can be determined.
fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Path of the global config, `~/.rake.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(CONFIG_FILENAME))
}

/// True if `path` is the global config.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().as_deref() == Some(path)
}

/// True if `dir` is the home directory, where a project config would double as
/// the global one.
pub fn is_home_dir(dir: &Path) -> bool {
    home_dir().as_deref() == Some(dir)
}
