//! Locating and reading `.foodie-hub.toml`

use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".foodie-hub.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub content: String,
}

/// Where the config file is searched, highest precedence first:
/// the current directory, then the home directory.
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }
    candidates
}

/// Read the first candidate that can be read
pub fn read_first_config<P: AsRef<Path>>(candidates: &[P]) -> Option<ConfigSource> {
    candidates.iter().find_map(|path| {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                Some(ConfigSource {
                    path: path.to_path_buf(),
                    content,
                })
            }
            Err(_) => None,
        }
    })
}

/// Load `.foodie-hub.toml` from CWD first, then the home directory
pub fn load_config_file() -> Option<ConfigSource> {
    read_first_config(&config_file_candidates())
}
