use std::path::PathBuf;

use crate::constants::CONFIG_FILE_NAME;

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "hdr-gradient", "hdr-gradient")
}

pub fn config_root_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
