use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

pub const DB_FILENAME: &str = "snip.db";

/// Get the snip configuration directory.
///
/// `SNIP_CONFIG_DIR` takes precedence when set; otherwise the per-application
/// data directory is used, with `.snip` in the working directory as a last
/// resort on platforms without a home directory.
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = env::var("SNIP_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    ProjectDirs::from("", "", "snip")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".snip"))
}

/// Get the path to the database file.
pub fn get_db_file_path() -> PathBuf {
    get_config_dir().join(DB_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_path_lives_under_config_dir() {
        let path = get_db_file_path();
        assert!(path.ends_with(DB_FILENAME));
        assert!(path.starts_with(get_config_dir()));
    }
}
