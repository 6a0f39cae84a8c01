use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the data directory, both local (per project) and global (in $HOME)
pub const DATA_DIR_NAME: &str = ".dolist";

/// Log file written inside the data directory
pub const LOG_FILE_NAME: &str = "dolist.log";

/// Get the data directory - checks for a local .dolist first, then falls back to global ~/.dolist
pub fn get_data_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    data_dir_from(&current_dir, dirs::home_dir())
}

/// Data directory seen from `start_dir`, with `home` as the global fallback
pub fn data_dir_from(start_dir: &Path, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(local_dir) = find_local_data_dir(start_dir) {
        return Ok(local_dir);
    }

    let home = home.context("Could not determine home directory")?;
    Ok(home.join(DATA_DIR_NAME))
}

/// Find a local .dolist directory by walking up the directory tree
pub fn find_local_data_dir(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        current = current.parent()?;
    }
}

/// Create a local .dolist directory inside `dir`
pub fn init_local_data_dir(dir: &Path) -> Result<PathBuf> {
    create_data_dir(&dir.join(DATA_DIR_NAME))
}

/// Create `data_dir` itself, failing if it already exists
pub fn create_data_dir(data_dir: &Path) -> Result<PathBuf> {
    if data_dir.exists() {
        anyhow::bail!("Data directory already exists: {}", data_dir.display());
    }

    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create directory: {}", data_dir.display()))?;

    Ok(data_dir.to_path_buf())
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Temp file must live on the same filesystem for the rename to be atomic
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
