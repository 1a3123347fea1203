use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the per-project data directory
pub const LOCAL_DIR_NAME: &str = ".habits";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "HABITS_DIR";

/// Resolve the data directory.
///
/// Precedence: explicit path, `HABITS_DIR`, nearest local `.habits` walking
/// up from the current directory, then `~/.habits`. Nothing is created.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    let current_dir = env::current_dir().context("Could not determine current directory")?;
    resolve_from(env::var_os(DATA_DIR_ENV), &current_dir, dirs::home_dir())
}

/// Everything after the explicit path; an empty env value counts as unset
fn resolve_from(
    env_dir: Option<OsString>,
    current_dir: &Path,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = env_dir.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    if let Some(local_dir) = find_local_dir(current_dir) {
        return Ok(local_dir);
    }

    let home = home.context("Could not determine home directory")?;
    Ok(home.join(LOCAL_DIR_NAME))
}

/// Find local .habits directory by walking up the directory tree
fn find_local_dir(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let candidate = current.join(LOCAL_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        current = current.parent()?;
    }
}

/// Ensure the data directory exists
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Initialize a local .habits directory in `parent`
pub fn init_local_dir(parent: &Path) -> Result<PathBuf> {
    let dir = parent.join(LOCAL_DIR_NAME);

    if dir.exists() {
        anyhow::bail!("Habits directory already exists: {}", dir.display());
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    Ok(dir)
}

/// Path of the log file inside the data directory
pub fn log_file(dir: &Path) -> PathBuf {
    dir.join("habits.log")
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> std::io::Result<()> {
    let path = path.as_ref();
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Read file content, `None` if the file doesn't exist
pub fn read_optional<P: AsRef<Path>>(path: P) -> std::io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Remove a file; a missing file is not an error
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
