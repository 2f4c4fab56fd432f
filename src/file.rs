// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Write the rendered document to a file, or to stdout when no path is
/// given. Returns the path written to, if any.
pub fn write_output(
    out: Option<&Path>,
    contents: &str,
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            fs::write(path, contents)?;
            Ok(Some(path.to_path_buf()))
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(contents.as_bytes())?;
            lock.flush()?;
            Ok(None)
        }
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
