use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::CliError;

/// Append a report section, creating the file on first use.
pub fn append_report(path: &Path, report: &str) -> Result<(), CliError> {
    ensure_parent(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error(path))?;
    file.write_all(report.as_bytes()).map_err(io_error(path))
}

/// Replace `path` with `data` through a sibling temp file and a rename.
pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> Result<(), CliError> {
    ensure_parent(path)?;

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)
        .map_err(io_error(&tmp_path))?;
    file.write_all(data).map_err(io_error(&tmp_path))?;
    file.sync_all().map_err(io_error(&tmp_path))?;

    std::fs::rename(&tmp_path, path).map_err(io_error(path))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    let mut data = serde_json::to_vec_pretty(value)?;
    data.push(b'\n');
    write_bytes_atomic(path, &data)
}

fn ensure_parent(path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(io_error(parent))?;
        }
    }
    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf, CliError> {
    let file_name = path.file_name().ok_or_else(|| CliError::Io {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> CliError + '_ {
    move |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}
