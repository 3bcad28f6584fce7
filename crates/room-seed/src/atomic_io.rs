//! Capability-based file helpers.
//!
//! Files are reached through a `cap_std` directory handle opened on their
//! parent. Writes go to a hidden sibling temp file that is synced and then
//! renamed over the target, so readers see either the old or the new file.

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::ManifestError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Opens the directory containing `path`.
///
/// A bare file name resolves against the working directory.
pub(crate) fn open_parent_dir(path: &Path) -> io::Result<Dir> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Dir::open_ambient_dir(parent, ambient_authority())
}

/// Writes `contents` to `path` inside `dir` via temp file and rename.
///
/// `path` must be a single file name relative to `dir`.
pub(crate) fn write_atomic(
    dir: &Dir,
    path: &Utf8Path,
    contents: &str,
) -> Result<(), ManifestError> {
    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(ManifestError::WriteError {
            path: path.as_std_path().to_path_buf(),
            message: "manifest path must be a file".to_owned(),
        });
    };
    let tmp_name = temp_name_for(file_name);

    if let Err(err) = write_temp_file(dir, &tmp_name, contents) {
        discard_temp_file(dir, &tmp_name);
        return Err(write_error(&path.with_file_name(&tmp_name), &err));
    }
    if let Err(err) = replace_target(dir, &tmp_name, file_name) {
        discard_temp_file(dir, &tmp_name);
        return Err(write_error(path, &err));
    }
    sync_directory(dir);

    Ok(())
}

fn temp_name_for(file_name: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{file_name}.tmp.{}.{nanos}.{counter}", std::process::id())
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn replace_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn discard_temp_file(dir: &Dir, tmp_name: &str) {
    // Best effort; the temp file may never have been created.
    drop(dir.remove_file(tmp_name));
}

fn sync_directory(dir: &Dir) {
    // Best effort; not every platform can sync a directory handle.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}

fn write_error(path: &Utf8Path, err: &io::Error) -> ManifestError {
    ManifestError::WriteError {
        path: path.as_std_path().to_path_buf(),
        message: err.to_string(),
    }
}
