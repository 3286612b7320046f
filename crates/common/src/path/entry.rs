// Entry path resolution: `<exe_dir>/Webassets/index.html` and its `file://` URL.
//
// Construction is purely syntactic. Whether the file exists is left to the
// webview that eventually loads it.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

/// Directory next to the executable that holds the web bundle.
pub const ENTRY_DIR: &str = "Webassets";

/// HTML document loaded into the window.
pub const ENTRY_FILE: &str = "index.html";

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("could not determine the running executable")]
    CurrentExe(#[source] io::Error),

    #[error("executable path has no parent directory: {}", .0.display())]
    NoParent(PathBuf),

    #[error("entry path is not absolute: {}", .0.display())]
    NotAbsolute(PathBuf),
}

/// Absolute path of the default entry document, next to the running executable.
///
/// Convenience for the no-override case; a configured entry goes through
/// [`entry_path_with`] against [`executable_dir`] instead.
pub fn resolve_entry_path() -> Result<PathBuf, EntryError> {
    Ok(entry_path_in(&executable_dir()?))
}

/// Directory containing the running executable, canonicalized when possible.
pub fn executable_dir() -> Result<PathBuf, EntryError> {
    let exe = std::env::current_exe().map_err(EntryError::CurrentExe)?;
    parent_dir_of(&exe)
}

fn parent_dir_of(exe: &Path) -> Result<PathBuf, EntryError> {
    let parent = exe
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| EntryError::NoParent(exe.to_path_buf()))?;

    // A parent that cannot be canonicalized is still a usable base; the
    // webview reports the failure if nothing is there.
    Ok(parent.canonicalize().unwrap_or_else(|_| parent.to_path_buf()))
}

/// `<base>/Webassets/index.html`.
pub fn entry_path_in(base: &Path) -> PathBuf {
    base.join(ENTRY_DIR).join(ENTRY_FILE)
}

/// `<base>/<relative>`; an absolute `relative` replaces `base` entirely.
pub fn entry_path_with(base: &Path, relative: &Path) -> PathBuf {
    base.join(relative)
}

/// Convert an absolute filesystem path into a `file://` URL.
pub fn file_url(path: &Path) -> Result<Url, EntryError> {
    Url::from_file_path(path).map_err(|()| EntryError::NotAbsolute(path.to_path_buf()))
}
