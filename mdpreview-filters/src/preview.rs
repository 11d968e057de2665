//! Browser preview of a published document.
//!
//! Resolves the file to a `file://` URL and hands it to a browser process that is spawned and
//! left running. The browser is either the one configured by the caller or the platform opener
//! found on `PATH`.

use crate::error::ConvertError;
use std::path::{Path, PathBuf};
use std::process::Command;
use url::Url;
use which::which;

#[cfg(target_os = "macos")]
const OPENERS: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const OPENERS: &[&str] = &["cmd"];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENERS: &[&str] = &["xdg-open", "gio", "sensible-browser", "firefox", "chromium"];

/// Absolute `file://` URL for `path`.
pub fn file_url(path: &Path) -> Result<Url, ConvertError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|err| {
                ConvertError::InvalidInput(format!("cannot resolve '{}': {err}", path.display()))
            })?
            .join(path)
    };
    Url::from_file_path(&absolute).map_err(|_| {
        ConvertError::InvalidInput(format!("cannot build a URL for '{}'", absolute.display()))
    })
}

/// Locate the program used to open URLs.
pub fn find_browser(configured: Option<&str>) -> Result<PathBuf, ConvertError> {
    if let Some(program) = configured.filter(|p| !p.trim().is_empty()) {
        return which(program).map_err(|_| {
            ConvertError::BrowserNotFound(format!("'{program}' is not on PATH"))
        });
    }
    OPENERS
        .iter()
        .find_map(|candidate| which(candidate).ok())
        .ok_or_else(|| {
            ConvertError::BrowserNotFound(format!("none of {} found on PATH", OPENERS.join(", ")))
        })
}

fn browser_command(program: &Path, url: &Url) -> Command {
    let mut command = Command::new(program);
    let is_cmd = program
        .file_stem()
        .is_some_and(|stem| stem.eq_ignore_ascii_case("cmd"));
    let is_gio = program.file_stem().is_some_and(|stem| stem == "gio");
    if is_cmd {
        command.args(["/C", "start", ""]);
    } else if is_gio {
        command.arg("open");
    }
    command.arg(url.as_str());
    command
}

/// Open `path` in a browser without waiting for it to exit.
pub fn open_in_browser(path: &Path, browser: Option<&str>) -> Result<(), ConvertError> {
    let url = file_url(path)?;
    let program = find_browser(browser)?;
    tracing::info!(browser = %program.display(), %url, "opening preview");
    browser_command(&program, &url)
        .spawn()
        .map(|_| ())
        .map_err(|source| ConvertError::Launch {
            program: program.display().to_string(),
            source,
        })
}
