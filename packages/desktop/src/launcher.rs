// Launch sequence: resolve the entry document, register one window, run the loop.
//
//   Created  (window registered)  --start-->  Running  --last window closed-->  Finished
//
// `Launcher` owns the facility, so the window is registered exactly once and
// the loop can only start after it, and only once.

use std::path::Path;

use gamepage_common::path::file_url;
use gamepage_common::window::{WindowSize, WindowSpec};
use tracing::{info, warn};

use crate::config::LauncherConfig;
use crate::error::LaunchError;
use crate::facility::{WindowFacility, WindowHandle};

/// Turn the effective config into the spec for the one window we open.
///
/// A missing entry document is logged but not treated as an error; the
/// webview shows its own load failure.
pub fn build_window_spec(
    config: &LauncherConfig,
    exe_dir: &Path,
) -> Result<WindowSpec, LaunchError> {
    let entry = config.entry_path(exe_dir);
    let url = file_url(&entry)?;

    if !entry.is_file() {
        warn!(
            entry = %entry.display(),
            "entry document not found, the window will show a load error"
        );
    }
    info!(entry = %entry.display(), %url, "resolved entry document");

    let size = WindowSize::new(config.window.width, config.window.height)?;
    Ok(WindowSpec::new(config.title(), url)?
        .with_size(size)
        .with_resizable(config.window.resizable)
        .with_devtools(config.devtools))
}

/// A window registered with its facility, waiting for the event loop.
pub struct Launcher<F> {
    facility: F,
    handle: WindowHandle,
}

impl<F: WindowFacility> Launcher<F> {
    pub fn create(mut facility: F, spec: WindowSpec) -> Result<Self, LaunchError> {
        let title = spec.title().to_owned();
        let size = spec.size();
        let handle = facility.create_window(spec)?;
        info!(%handle, %title, %size, "window created");
        Ok(Self { facility, handle })
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    /// Run the event loop; returns once every window is closed.
    pub fn start(self) -> Result<(), LaunchError> {
        info!(handle = %self.handle, "starting event loop");
        self.facility.start()?;
        info!("event loop finished");
        Ok(())
    }
}

/// Register the window described by `spec` and block until it is closed.
pub fn launch<F: WindowFacility>(facility: F, spec: WindowSpec) -> Result<(), LaunchError> {
    Launcher::create(facility, spec)?.start()
}
