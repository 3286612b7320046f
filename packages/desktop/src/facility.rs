// Seam between the launcher and the native windowing library.

use std::fmt;

use gamepage_common::window::WindowSpec;
use thiserror::Error;

/// Opaque handle to a window registered with a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(u32);

impl WindowHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum FacilityError {
    #[error("windowing system unavailable: {0}")]
    Unavailable(String),

    #[error("failed to create native window")]
    Window(#[source] tao::error::OsError),

    #[error("failed to create webview")]
    Webview(#[source] wry::Error),

    #[error("native window has no container to host a webview")]
    NoContainer,

    #[error("event loop started with no windows registered")]
    NoWindows,

    #[error("event loop exited with status {0}")]
    LoopExit(i32),
}

/// A windowing library that can host webview windows.
///
/// `create_window` registers a window that becomes visible once `start`
/// runs the event loop. `start` blocks until every window has been closed.
pub trait WindowFacility {
    fn create_window(&mut self, spec: WindowSpec) -> Result<WindowHandle, FacilityError>;

    fn start(self) -> Result<(), FacilityError>;
}
