// The one window the launcher opens, described before any native code runs.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Title used when neither the command line nor a config file sets one.
pub const DEFAULT_TITLE: &str = "GamePage";

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("window title is empty")]
    EmptyTitle,

    #[error("window size must be non-zero, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
}

/// Inner size of a window in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    width: u32,
    height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SpecError> {
        if width == 0 || height == 0 {
            return Err(SpecError::ZeroSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Everything the windowing facility needs to open the window.
///
/// Built once at startup and handed to the facility by value. The URL is not
/// checked for reachability; a document that fails to load shows up in the
/// webview, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    title: String,
    url: Url,
    size: WindowSize,
    resizable: bool,
    devtools: bool,
}

impl WindowSpec {
    pub fn new(title: impl Into<String>, url: Url) -> Result<Self, SpecError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SpecError::EmptyTitle);
        }
        Ok(Self {
            title,
            url,
            size: WindowSize::default(),
            resizable: true,
            devtools: false,
        })
    }

    pub fn with_size(mut self, size: WindowSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn with_devtools(mut self, devtools: bool) -> Self {
        self.devtools = devtools;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn size(&self) -> WindowSize {
        self.size
    }

    pub fn resizable(&self) -> bool {
        self.resizable
    }

    pub fn devtools(&self) -> bool {
        self.devtools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_url() -> Url {
        Url::parse("file:///app/Webassets/index.html").unwrap()
    }

    #[test]
    fn new_spec_uses_defaults() {
        let spec = WindowSpec::new(DEFAULT_TITLE, index_url()).unwrap();
        assert_eq!(spec.title(), "GamePage");
        assert_eq!(spec.url().as_str(), "file:///app/Webassets/index.html");
        assert_eq!(spec.size(), WindowSize::new(800, 600).unwrap());
        assert!(spec.resizable());
        assert!(!spec.devtools());
    }

    #[test]
    fn empty_or_blank_title_is_rejected() {
        assert_eq!(WindowSpec::new("", index_url()), Err(SpecError::EmptyTitle));
        assert_eq!(WindowSpec::new("   ", index_url()), Err(SpecError::EmptyTitle));
    }

    #[test]
    fn builder_methods_override_defaults() {
        let spec = WindowSpec::new("GameWebsiteApp", index_url())
            .unwrap()
            .with_size(WindowSize::new(1280, 720).unwrap())
            .with_resizable(false)
            .with_devtools(true);
        assert_eq!(spec.title(), "GameWebsiteApp");
        assert_eq!(spec.size().width(), 1280);
        assert_eq!(spec.size().height(), 720);
        assert!(!spec.resizable());
        assert!(spec.devtools());
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            WindowSize::new(0, 600),
            Err(SpecError::ZeroSize { width: 0, height: 600 })
        );
        assert!(WindowSize::new(800, 0).is_err());
    }

    #[test]
    fn size_displays_as_width_by_height() {
        assert_eq!(WindowSize::default().to_string(), "800x600");
    }
}
