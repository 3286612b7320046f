// Native windowing facility: tao windows and event loop, each hosting a wry webview.

use std::collections::HashMap;
use std::panic::{self, UnwindSafe};

use gamepage_common::window::WindowSpec;
use tao::dpi::LogicalSize;
use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop};
use tao::platform::run_return::EventLoopExtRunReturn;
use tao::window::{Window, WindowBuilder, WindowId};
use tracing::{debug, info};
use wry::{WebView, WebViewBuilder};

use crate::facility::{FacilityError, WindowFacility, WindowHandle};

// Field order matters: the webview is dropped before the window hosting it.
struct HostedWindow {
    handle: WindowHandle,
    _webview: WebView,
    _window: Window,
}

pub struct WebviewFacility {
    event_loop: EventLoop<()>,
    windows: HashMap<WindowId, HostedWindow>,
    next_id: u32,
}

impl WebviewFacility {
    /// Initialize the platform event loop. Must be called on the main thread.
    pub fn new() -> Result<Self, FacilityError> {
        // tao panics instead of returning an error when the platform backend
        // (GTK on Linux) cannot start, e.g. without a display.
        let event_loop = catch_init_panic(EventLoop::new).map_err(FacilityError::Unavailable)?;

        Ok(Self { event_loop, windows: HashMap::new(), next_id: 0 })
    }
}

/// Run `init`, turning a panic into its message without the panic hook
/// printing it first.
fn catch_init_panic<R>(init: impl FnOnce() -> R + UnwindSafe) -> Result<R, String> {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(init);
    panic::set_hook(previous_hook);

    result.map_err(|payload| {
        payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "event loop initialization panicked".to_owned())
    })
}

impl WindowFacility for WebviewFacility {
    fn create_window(&mut self, spec: WindowSpec) -> Result<WindowHandle, FacilityError> {
        let size = spec.size();
        let window = WindowBuilder::new()
            .with_title(spec.title())
            .with_inner_size(LogicalSize::new(f64::from(size.width()), f64::from(size.height())))
            .with_resizable(spec.resizable())
            .build(&self.event_loop)
            .map_err(FacilityError::Window)?;

        let webview = webview_builder(&window)?
            .with_url(spec.url().as_str())
            .with_devtools(spec.devtools())
            .build()
            .map_err(FacilityError::Webview)?;

        let handle = WindowHandle::new(self.next_id);
        self.next_id += 1;
        debug!(%handle, url = %spec.url(), "webview attached");

        self.windows
            .insert(window.id(), HostedWindow { handle, _webview: webview, _window: window });
        Ok(handle)
    }

    fn start(mut self) -> Result<(), FacilityError> {
        if self.windows.is_empty() {
            return Err(FacilityError::NoWindows);
        }

        let mut windows = std::mem::take(&mut self.windows);
        let status = self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                Event::NewEvents(StartCause::Init) => debug!("event loop running"),
                Event::WindowEvent { window_id, event: WindowEvent::CloseRequested, .. } => {
                    if let Some(closed) = windows.remove(&window_id) {
                        info!(handle = %closed.handle, "window closed");
                    }
                    if windows.is_empty() {
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });

        match status {
            0 => Ok(()),
            code => Err(FacilityError::LoopExit(code)),
        }
    }
}

#[cfg(any(target_os = "windows", target_os = "macos"))]
fn webview_builder(window: &Window) -> Result<WebViewBuilder<'_>, FacilityError> {
    Ok(WebViewBuilder::new(window))
}

// On Linux and the BSDs the webview is a GTK widget packed into tao's vbox.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn webview_builder(window: &Window) -> Result<WebViewBuilder<'_>, FacilityError> {
    use tao::platform::unix::WindowExtUnix;
    use wry::WebViewBuilderExtUnix;

    let vbox = window.default_vbox().ok_or(FacilityError::NoContainer)?;
    Ok(WebViewBuilder::new_gtk(vbox))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_panic_becomes_its_message() {
        let err = catch_init_panic(|| -> u32 { panic!("Failed to initialize gtk backend!") })
            .unwrap_err();
        assert_eq!(err, "Failed to initialize gtk backend!");
    }

    #[test]
    fn formatted_init_panic_keeps_its_message() {
        let display = ":0";
        let err = catch_init_panic(|| -> u32 { panic!("cannot open display {display}") })
            .unwrap_err();
        assert_eq!(err, "cannot open display :0");
    }

    #[test]
    fn successful_init_passes_through() {
        assert_eq!(catch_init_panic(|| 42), Ok(42));
    }

    #[test]
    fn hook_is_restored_after_init() {
        catch_init_panic(|| -> u32 { panic!("silenced") }).unwrap_err();

        // The default hook is back, so a later panic still unwinds normally.
        let outcome = panic::catch_unwind(|| -> u32 { panic!("after") });
        assert!(outcome.is_err());
    }
}
