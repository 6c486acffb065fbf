//! Standalone animation window backed by winit.
//!
//! The window plays the container role ([`SurfaceHost`]) and schedules
//! frames through `request_redraw` ([`FrameScheduler`]); a
//! [`WgpuBackend`] draws into it.
//!
//! ```no_run
//! # use morphblob::Viewer;
//! Viewer::builder()
//!     .with_title("Blob")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::engine::{
    BlobAnimator, FrameHandle, FrameScheduler, RenderBackend, SurfaceHost,
};
use crate::error::MorphError;
use crate::gpu::render_context::RenderContext;
use crate::input::{InputEvent, Rect};
use crate::options::Options;
use crate::renderer::WgpuBackend;
use crate::util::frame_timing::FrameTiming;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: "morphblob".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that plays the blob animation.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::Viewer`] if the event loop fails and
    /// [`MorphError::Gpu`] if the GPU context cannot be created.
    pub fn run(self) -> Result<(), MorphError> {
        let event_loop =
            EventLoop::new().map_err(|e| MorphError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            animator: None,
            timing: FrameTiming::new(Duration::from_secs(5)),
            options: self.options,
            title: self.title,
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| MorphError::Viewer(e.to_string()))?;
        app.error.map_or(Ok(()), Err)
    }
}

// ── Window as host and scheduler ─────────────────────────────────────────

/// The window as the animation's container. Sizes and pointer positions
/// are reported in logical pixels.
struct WindowHost {
    window: Arc<Window>,
}

impl SurfaceHost for WindowHost {
    fn client_size(&self) -> (u32, u32) {
        let logical = self
            .window
            .inner_size()
            .to_logical::<u32>(self.window.scale_factor());
        (logical.width, logical.height)
    }

    fn bounding_rect(&self) -> Rect {
        let (width, height) = self.client_size();
        Rect::from_size(width, height)
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.window.scale_factor() as f32
    }

    fn attach_surface(&mut self) {
        self.window.set_visible(true);
    }

    fn detach_surface(&mut self) {
        self.window.set_visible(false);
    }
}

/// Maps frame requests onto `request_redraw`.
struct RedrawScheduler {
    window: Arc<Window>,
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl RedrawScheduler {
    fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            next_id: 0,
            pending: None,
        }
    }

    fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        self.window.request_redraw();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

type WindowAnimator = BlobAnimator<WindowHost, WgpuBackend, RedrawScheduler>;

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    animator: Option<WindowAnimator>,
    timing: FrameTiming,
    options: Options,
    title: String,
    error: Option<MorphError>,
}

impl ViewerApp {
    fn pixel_ratio(&self, window: &Window) -> f32 {
        (window.scale_factor() as f32).min(self.options.camera.max_pixel_ratio)
    }

    fn redraw(&mut self) {
        let Some(animator) = self.animator.as_mut() else {
            return;
        };
        let Some(handle) = animator.scheduler_mut().take_pending() else {
            return;
        };
        animator.on_frame(handle, self.timing.timestamp_ms());
        if let Some(fps) = self.timing.end_frame() {
            let clock = animator.clock();
            log::debug!(
                "{fps:.1} fps, phase {}, {} cycles",
                clock.phase(),
                clock.cycles()
            );
        }
    }

    fn shut_down(&mut self) {
        if let Some(mut animator) = self.animator.take() {
            animator.destroy();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.animator.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(960, 720))
            .with_transparent(true)
            .with_visible(false);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                self.error = Some(MorphError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        let host = WindowHost {
            window: window.clone(),
        };
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            host.client_size(),
            self.pixel_ratio(&window),
        )) {
            Ok(context) => context,
            Err(e) => {
                log::error!("failed to initialize GPU: {e}");
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        self.animator = Some(BlobAnimator::new(
            host,
            WgpuBackend::new(context),
            RedrawScheduler::new(window),
            self.options.clone(),
        ));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            self.shut_down();
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(_) => {
                if let Some(animator) = &mut self.animator {
                    animator.handle_input(InputEvent::Resized);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let ratio = (scale_factor as f32)
                    .min(self.options.camera.max_pixel_ratio);
                if let Some(animator) = &mut self.animator {
                    animator.backend_mut().set_pixel_ratio(ratio);
                    animator.handle_input(InputEvent::Resized);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(animator) = &mut self.animator {
                    let scale = animator.host().window.scale_factor();
                    let logical = position.to_logical::<f32>(scale);
                    animator.handle_input(InputEvent::PointerMoved {
                        x: logical.x,
                        y: logical.y,
                    });
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => (),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shut_down();
    }
}
