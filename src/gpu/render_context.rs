use std::fmt;

/// Errors that can occur during GPU context initialization.
#[derive(Debug)]
pub enum RenderContextError {
    /// Failed to create a wgpu surface from the window handle.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    AdapterRequest(wgpu::RequestAdapterError),
    /// GPU device request failed (limits or features not met).
    DeviceRequest(wgpu::RequestDeviceError),
    /// Surface configuration not supported by the selected adapter.
    UnsupportedSurface,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation(e) => {
                write!(f, "surface creation failed: {e}")
            }
            Self::AdapterRequest(e) => {
                write!(f, "no compatible GPU adapter found: {e}")
            }
            Self::DeviceRequest(e) => write!(f, "device request failed: {e}"),
            Self::UnsupportedSurface => {
                write!(f, "surface configuration not supported by adapter")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SurfaceCreation(e) => Some(e),
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::UnsupportedSurface => None,
        }
    }
}

/// Physical surface size for a logical size and pixel ratio, never below
/// one pixel on either axis.
#[must_use]
pub fn physical_size(logical: (u32, u32), pixel_ratio: f32) -> (u32, u32) {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let scale = |v: u32| ((v as f32 * ratio).round() as u32).max(1);
    (scale(logical.0), scale(logical.1))
}

/// Owns the core wgpu resources: device, queue, surface, and configuration.
pub struct RenderContext {
    /// The wgpu logical device.
    pub device: wgpu::Device,
    /// The wgpu command queue.
    pub queue: wgpu::Queue,
    /// The window surface for presentation (`None` once released).
    pub surface: Option<wgpu::Surface<'static>>,
    /// Current surface configuration (format, physical size, present mode).
    pub config: wgpu::SurfaceConfiguration,
    logical_size: (u32, u32),
    pixel_ratio: f32,
}

impl RenderContext {
    /// Create a render context for a window surface with the given logical
    /// size and pixel ratio.
    ///
    /// # Errors
    ///
    /// Returns `RenderContextError` if surface creation, adapter request,
    /// device request, or surface configuration fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        logical_size: (u32, u32),
        pixel_ratio: f32,
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::SurfaceCreation)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::LowPower,
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::AdapterRequest)?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Blob Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::DeviceRequest)?;

        let (width, height) = physical_size(logical_size, pixel_ratio);
        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(RenderContextError::UnsupportedSurface)?;
        config.present_mode = wgpu::PresentMode::Fifo;
        // Shaders write linear light; prefer a format that encodes it.
        if !config.format.is_srgb() {
            let caps = surface.get_capabilities(&adapter);
            if let Some(&srgb) = caps.formats.iter().find(|f| f.is_srgb()) {
                config.format = srgb;
            } else {
                log::warn!("no sRGB surface format, colors will look dark");
            }
        }
        surface.configure(&device, &config);

        log::debug!(
            "render context: {:?} {width}x{height} ({:?})",
            adapter.get_info().backend,
            config.format
        );

        Ok(Self {
            device,
            queue,
            surface: Some(surface),
            config,
            logical_size,
            pixel_ratio,
        })
    }

    /// The surface texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Logical size last requested by the host.
    pub fn logical_size(&self) -> (u32, u32) {
        self.logical_size
    }

    /// Whether the logical size has zero area (nothing is presented).
    pub fn is_zero_sized(&self) -> bool {
        self.logical_size.0 == 0 || self.logical_size.1 == 0
    }

    /// Change the pixel ratio and reconfigure at the current logical size.
    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = ratio;
        self.resize(self.logical_size.0, self.logical_size.1);
    }

    /// Record the new logical size and reconfigure the surface. Zero-sized
    /// dimensions are remembered but leave the surface configuration alone.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.logical_size = (width, height);
        if self.is_zero_sized() {
            return;
        }
        let (physical_width, physical_height) =
            physical_size(self.logical_size, self.pixel_ratio);
        self.config.width = physical_width;
        self.config.height = physical_height;
        self.reconfigure();
    }

    /// Re-apply the current configuration to the surface (after it was
    /// lost or became outdated).
    pub fn reconfigure(&self) {
        if let Some(ref surface) = self.surface {
            surface.configure(&self.device, &self.config);
        }
    }

    /// Acquire the next swapchain texture for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the surface is lost, outdated,
    /// or timed out, or if the surface was already released.
    pub fn get_next_frame(
        &self,
    ) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface
            .as_ref()
            .map_or(Err(wgpu::SurfaceError::Lost), |surface| {
                surface.get_current_texture()
            })
    }

    /// Create a new command encoder for recording GPU commands.
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Blob Encoder"),
            })
    }

    /// Finish the encoder and submit its command buffer to the GPU queue.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_size_applies_ratio() {
        assert_eq!(physical_size((800, 600), 2.0), (1600, 1200));
        assert_eq!(physical_size((101, 51), 1.5), (152, 77));
    }

    #[test]
    fn physical_size_never_zero() {
        assert_eq!(physical_size((0, 0), 2.0), (1, 1));
        assert_eq!(physical_size((10, 10), 0.0), (10, 10));
        assert_eq!(physical_size((10, 10), f32::NAN), (10, 10));
    }
}
