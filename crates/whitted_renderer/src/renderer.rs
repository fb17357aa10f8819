//! Frame driver: configuration, per-pixel tracing and tone mapping.
//!
//! Each pixel is a pure function of the scene, the camera and its
//! coordinates, so rows can be farmed out to rayon without any locking.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::Deserialize;
use whitted_core::{Color, Scene};
use whitted_math::Interval;

use crate::error::{RenderError, RenderResult};
use crate::{shade, Camera};

/// Recursion limit for reflection and refraction rays.
pub const MAX_DEPTH: u32 = 4;

/// Colour returned for rays that escape the scene.
pub const BACKGROUND: Color = Color::new(0.2, 0.7, 0.8);

/// Offset applied to secondary ray origins to avoid self-intersection.
pub const SURFACE_BIAS: f32 = 1e-3;

/// Upper bound accepted for `RenderConfig::max_depth`.
///
/// Every bounce adds a stack frame to `shade`, so this also bounds the stack
/// a single pixel needs.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Tracing options; the resolution and field of view live on [`Camera`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum reflection/refraction depth
    pub max_depth: u32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Secondary ray origin offset
    pub bias: f32,
    /// Trace rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            background: BACKGROUND,
            bias: SURFACE_BIAS,
            parallel: false,
        }
    }
}

impl RenderConfig {
    /// Reject settings that would blow the stack or produce meaningless rays.
    pub fn validate(&self) -> RenderResult<()> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(RenderError::InvalidSettings(format!(
                "max_depth must be at most {MAX_DEPTH_LIMIT}, got {}",
                self.max_depth
            )));
        }
        if !self.bias.is_finite() || self.bias < 0.0 {
            return Err(RenderError::InvalidSettings(format!(
                "bias must be finite and non-negative, got {}",
                self.bias
            )));
        }
        if !self.background.is_finite() {
            return Err(RenderError::InvalidSettings(format!(
                "background must be finite, got {}",
                self.background
            )));
        }
        Ok(())
    }
}

/// Contents of a render settings file.
///
/// ```json
/// { "camera": { "width": 640, "height": 480, "fov": 0.785 },
///   "render": { "max_depth": 4, "parallel": true } }
/// ```
///
/// Both sections and every field in them are optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub camera: Camera,
    pub render: RenderConfig,
}

impl RenderSettings {
    /// Parse and validate JSON settings; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> RenderResult<()> {
        self.camera.validate()?;
        self.render.validate()
    }
}

/// Number of pixels in a `width` x `height` image, if it fits in memory indices.
pub(crate) fn pixel_count(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)
}

/// Scale a colour down so its largest channel is at most 1.
///
/// Channels keep their ratios, so an over-exposed highlight keeps its hue
/// instead of clipping towards white.
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Convert a color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Trace and tone map a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, i: u32, j: u32, config: &RenderConfig) -> Color {
    let color = shade(camera.eye(), camera.primary_direction(i, j), scene, 0, config);
    tone_map(color)
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major, left to right then top to bottom
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let len = pixel_count(width, height).ok_or_else(|| {
            RenderError::InvalidSettings(format!("{width}x{height} image does not fit in memory"))
        })?;
        Ok(Self {
            width,
            height,
            pixels: vec![Color::ZERO; len],
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed RGB bytes (for saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// The camera decides the resolution. Both the camera and `config` are
/// validated first, so an oversized image or an unbounded recursion depth is
/// reported as an error instead of being attempted. Rows are traced on the
/// rayon pool when `config.parallel` is set; the output is identical either
/// way.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    camera.validate()?;
    config.validate()?;
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height)?;

    log::info!(
        "Rendering {}x{} ({} primitives, {} lights, max depth {})",
        camera.image_width,
        camera.image_height,
        scene.len(),
        scene.lights().len(),
        config.max_depth
    );
    let start = Instant::now();

    let width = camera.image_width as usize;
    if config.parallel {
        image
            .pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(j, row)| trace_row(camera, scene, config, j as u32, row));
    } else {
        for (j, row) in image.pixels.chunks_mut(width).enumerate() {
            trace_row(camera, scene, config, j as u32, row);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

fn trace_row(camera: &Camera, scene: &Scene, config: &RenderConfig, j: u32, row: &mut [Color]) {
    for (i, pixel) in row.iter_mut().enumerate() {
        *pixel = render_pixel(camera, scene, i as u32, j, config);
    }
}
