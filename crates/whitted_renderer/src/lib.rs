//! Whitted Renderer - recursive CPU ray tracing
//!
//! A Whitted-style ray tracer: every hit mixes Phong direct lighting with hard
//! shadows, a mirror reflection ray and a refraction ray, recursing to a fixed
//! depth. The scene itself (primitives, lights, nearest-hit query) lives in
//! `whitted_core`.

mod camera;
mod encode;
mod error;
mod optics;
mod renderer;
pub mod shading;
mod tracer;

pub use camera::{Camera, MAX_PIXELS};
pub use encode::{save, write_ppm};
pub use error::{RenderError, RenderResult};
pub use optics::{offset_origin, reflect, refract};
pub use renderer::{
    color_to_rgb, render, render_pixel, tone_map, ImageBuffer, RenderConfig, RenderSettings, BACKGROUND,
    MAX_DEPTH, MAX_DEPTH_LIMIT, SURFACE_BIAS,
};
pub use shading::{direct_illumination, is_shadowed, LightSample};
pub use tracer::shade;

/// Re-export scene and math types so callers need only this crate
pub use whitted_core::{Albedo, Color, Light, Material, Scene, SceneBuilder, SceneError};
pub use whitted_math::{Ray, Vec3};
