//! Whitted Core - scene description for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Materials and lights**: `Material`, `Albedo`, `Light`
//! - **Primitives**: the `Primitive` trait with `Sphere` and `Plane`
//! - **Scene**: an immutable `Scene`, assembled with `SceneBuilder`, that
//!   answers nearest-hit queries
//!
//! # Example
//!
//! ```
//! use whitted_core::{Material, Scene};
//! use whitted_math::{Ray, Vec3};
//!
//! let mut builder = Scene::builder();
//! builder.add_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default())?;
//! builder.add_light(Vec3::new(-20.0, 20.0, 20.0), 1.5)?;
//! let scene = builder.build();
//!
//! let hit = scene.trace(&Ray::new(Vec3::ZERO, Vec3::NEG_Z));
//! assert!(hit.is_some());
//! # Ok::<(), whitted_core::SceneError>(())
//! ```

pub mod error;
pub mod light;
pub mod material;
pub mod plane;
pub mod primitive;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use light::Light;
pub use material::{Albedo, Color, Material};
pub use plane::Plane;
pub use primitive::{HitRecord, Primitive};
pub use scene::{Scene, SceneBuilder, MAX_DISTANCE};
pub use sphere::{Chord, Sphere};
