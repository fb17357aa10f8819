//! The showcase scene: four spheres of different materials under three lights.

use whitted_core::{Color, Material, Scene, SceneResult};
use whitted_math::Vec3;

pub fn ivory() -> SceneResult<Material> {
    Material::new(Color::new(0.4, 0.4, 0.3), 50.0, 1.0, [0.6, 0.3, 0.1, 0.0])
}

pub fn glass() -> SceneResult<Material> {
    Material::new(Color::new(0.6, 0.7, 0.8), 125.0, 1.5, [0.0, 0.5, 0.1, 0.8])
}

pub fn red_rubber() -> SceneResult<Material> {
    Material::new(Color::new(0.3, 0.1, 0.1), 10.0, 1.0, [0.9, 0.1, 0.0, 0.0])
}

/// The specular weight of 10 is intentional, it makes the highlights blow out.
pub fn mirror() -> SceneResult<Material> {
    Material::new(Color::new(1.0, 1.0, 1.0), 1425.0, 1.0, [0.0, 10.0, 0.8, 0.0])
}

pub fn build() -> SceneResult<Scene> {
    let mut builder = Scene::builder();
    builder
        .add_sphere(Vec3::new(-3.0, 0.0, -16.0), 2.0, ivory()?)?
        .add_sphere(Vec3::new(-1.0, -1.5, -12.0), 2.0, glass()?)?
        .add_sphere(Vec3::new(1.5, -0.5, -18.0), 3.0, red_rubber()?)?
        .add_sphere(Vec3::new(7.0, 5.0, -18.0), 4.0, mirror()?)?
        .add_light(Vec3::new(-20.0, 20.0, 20.0), 1.5)?
        .add_light(Vec3::new(30.0, 50.0, -25.0), 1.8)?
        .add_light(Vec3::new(30.0, 20.0, 30.0), 1.7)?;
    Ok(builder.build())
}
