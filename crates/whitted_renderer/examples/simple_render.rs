//! Simple Whitted ray tracer example.
//!
//! Renders a few spheres over a mirror floor and saves to PPM format.

use whitted_renderer::{
    render, save, Camera, Color, Material, RenderConfig, Scene, Vec3,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Whitted Ray Tracer - Simple Example");
    println!("===================================");

    // Build the scene
    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!("Scene built in {:?} ({} primitives)", start.elapsed(), scene.len());

    // Render configuration
    let camera = Camera::new().with_resolution(640, 480);
    let config = RenderConfig {
        parallel: true,
        ..RenderConfig::default()
    };

    println!("Rendering {}x{}...", camera.image_width, camera.image_height);

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config)?;
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save(&image, filename)?;
    println!("Saved to {}", filename);
    Ok(())
}

fn build_scene() -> Result<Scene, whitted_renderer::SceneError> {
    let floor = Material::new(Color::new(0.3, 0.3, 0.3), 100.0, 1.0, [0.5, 0.2, 0.4, 0.0])?;
    let gold = Material::new(Color::new(0.8, 0.6, 0.2), 40.0, 1.0, [0.7, 0.4, 0.2, 0.0])?;
    let glass = Material::new(Color::new(0.6, 0.7, 0.8), 125.0, 1.5, [0.0, 0.5, 0.1, 0.8])?;
    let matte = Material::diffuse(Color::new(0.2, 0.3, 0.6));

    let mut builder = Scene::builder();
    builder
        .add_plane(Vec3::new(0.0, -3.0, 0.0), Vec3::Y, floor)?
        .add_sphere(Vec3::new(-3.5, -1.0, -14.0), 2.0, gold)?
        .add_sphere(Vec3::new(0.0, -1.0, -10.0), 2.0, glass)?
        .add_sphere(Vec3::new(4.0, 0.0, -18.0), 3.0, matte)?
        .add_light(Vec3::new(-20.0, 20.0, 20.0), 1.5)?
        .add_light(Vec3::new(30.0, 50.0, -25.0), 1.8)?;
    Ok(builder.build())
}
