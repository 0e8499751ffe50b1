//! Simple ray tracer example.
//!
//! Renders a Cornell-style room with a mirror, a glass ball and a diffuse
//! ball, then saves it as a PNG.
//!
//! ```text
//! RUST_LOG=debug cargo run -p prism_renderer --example simple_render -- output.png 2
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use prism_renderer::{
    Color, DVec3, ImageBuffer, Material, Plane, PointLight, Scene, SceneOptions, Sphere, Triangle,
};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let filename = args.next().unwrap_or_else(|| "output.png".to_string());
    let aa_multiplier = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid anti-aliasing multiplier: {arg}"))?,
        None => 1,
    };

    let scene = build_scene(SceneOptions::new(aa_multiplier)?);

    let mut image = ImageBuffer::new(WIDTH, HEIGHT);
    scene.render(&mut image);

    image
        .to_rgb_image()
        .save(&filename)
        .with_context(|| format!("failed to save {filename}"))?;
    log::info!("Saved to {}", filename);

    Ok(())
}

fn build_scene(options: SceneOptions) -> Scene {
    let white = Arc::new(Material::diffuse(Color::new(0.8, 0.8, 0.8)));
    let red = Arc::new(Material::diffuse(Color::new(0.8, 0.1, 0.1)));
    let green = Arc::new(Material::diffuse(Color::new(0.1, 0.8, 0.1)));
    let orange = Arc::new(Material::diffuse(Color::new(0.9, 0.5, 0.1)));
    let mirror = Arc::new(Material::reflective(Color::ONE));
    let glass = Arc::new(Material::refractive(Color::ONE, 1.4));

    let mut scene = Scene::new(options);

    // Room
    scene.add_entity(Plane::new(DVec3::new(0.0, -1.0, 0.0), DVec3::Y, white.clone()));
    scene.add_entity(Plane::new(DVec3::new(0.0, 1.5, 0.0), -DVec3::Y, white.clone()));
    scene.add_entity(Plane::new(DVec3::new(0.0, 0.0, 5.0), -DVec3::Z, white));
    scene.add_entity(Plane::new(DVec3::new(-2.0, 0.0, 0.0), DVec3::X, red));
    scene.add_entity(Plane::new(DVec3::new(2.0, 0.0, 0.0), -DVec3::X, green));

    // Mirror panel leaning on the back wall
    scene.add_entity(Triangle::new(
        DVec3::new(-1.5, -1.0, 4.8),
        DVec3::new(-0.5, 1.2, 4.9),
        DVec3::new(0.5, -1.0, 4.8),
        mirror,
    ));

    scene.add_entity(Sphere::new(DVec3::new(0.7, -0.4, 3.2), 0.6, glass));
    scene.add_entity(Sphere::new(DVec3::new(-0.9, -0.6, 3.8), 0.4, orange));

    scene.add_point_light(PointLight::new(DVec3::new(0.0, 1.2, 2.5), Color::splat(0.9)));
    scene.add_point_light(PointLight::new(DVec3::new(-1.0, 0.5, 0.5), Color::splat(0.3)));

    scene
}
