//! lumen - render a scene to PNG.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use lum_core::{load_scene, Camera, Material, Scene};
use lum_math::{Color, Vec3};
use lum_renderer::{AmbientFill, RayonBackend, RenderConfig, Renderer, SphereTerm};

use crate::cli::Args;

/// Two diffuse spheres and a small emitter over a white floor.
fn demo_scene(width: u32, height: u32) -> Scene {
    let camera = Camera::new(Vec3::new(0.0, 0.3, 1.5), Vec3::NEG_Z, Vec3::Y, width, height);
    let mut scene = Scene::new(camera);

    let red_stone = scene.add_material(Material::diffuse(Color::new(1.0, 0.5, 0.0)));
    let blue_stone = scene.add_material(Material::diffuse(Color::new(0.01, 0.5, 1.0)));
    let emitter = scene.add_material(Material::emitter(Color::new(8.0, 8.0, 4.0)));
    let white = scene.add_material(Material::diffuse(Color::ONE));

    scene.add_sphere(red_stone, Vec3::new(-0.8, 0.5, 0.0), 0.2);
    scene.add_sphere(emitter, Vec3::new(0.0, 0.2, 0.4), 0.02);
    scene.add_sphere(blue_stone, Vec3::new(0.8, 0.5, 0.0), 0.2);

    // Floor
    scene.add_triangle(
        white,
        [
            Vec3::new(-4.0, 0.0, 2.0),
            Vec3::new(4.0, 0.0, 2.0),
            Vec3::new(0.0, 0.0, -4.0),
        ],
        None,
    );

    scene
}

fn render_config(args: &Args) -> RenderConfig {
    let mut config = RenderConfig::default()
        .with_samples(args.samples)
        .with_max_depth(args.max_depth)
        .with_lanes(args.lanes);
    if args.no_ambient_fill {
        config = config.with_ambient_fill(AmbientFill::DISABLED);
    }
    if args.squared_radius {
        config = config.with_sphere_term(SphereTerm::RadiusSquared);
    }
    config
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting lumen");

    let scene = match &args.scene {
        Some(path) => load_scene(path).with_context(|| format!("Failed to load scene {}", path))?,
        None => demo_scene(args.width, args.height),
    };

    let mut backend = RayonBackend::new();
    if let Some(threads) = args.threads {
        backend = backend.with_threads(threads);
    }

    let image = Renderer::new(render_config(&args))
        .with_backend(backend)
        .render(&scene)
        .context("Render failed")?;

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_is_valid() {
        let scene = demo_scene(30, 30);
        assert!(scene.validate().is_ok());
        assert_eq!(scene.spheres().len(), 3);
        assert_eq!(scene.triangles().len(), 1);
        assert_eq!(scene.materials().len(), 4);
    }

    #[test]
    fn test_render_config_from_args() {
        let args = Args::parse_from(["lumen", "--no-ambient-fill", "--squared-radius", "-s", "7"]);
        let config = render_config(&args);
        assert_eq!(config.samples_per_pixel, 7);
        assert_eq!(config.ambient_fill, AmbientFill::DISABLED);
        assert_eq!(config.sphere_term, SphereTerm::RadiusSquared);
    }
}
