//! Lit scene demo application
//!
//! Builds a small scene headlessly: a material registry with a few cloned
//! materials, a light registry with a sun plus a scattered ring of point
//! lights, and a handful of nodes. Each "frame" binds every node's material
//! and logs the lighting working set the draw would receive.

use rand::Rng;
use render_engine::foundation::logging;
use render_engine::prelude::*;
use serde::{Deserialize, Serialize};

/// Demo scene settings, loadable from a TOML or RON file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SceneSettings {
    /// Number of scene nodes arranged on a line
    node_count: u32,
    /// Number of point lights scattered around the origin
    point_light_count: u32,
    /// Scatter radius for the point lights
    scatter_radius: f32,
    /// Bounding radius of each point light
    light_radius: f32,
    /// Sun color
    sun_color: Color,
    /// Frames to simulate
    frames: u32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            node_count: 4,
            point_light_count: 48,
            scatter_radius: 30.0,
            light_radius: 12.0,
            sun_color: Color::rgb(1.0, 0.95, 0.9),
            frames: 3,
        }
    }
}

impl Config for SceneSettings {}

fn build_materials(materials: &mut MaterialRegistry) -> Vec<MaterialKey> {
    let hull = materials
        .create("Hull")
        .expect("empty registry cannot collide");
    if let Some(material) = materials.get_mut(hull) {
        material.diffuse = Color::rgb(0.8, 0.7, 0.5);
        material.specular_power = 32.0;
        material.set_texture(0, TextureHandle(1));
    }

    // Second create under the same name is refused and logged, not fatal
    if materials.create("Hull").is_err() {
        log::info!("duplicate material name refused as expected");
    }

    let mut keys = vec![hull];
    for _ in 0..2 {
        if let Some(clone) = materials.clone_material(hull) {
            let name = materials.get(clone).map(|m| m.name().to_string());
            log::info!("cloned hull material as {name:?}");
            keys.push(clone);
        }
    }
    keys
}

fn build_lights(lights: &mut LightRegistry, settings: &SceneSettings) {
    lights.add(Light::directional(
        Vec3::new(-0.3, -1.0, -0.5),
        settings.sun_color,
    ));
    lights.add(Light::spot(
        Vec3::new(0.0, 15.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Color::rgb(0.9, 0.9, 1.0),
        40.0,
        0.35,
        0.6,
    ));

    let mut rng = rand::thread_rng();
    for _ in 0..settings.point_light_count {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let distance = rng.gen_range(2.0..settings.scatter_radius);
        let position = Vec3::new(angle.cos() * distance, 1.0, angle.sin() * distance);
        lights.add(Light::point(
            position,
            Color::rgb(
                rng.gen_range(0.4..1.0),
                rng.gen_range(0.4..1.0),
                rng.gen_range(0.4..1.0),
            ),
            settings.light_radius,
        ));
    }
    log::info!("registered {} lights", lights.len());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default("info");

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading scene settings from {path}");
            SceneSettings::load_from_file(&path)?
        }
        None => SceneSettings::default(),
    };

    let mut materials = MaterialRegistry::new();
    let mut lights = LightRegistry::new();
    build_lights(&mut lights, &settings);
    let material_keys = build_materials(&mut materials);

    let mut camera = RenderCamera::perspective(Vec3::new(0.0, 6.0, 18.0), 60.0, 16.0 / 9.0, 0.1, 500.0);
    camera.look_at(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));

    let nodes: Vec<SceneNode> = (0..settings.node_count)
        .map(|i| {
            let mut node = SceneNode::at_position(
                format!("node-{i}"),
                Vec3::new(i as f32 * 4.0 - 6.0, 0.0, 0.0),
            );
            node.set_material(material_keys[i as usize % material_keys.len()]);
            node
        })
        .collect();

    for frame in 0..settings.frames {
        let ctx = RenderContext::with_lights(&camera, &lights);
        for node in &nodes {
            let Some(key) = node.material else { continue };
            let Some(material) = materials.get_mut(key) else {
                continue;
            };
            material.bind(&ctx, Some(node));

            let selected = lights.closest_active_lights(node.position());
            log::info!(
                "frame {frame}: node '{}' bound material '{}' with {} lights in its working set (cap {MAX_QUERY_LIGHTS})",
                node.name,
                material.name(),
                selected.len(),
            );
        }
        // Orbit the camera a little between frames
        let angle = 0.15 * (frame as f32 + 1.0);
        camera.set_position(Vec3::new(18.0 * angle.sin(), 6.0, 18.0 * angle.cos()));
    }

    log::info!(
        "done: {} materials, {} lights",
        materials.len(),
        lights.len()
    );
    Ok(())
}
