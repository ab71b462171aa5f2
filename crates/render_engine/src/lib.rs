//! # Render Engine
//!
//! A thin real-time 3D rendering engine core. Most of a full engine's
//! surface is a pass-through to platform primitives; what lives here is the
//! part with real invariants: named, shader-backed materials with
//! collision-safe cloning, and a spatially-aware light registry that
//! selects a bounded working set of the closest active lights per draw and
//! binds shader parameters tolerantly.
//!
//! ## Quick Start
//!
//! ```rust
//! use render_engine::prelude::*;
//!
//! let mut materials = MaterialRegistry::new();
//! let mut lights = LightRegistry::new();
//!
//! let hull = materials.create("Hull").expect("fresh registry");
//! lights.add(Light::directional(Vec3::new(-0.3, -1.0, -0.5), Color::WHITE));
//! lights.add(Light::point(Vec3::new(2.0, 3.0, 2.0), Color::rgb(1.0, 0.9, 0.7), 10.0));
//!
//! let camera = RenderCamera::default();
//! let ctx = RenderContext::with_lights(&camera, &lights);
//! let mut node = SceneNode::at_position("ship", Vec3::new(1.0, 0.0, 0.0));
//! node.set_material(hull);
//!
//! if let Some(material) = materials.get_mut(hull) {
//!     material.bind(&ctx, Some(&node));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::config::{Config, ConfigError};
    pub use crate::foundation::{
        color::Color,
        math::{Mat4, Transform, Vec3},
    };
    pub use crate::render::{
        Light, LightKey, LightRegistry, LightType, Material, MaterialError, MaterialKey,
        MaterialRegistry, RenderCamera, RenderContext, ShaderProgram, TextureHandle,
        MAX_QUERY_LIGHTS,
    };
    pub use crate::scene::SceneNode;
}
