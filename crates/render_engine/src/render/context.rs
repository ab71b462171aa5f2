//! Per-frame binding context
//!
//! A [`RenderContext`] bundles the borrows a material needs while binding:
//! the active camera, and optionally the light registry for draws that want
//! a lighting working set. Registries are plain values owned by the caller;
//! nothing here is global.

use crate::render::camera::RenderCamera;
use crate::render::lighting::LightRegistry;

/// Borrowed per-frame state handed to [`crate::render::Material::bind`]
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Active camera for this frame
    pub camera: &'a RenderCamera,
    /// Light registry to query for the draw's working set, if any
    pub lights: Option<&'a LightRegistry>,
}

impl<'a> RenderContext<'a> {
    /// Context without lighting
    #[must_use]
    pub const fn new(camera: &'a RenderCamera) -> Self {
        Self {
            camera,
            lights: None,
        }
    }

    /// Context with a light registry to query during binding
    #[must_use]
    pub const fn with_lights(camera: &'a RenderCamera, lights: &'a LightRegistry) -> Self {
        Self {
            camera,
            lights: Some(lights),
        }
    }
}
