//! Named shader-backed material and its parameter binding protocol

use crate::foundation::color::Color;
use crate::foundation::math::Mat4;
use crate::render::context::RenderContext;
use crate::render::lighting::LightBlock;
use crate::render::shader::{ShaderProgram, ShaderValue, TextureHandle};
use crate::scene::SceneNode;

/// Specular power a freshly created material starts with
pub const DEFAULT_SPECULAR_POWER: f32 = 100.0;

/// A named bundle of a shader program and surface properties
///
/// Materials are created through
/// [`MaterialRegistry::create`](crate::render::MaterialRegistry::create),
/// which keeps names unique. The shader program is exclusively owned; a
/// registry clone deep-copies it.
#[derive(Debug, Clone)]
pub struct Material {
    name: String,
    id: u32,
    /// Shader program this material drives; exclusively owned
    pub shader: ShaderProgram,
    /// Ambient surface color
    pub ambient: Color,
    /// Diffuse surface color
    pub diffuse: Color,
    /// Specular highlight color
    pub specular: Color,
    /// Specular highlight exponent
    pub specular_power: f32,
}

impl Material {
    /// Default-property material; called by the registry
    pub(crate) fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            shader: ShaderProgram::basic(),
            ambient: Color::BLACK,
            diffuse: Color::WHITE,
            specular: Color::WHITE,
            specular_power: DEFAULT_SPECULAR_POWER,
        }
    }

    /// Copy of this material under a new name and id; called by the registry
    pub(crate) fn clone_with(&self, name: String, id: u32) -> Self {
        Self {
            name,
            id,
            shader: self.shader.clone(),
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            specular_power: self.specular_power,
        }
    }

    /// Registry-unique name, immutable after creation
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation-time id (monotonic, not stable across deletions)
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Bind this material's shader parameters for a draw.
    ///
    /// Walks the recognized semantics in a fixed order (`View`,
    /// `ViewProjection`, `World`, `WorldViewProjection`, `RLight`) and
    /// fills each slot the shader declares, skipping the rest. Shaders
    /// exposing any subset of the semantics work without per-shader
    /// dispatch. The light slot receives the closest-active-lights working
    /// set anchored at the node's position, or at the camera position when
    /// `node` is `None`; it is left untouched when the context carries no
    /// light registry.
    ///
    /// Never fails: missing slots are skipped, type-mismatched slots are
    /// logged and skipped.
    pub fn bind(&mut self, ctx: &RenderContext<'_>, node: Option<&SceneNode>) {
        let view = ctx.camera.view_matrix();
        let view_projection = ctx.camera.view_projection_matrix();
        let world = node.map_or_else(Mat4::identity, SceneNode::world_matrix);

        self.write_slot("View", ShaderValue::Matrix(view));
        self.write_slot("ViewProjection", ShaderValue::Matrix(view_projection));
        self.write_slot("World", ShaderValue::Matrix(world));
        self.write_slot(
            "WorldViewProjection",
            ShaderValue::Matrix(view_projection * world),
        );

        if let Some(lights) = ctx.lights {
            let anchor = node.map_or(ctx.camera.position, SceneNode::position);
            let selected = lights.closest_active_lights(anchor);
            self.write_slot("RLight", ShaderValue::Lights(LightBlock::from_lights(&selected)));
        }
    }

    /// Bind a texture to the slot addressed as `texture{layer}`.
    ///
    /// A shader without that slot leaves this a no-op, same probe-or-skip
    /// discipline as [`bind`](Self::bind).
    pub fn set_texture(&mut self, layer: u32, texture: TextureHandle) {
        let semantic = format!("texture{layer}");
        self.write_slot(&semantic, ShaderValue::Texture(texture));
    }

    fn write_slot(&mut self, semantic: &str, value: ShaderValue) {
        match self.shader.set_by_semantic(semantic, value) {
            Ok(true) => {}
            Ok(false) => {
                log::trace!("material '{}': shader declares no '{semantic}' slot", self.name);
            }
            Err(err) => log::warn!("material '{}': {err}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::camera::RenderCamera;
    use crate::render::shader::ShaderParameterKind;

    fn test_camera() -> RenderCamera {
        RenderCamera::perspective(Vec3::new(0.0, 0.0, 5.0), 45.0, 1.0, 0.1, 100.0)
    }

    #[test]
    fn new_material_has_stock_properties() {
        let material = Material::new("stock", 0);
        assert_eq!(material.ambient, Color::BLACK);
        assert_eq!(material.diffuse, Color::WHITE);
        assert_eq!(material.specular, Color::WHITE);
        assert_eq!(material.specular_power, DEFAULT_SPECULAR_POWER);
        assert_eq!(material.name(), "stock");
    }

    #[test]
    fn bind_fills_every_declared_matrix_slot() {
        let camera = test_camera();
        let ctx = RenderContext::new(&camera);
        let mut material = Material::new("full", 0);
        let node = SceneNode::at_position("node", Vec3::new(1.0, 0.0, 0.0));

        material.bind(&ctx, Some(&node));

        assert_eq!(
            material.shader.matrix_parameter("View"),
            Some(camera.view_matrix())
        );
        assert_eq!(
            material.shader.matrix_parameter("ViewProjection"),
            Some(camera.view_projection_matrix())
        );
        assert_eq!(
            material.shader.matrix_parameter("World"),
            Some(node.world_matrix())
        );
        assert_eq!(
            material.shader.matrix_parameter("WorldViewProjection"),
            Some(camera.view_projection_matrix() * node.world_matrix())
        );
    }

    #[test]
    fn bind_without_a_node_uses_the_identity_world() {
        let camera = test_camera();
        let ctx = RenderContext::new(&camera);
        let mut material = Material::new("free", 0);

        material.bind(&ctx, None);

        assert_eq!(material.shader.matrix_parameter("World"), Some(Mat4::identity()));
    }

    #[test]
    fn bind_tolerates_a_shader_with_a_single_slot() {
        let camera = test_camera();
        let ctx = RenderContext::new(&camera);
        let mut material = Material::new("sparse", 0);
        material.shader =
            ShaderProgram::new("world-only").with_parameter("World", ShaderParameterKind::Matrix);

        material.bind(&ctx, None);

        assert!(material.shader.matrix_parameter("World").is_some());
        for semantic in ["View", "ViewProjection", "WorldViewProjection", "RLight"] {
            assert!(
                material.shader.parameter_by_semantic(semantic).is_none(),
                "{semantic} should stay undeclared"
            );
        }
    }

    #[test]
    fn set_texture_on_an_absent_layer_is_a_no_op() {
        let mut material = Material::new("textured", 0);
        material.set_texture(0, TextureHandle(3));
        material.set_texture(7, TextureHandle(4));
        assert_eq!(
            material.shader.texture_parameter("texture0"),
            Some(TextureHandle(3))
        );
        assert!(material.shader.texture_parameter("texture7").is_none());
    }
}
