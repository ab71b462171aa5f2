//! Renderable scene node

use crate::foundation::math::{Mat4, Transform, Vec3};
use crate::render::material::MaterialKey;

/// A renderable node: a transform in world space plus an optional material
///
/// The material field is a copied handle; the
/// [`MaterialRegistry`](crate::render::MaterialRegistry) owns the material
/// itself.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Node name for diagnostics
    pub name: String,
    /// Position, rotation, and scale in world space
    pub transform: Transform,
    /// Handle of the material this node draws with, if any
    pub material: Option<MaterialKey>,
}

impl SceneNode {
    /// Create a node at the origin with no material
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            material: None,
        }
    }

    /// Create a node at a world position
    #[must_use]
    pub fn at_position(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            transform: Transform::from_position(position),
            material: None,
        }
    }

    /// Assign the material this node draws with
    pub fn set_material(&mut self, material: MaterialKey) {
        self.material = Some(material);
    }

    /// World transform matrix
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    /// World position
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_exposes_its_transform_position() {
        let node = SceneNode::at_position("probe", Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(node.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            node.world_matrix(),
            Transform::from_position(Vec3::new(1.0, 2.0, 3.0)).to_matrix()
        );
    }

    #[test]
    fn new_node_has_no_material() {
        let node = SceneNode::new("bare");
        assert!(node.material.is_none());
    }
}
