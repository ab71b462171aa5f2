//! Shader program abstraction with semantic-addressed parameter slots
//!
//! A [`ShaderProgram`] stands in for a compiled platform shader: a set of
//! named parameter slots, each addressed by a semantic tag such as `"World"`
//! or `"texture0"`. Callers probe for a slot before writing it; a shader
//! that does not declare a semantic simply does not receive that value.
//! Looking up a slot that exists but holds a different type fails
//! distinctly, so tolerant callers can log it instead of silently writing
//! garbage.

use crate::foundation::color::Color;
use crate::foundation::math::Mat4;
use crate::render::lighting::LightBlock;

/// Opaque handle to a platform texture resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Declared type of a shader parameter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderParameterKind {
    /// 4x4 matrix slot
    Matrix,
    /// RGBA color slot
    Color,
    /// Single float slot
    Scalar,
    /// Texture sampler slot
    Texture,
    /// Packed light array slot
    Lights,
}

/// A value writable into a parameter slot
#[derive(Debug, Clone)]
pub enum ShaderValue {
    /// 4x4 matrix
    Matrix(Mat4),
    /// RGBA color
    Color(Color),
    /// Single float
    Scalar(f32),
    /// Texture handle
    Texture(TextureHandle),
    /// Packed light array
    Lights(LightBlock),
}

impl ShaderValue {
    /// The slot kind this value fits
    #[must_use]
    pub const fn kind(&self) -> ShaderParameterKind {
        match self {
            Self::Matrix(_) => ShaderParameterKind::Matrix,
            Self::Color(_) => ShaderParameterKind::Color,
            Self::Scalar(_) => ShaderParameterKind::Scalar,
            Self::Texture(_) => ShaderParameterKind::Texture,
            Self::Lights(_) => ShaderParameterKind::Lights,
        }
    }
}

/// A single named parameter slot of a shader program
#[derive(Debug, Clone)]
pub struct ShaderParameter {
    semantic: String,
    kind: ShaderParameterKind,
    value: Option<ShaderValue>,
}

impl ShaderParameter {
    /// Semantic tag this slot is addressed by
    #[must_use]
    pub fn semantic(&self) -> &str {
        &self.semantic
    }

    /// Declared slot type
    #[must_use]
    pub const fn kind(&self) -> ShaderParameterKind {
        self.kind
    }

    /// Last value written into the slot, if any
    #[must_use]
    pub const fn value(&self) -> Option<&ShaderValue> {
        self.value.as_ref()
    }
}

/// Shader parameter access errors
#[derive(thiserror::Error, Debug)]
pub enum ShaderError {
    /// The slot exists but was declared with a different type
    #[error("shader parameter '{semantic}' is declared as {declared:?}, not {requested:?}")]
    TypeMismatch {
        /// Semantic tag of the offending slot
        semantic: String,
        /// Type the shader declares for the slot
        declared: ShaderParameterKind,
        /// Type of the value the caller tried to write
        requested: ShaderParameterKind,
    },
}

/// Compiled shader program stand-in with semantic-addressed slots
///
/// Cloning performs a deep copy of the slot table and any written values,
/// which is what material cloning relies on.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    name: String,
    parameters: Vec<ShaderParameter>,
}

impl ShaderProgram {
    /// Create a program with no declared parameters
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Declare a parameter slot (builder style)
    #[must_use]
    pub fn with_parameter(mut self, semantic: impl Into<String>, kind: ShaderParameterKind) -> Self {
        self.parameters.push(ShaderParameter {
            semantic: semantic.into(),
            kind,
            value: None,
        });
        self
    }

    /// The stock program every new material starts with
    ///
    /// Declares the full recognized slot set plus the base texture layer.
    #[must_use]
    pub fn basic() -> Self {
        Self::new("basic")
            .with_parameter("View", ShaderParameterKind::Matrix)
            .with_parameter("ViewProjection", ShaderParameterKind::Matrix)
            .with_parameter("World", ShaderParameterKind::Matrix)
            .with_parameter("WorldViewProjection", ShaderParameterKind::Matrix)
            .with_parameter("RLight", ShaderParameterKind::Lights)
            .with_parameter("texture0", ShaderParameterKind::Texture)
    }

    /// Program name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Probe for a slot by semantic tag; `None` when the shader does not
    /// declare it
    #[must_use]
    pub fn parameter_by_semantic(&self, semantic: &str) -> Option<&ShaderParameter> {
        self.parameters.iter().find(|p| p.semantic == semantic)
    }

    /// Whether the shader declares a semantic
    #[must_use]
    pub fn declares(&self, semantic: &str) -> bool {
        self.parameter_by_semantic(semantic).is_some()
    }

    /// Write a value into the slot with the given semantic.
    ///
    /// Returns `Ok(true)` when written, `Ok(false)` when the shader does
    /// not declare the semantic, and [`ShaderError::TypeMismatch`] when the
    /// slot exists with a different declared type.
    pub fn set_by_semantic(
        &mut self,
        semantic: &str,
        value: ShaderValue,
    ) -> Result<bool, ShaderError> {
        let Some(parameter) = self.parameters.iter_mut().find(|p| p.semantic == semantic) else {
            return Ok(false);
        };
        if parameter.kind != value.kind() {
            return Err(ShaderError::TypeMismatch {
                semantic: semantic.to_string(),
                declared: parameter.kind,
                requested: value.kind(),
            });
        }
        parameter.value = Some(value);
        Ok(true)
    }

    /// Read back a matrix slot, if declared and written
    #[must_use]
    pub fn matrix_parameter(&self, semantic: &str) -> Option<Mat4> {
        match self.parameter_by_semantic(semantic)?.value()? {
            ShaderValue::Matrix(matrix) => Some(*matrix),
            _ => None,
        }
    }

    /// Read back a color slot, if declared and written
    #[must_use]
    pub fn color_parameter(&self, semantic: &str) -> Option<Color> {
        match self.parameter_by_semantic(semantic)?.value()? {
            ShaderValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Read back a scalar slot, if declared and written
    #[must_use]
    pub fn scalar_parameter(&self, semantic: &str) -> Option<f32> {
        match self.parameter_by_semantic(semantic)?.value()? {
            ShaderValue::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    /// Read back a texture slot, if declared and written
    #[must_use]
    pub fn texture_parameter(&self, semantic: &str) -> Option<TextureHandle> {
        match self.parameter_by_semantic(semantic)?.value()? {
            ShaderValue::Texture(texture) => Some(*texture),
            _ => None,
        }
    }

    /// Read back a light array slot, if declared and written
    #[must_use]
    pub fn lights_parameter(&self, semantic: &str) -> Option<&LightBlock> {
        match self.parameter_by_semantic(semantic)?.value()? {
            ShaderValue::Lights(block) => Some(block),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_distinguishes_declared_from_missing() {
        let shader = ShaderProgram::new("probe").with_parameter("World", ShaderParameterKind::Matrix);
        assert!(shader.declares("World"));
        assert!(!shader.declares("View"));
        assert!(shader.parameter_by_semantic("View").is_none());
    }

    #[test]
    fn setting_a_missing_slot_is_a_skip_not_an_error() {
        let mut shader = ShaderProgram::new("sparse");
        let written = shader
            .set_by_semantic("World", ShaderValue::Matrix(Mat4::identity()))
            .unwrap();
        assert!(!written);
    }

    #[test]
    fn setting_a_wrongly_typed_slot_fails_distinctly() {
        let mut shader =
            ShaderProgram::new("typed").with_parameter("World", ShaderParameterKind::Matrix);
        let result = shader.set_by_semantic("World", ShaderValue::Scalar(1.0));
        assert!(matches!(result, Err(ShaderError::TypeMismatch { .. })));
        // The slot stays unwritten after the mismatch
        assert!(shader.parameter_by_semantic("World").unwrap().value().is_none());
    }

    #[test]
    fn written_values_read_back() {
        let mut shader = ShaderProgram::new("readback")
            .with_parameter("World", ShaderParameterKind::Matrix)
            .with_parameter("texture0", ShaderParameterKind::Texture);
        shader
            .set_by_semantic("World", ShaderValue::Matrix(Mat4::identity()))
            .unwrap();
        shader
            .set_by_semantic("texture0", ShaderValue::Texture(TextureHandle(7)))
            .unwrap();
        assert_eq!(shader.matrix_parameter("World"), Some(Mat4::identity()));
        assert_eq!(shader.texture_parameter("texture0"), Some(TextureHandle(7)));
        assert_eq!(shader.scalar_parameter("World"), None);
    }

    #[test]
    fn basic_program_declares_the_recognized_slot_set() {
        let shader = ShaderProgram::basic();
        for semantic in ["View", "ViewProjection", "World", "WorldViewProjection", "RLight"] {
            assert!(shader.declares(semantic), "missing {semantic}");
        }
        assert!(shader.declares("texture0"));
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut original = ShaderProgram::basic();
        let mut copy = original.clone();
        copy.set_by_semantic("World", ShaderValue::Matrix(Mat4::identity()))
            .unwrap();
        assert!(original.matrix_parameter("World").is_none());
        original
            .set_by_semantic("World", ShaderValue::Matrix(Mat4::identity() * 2.0))
            .unwrap();
        assert_ne!(copy.matrix_parameter("World"), original.matrix_parameter("World"));
    }
}
