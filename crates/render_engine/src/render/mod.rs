//! Rendering core: shaders, materials, lighting, and the camera
//!
//! The heart of this module is the material/light binding protocol:
//! materials fill whatever parameter slots their shader declares
//! (capability-probed binding), and the light registry supplies a bounded
//! working set of the closest active lights per draw.

pub mod camera;
pub mod context;
pub mod lighting;
pub mod material;
pub mod shader;

// Re-export commonly used types
pub use camera::RenderCamera;
pub use context::RenderContext;
pub use lighting::{Light, LightBlock, LightKey, LightRegistry, LightType, MAX_QUERY_LIGHTS};
pub use material::{Material, MaterialError, MaterialKey, MaterialRegistry};
pub use shader::{
    ShaderError, ShaderParameter, ShaderParameterKind, ShaderProgram, ShaderValue, TextureHandle,
};
