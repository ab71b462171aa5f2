//! Scene management
//!
//! The renderable-node abstraction consumed by the material binding
//! protocol: a node exposes a world transform and a position, and holds
//! its material by handle while the registry keeps ownership.

mod node;

pub use node::SceneNode;
