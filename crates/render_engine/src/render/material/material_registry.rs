//! Name-keyed material registry
//!
//! Owns every material in a running engine instance and keeps names unique.
//! Callers hold [`MaterialKey`] handles; the registry retains ownership of
//! the records. Name collisions and stale-key operations are reported as
//! values and logged, never raised.

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use super::material::Material;

new_key_type! {
    /// Stable identity of a material within a [`MaterialRegistry`]
    pub struct MaterialKey;
}

/// Material registry errors
#[derive(thiserror::Error, Debug)]
pub enum MaterialError {
    /// A material with the requested name is already registered
    #[error("material name '{0}' is already taken")]
    NameTaken(String),
}

/// Owns all materials, keyed by unique name
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: SlotMap<MaterialKey, Material>,
    names: HashMap<String, MaterialKey>,
}

impl MaterialRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new material with default properties under `name`.
    ///
    /// The material starts with an opaque black ambient color, opaque white
    /// diffuse and specular colors, the stock specular power, and a freshly
    /// constructed shader program. A taken name is a reported, recoverable
    /// condition: the registry is left untouched and the collision is
    /// logged.
    ///
    /// # Errors
    ///
    /// [`MaterialError::NameTaken`] when `name` is already registered.
    pub fn create(&mut self, name: &str) -> Result<MaterialKey, MaterialError> {
        if self.names.contains_key(name) {
            log::warn!("material registry refused to create '{name}': name already taken");
            return Err(MaterialError::NameTaken(name.to_string()));
        }
        let id = self.materials.len() as u32;
        let key = self.materials.insert(Material::new(name, id));
        self.names.insert(name.to_string(), key);
        log::debug!("created material '{name}' (id {id})");
        Ok(key)
    }

    /// Clone the material behind `key` under a collision-free name.
    ///
    /// The generated name is the source name plus the lowest positive
    /// integer suffix not currently registered, probed from 1 upward. The
    /// clone deep-copies the shader program and copies every surface
    /// property; afterwards source and clone are independently mutable.
    ///
    /// Returns `None` (logged) when `key` no longer resolves.
    pub fn clone_material(&mut self, key: MaterialKey) -> Option<MaterialKey> {
        let Some(source) = self.materials.get(key) else {
            log::debug!("clone of unknown material key ignored");
            return None;
        };
        let base = source.name().to_string();
        let name = next_free_name(&base, &self.names);
        let id = self.materials.len() as u32;
        let clone = source.clone_with(name.clone(), id);
        let new_key = self.materials.insert(clone);
        self.names.insert(name.clone(), new_key);
        log::debug!("cloned material '{base}' as '{name}' (id {id})");
        Some(new_key)
    }

    /// Remove the material behind `key`; returns whether removal occurred.
    ///
    /// Other materials and their keys stay valid.
    pub fn delete(&mut self, key: MaterialKey) -> bool {
        match self.materials.remove(key) {
            Some(material) => {
                self.names.remove(material.name());
                log::debug!("deleted material '{}'", material.name());
                true
            }
            None => {
                log::debug!("delete of unknown material key ignored");
                false
            }
        }
    }

    /// Look up a material key by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<MaterialKey> {
        self.names.get(name).copied()
    }

    /// Get a material by key
    #[must_use]
    pub fn get(&self, key: MaterialKey) -> Option<&Material> {
        self.materials.get(key)
    }

    /// Get a mutable material by key
    pub fn get_mut(&mut self, key: MaterialKey) -> Option<&mut Material> {
        self.materials.get_mut(key)
    }

    /// Number of registered materials
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the registry holds no materials
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// Lowest free `{base}{n}` name, probing n = 1, 2, ... against the taken set
fn next_free_name(base: &str, taken: &HashMap<String, MaterialKey>) -> String {
    let mut n = 1u32;
    loop {
        let candidate = format!("{base}{n}");
        if !taken.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
