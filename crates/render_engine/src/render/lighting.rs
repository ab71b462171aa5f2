//! Light records, the light registry, and closest-active-light selection
//!
//! Lights are pure data owned by a [`LightRegistry`]. The registry answers
//! one spatial query, [`LightRegistry::closest_active_lights`], which builds
//! the bounded working set of lights a shader receives for a draw at a given
//! world position. Selection policy depends on the light type: point lights
//! are sphere-culled and compete for capacity, directional and spot lights
//! are always part of the working set.

use slotmap::{new_key_type, SlotMap};

use crate::foundation::color::Color;
use crate::foundation::math::Vec3;

/// Capacity of the working set returned by a closest-lights query.
///
/// Point lights never occupy more than this many entries; directional and
/// spot lights are exempt from the bound and can exceed it in degenerate
/// scenes.
pub const MAX_QUERY_LIGHTS: usize = 32;

new_key_type! {
    /// Stable identity of a light within a [`LightRegistry`]
    pub struct LightKey;
}

/// Light classification, controls culling and capacity exemption during
/// selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    /// Global light with parallel rays; never culled, never evicted
    Directional,
    /// Omnidirectional light with a bounding radius; sphere-culled and
    /// capacity-bounded
    Point,
    /// Cone light; treated like a directional light by the selection query
    Spot,
}

/// Light source record, pure data
#[derive(Debug, Clone)]
pub struct Light {
    /// The type of light
    pub light_type: LightType,
    /// Position in world space
    pub position: Vec3,
    /// Direction for directional and spot lights
    pub direction: Vec3,
    /// Light color
    pub color: Color,
    /// Bounding radius for point lights, in world units
    pub radius: f32,
    /// Inner cone angle for spot lights, in radians
    pub theta: f32,
    /// Outer cone angle for spot lights, in radians
    pub phi: f32,
    /// Whether the light participates in selection
    pub enabled: bool,
}

impl Light {
    /// Create a directional light
    #[must_use]
    pub fn directional(direction: Vec3, color: Color) -> Self {
        Self {
            light_type: LightType::Directional,
            position: Vec3::zeros(),
            direction: direction.normalize(),
            color,
            radius: 0.0,
            theta: 0.0,
            phi: 0.0,
            enabled: true,
        }
    }

    /// Create a point light with a bounding radius
    #[must_use]
    pub fn point(position: Vec3, color: Color, radius: f32) -> Self {
        Self {
            light_type: LightType::Point,
            position,
            direction: Vec3::zeros(),
            color,
            radius,
            theta: 0.0,
            phi: 0.0,
            enabled: true,
        }
    }

    /// Create a spot light with inner and outer cone angles in radians
    #[must_use]
    pub fn spot(
        position: Vec3,
        direction: Vec3,
        color: Color,
        radius: f32,
        theta: f32,
        phi: f32,
    ) -> Self {
        Self {
            light_type: LightType::Spot,
            position,
            direction: direction.normalize(),
            color,
            radius,
            theta,
            phi,
            enabled: true,
        }
    }
}

/// GPU-layout light record packed for a shader's light array slot
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedLight {
    /// Position and bounding radius `[x, y, z, radius]`
    pub position: [f32; 4],
    /// Direction and light type tag `[x, y, z, type]`
    pub direction: [f32; 4],
    /// RGBA color
    pub color: [f32; 4],
    /// Spot cone angles `[theta, phi, 0, 0]`
    pub cone: [f32; 4],
}

impl PackedLight {
    fn from_light(light: &Light) -> Self {
        Self {
            position: [
                light.position.x,
                light.position.y,
                light.position.z,
                light.radius,
            ],
            direction: [
                light.direction.x,
                light.direction.y,
                light.direction.z,
                light.light_type as u32 as f32,
            ],
            color: light.color.to_array(),
            cone: [light.theta, light.phi, 0.0, 0.0],
        }
    }
}

/// Fixed-capacity light array written into a shader's `RLight` slot
///
/// Holds up to [`MAX_QUERY_LIGHTS`] packed records plus an active count.
/// A selection result longer than the capacity is truncated when packed.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightBlock {
    /// Packed light records; entries past `count` are zeroed
    pub lights: [PackedLight; MAX_QUERY_LIGHTS],
    /// Number of active entries
    pub count: u32,
    /// Padding for std140 alignment
    pub _padding: [u32; 3],
}

impl LightBlock {
    /// Pack a selection result, truncating past the fixed capacity
    #[must_use]
    pub fn from_lights(selected: &[&Light]) -> Self {
        let mut block = Self::empty();
        for (slot, light) in block.lights.iter_mut().zip(selected) {
            *slot = PackedLight::from_light(light);
        }
        block.count = selected.len().min(MAX_QUERY_LIGHTS) as u32;
        block
    }

    /// A block with no active lights
    #[must_use]
    pub fn empty() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

impl Default for LightBlock {
    fn default() -> Self {
        Self::empty()
    }
}

/// Distance-keyed entry in the working set under construction
struct Candidate<'a> {
    distance: f32,
    order: usize,
    light: &'a Light,
}

/// Owns every light in a scene and answers spatial selection queries
#[derive(Debug, Default)]
pub struct LightRegistry {
    lights: SlotMap<LightKey, Light>,
}

impl LightRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light, returning its key
    pub fn add(&mut self, light: Light) -> LightKey {
        let key = self.lights.insert(light);
        log::debug!("registered light {key:?} ({} total)", self.lights.len());
        key
    }

    /// Remove a light by key; returns whether removal occurred
    pub fn remove(&mut self, key: LightKey) -> bool {
        if self.lights.remove(key).is_some() {
            true
        } else {
            log::debug!("remove of unknown light {key:?} ignored");
            false
        }
    }

    /// Get a light by key
    #[must_use]
    pub fn get(&self, key: LightKey) -> Option<&Light> {
        self.lights.get(key)
    }

    /// Get a mutable light by key
    pub fn get_mut(&mut self, key: LightKey) -> Option<&mut Light> {
        self.lights.get_mut(key)
    }

    /// Number of registered lights
    #[must_use]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether the registry holds no lights
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Iterate over all lights with their keys
    pub fn iter(&self) -> impl Iterator<Item = (LightKey, &Light)> {
        self.lights.iter()
    }

    /// Select the working set of lights for a draw anchored at `query`,
    /// ordered by ascending distance.
    ///
    /// Disabled lights are skipped. Directional and spot lights always
    /// enter the set. A point light enters only if its bounding sphere
    /// intersects a unit sphere at the query point; once the set holds
    /// [`MAX_QUERY_LIGHTS`] entries, an incoming point light replaces the
    /// farthest point candidate when strictly closer and is discarded
    /// otherwise. Exact distance ties keep both lights, ordered by the
    /// registry's iteration order.
    ///
    /// The query is read-only and runs in O(lights × capacity).
    #[must_use]
    pub fn closest_active_lights(&self, query: Vec3) -> Vec<&Light> {
        let mut candidates: Vec<Candidate<'_>> = Vec::with_capacity(MAX_QUERY_LIGHTS);

        for (order, (_, light)) in self.lights.iter().enumerate() {
            if !light.enabled {
                continue;
            }
            let distance = (light.position - query).magnitude();
            match light.light_type {
                LightType::Directional | LightType::Spot => {
                    candidates.push(Candidate {
                        distance,
                        order,
                        light,
                    });
                }
                LightType::Point => {
                    // Bounding sphere against a unit sphere at the query point
                    if distance > light.radius + 1.0 {
                        continue;
                    }
                    if candidates.len() >= MAX_QUERY_LIGHTS {
                        let farthest = candidates
                            .iter()
                            .enumerate()
                            .filter(|(_, c)| c.light.light_type == LightType::Point)
                            .max_by(|(_, a), (_, b)| a.distance.total_cmp(&b.distance));
                        match farthest {
                            Some((index, evictee)) if distance < evictee.distance => {
                                candidates.swap_remove(index);
                            }
                            _ => continue,
                        }
                    }
                    candidates.push(Candidate {
                        distance,
                        order,
                        light,
                    });
                }
            }
        }

        candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.order.cmp(&b.order)));
        candidates.into_iter().map(|c| c.light).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_by_distance(lights: &[&Light], query: Vec3) {
        let distances: Vec<f32> = lights
            .iter()
            .map(|l| (l.position - query).magnitude())
            .collect();
        assert!(
            distances.windows(2).all(|w| w[0] <= w[1]),
            "selection not sorted: {distances:?}"
        );
    }

    #[test]
    fn empty_registry_selects_nothing() {
        let registry = LightRegistry::new();
        assert!(registry.closest_active_lights(Vec3::zeros()).is_empty());
    }

    #[test]
    fn disabled_lights_are_skipped() {
        let mut registry = LightRegistry::new();
        let key = registry.add(Light::point(Vec3::zeros(), Color::WHITE, 10.0));
        registry.get_mut(key).unwrap().enabled = false;
        assert!(registry.closest_active_lights(Vec3::zeros()).is_empty());
    }

    #[test]
    fn point_light_outside_its_radius_is_culled() {
        // Distance 100 against radius 5 + unit sphere: no intersection
        let mut registry = LightRegistry::new();
        registry.add(Light::directional(Vec3::new(0.0, -1.0, 0.0), Color::WHITE));
        registry.add(Light::point(Vec3::new(100.0, 0.0, 0.0), Color::WHITE, 5.0));

        let selected = registry.closest_active_lights(Vec3::zeros());
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].light_type, LightType::Directional);
    }

    #[test]
    fn point_light_touching_the_unit_sphere_is_kept() {
        let mut registry = LightRegistry::new();
        registry.add(Light::point(Vec3::new(5.0, 0.0, 0.0), Color::WHITE, 4.0));
        assert_eq!(registry.closest_active_lights(Vec3::zeros()).len(), 1);
    }

    #[test]
    fn selection_keeps_the_closest_point_lights_under_capacity_pressure() {
        // 40 in-range point lights at distances 1..=40: the 32 closest stay
        let mut registry = LightRegistry::new();
        for i in 1..=40 {
            registry.add(Light::point(
                Vec3::new(i as f32, 0.0, 0.0),
                Color::WHITE,
                100.0,
            ));
        }

        let selected = registry.closest_active_lights(Vec3::zeros());
        assert_eq!(selected.len(), MAX_QUERY_LIGHTS);
        assert_sorted_by_distance(&selected, Vec3::zeros());
        for (i, light) in selected.iter().enumerate() {
            assert!(
                ((light.position.x) - (i as f32 + 1.0)).abs() < f32::EPSILON,
                "expected distance {} at slot {i}, got {}",
                i + 1,
                light.position.x
            );
        }
    }

    #[test]
    fn eviction_is_independent_of_registration_order() {
        // Farthest lights registered first still lose to closer arrivals
        let mut registry = LightRegistry::new();
        for i in (1..=40).rev() {
            registry.add(Light::point(
                Vec3::new(i as f32, 0.0, 0.0),
                Color::WHITE,
                100.0,
            ));
        }

        let selected = registry.closest_active_lights(Vec3::zeros());
        assert_eq!(selected.len(), MAX_QUERY_LIGHTS);
        assert!(selected
            .iter()
            .all(|l| l.position.x <= MAX_QUERY_LIGHTS as f32));
    }

    #[test]
    fn directional_and_spot_lights_survive_capacity_pressure() {
        let mut registry = LightRegistry::new();
        for i in 1..=40 {
            registry.add(Light::point(
                Vec3::new(i as f32, 0.0, 0.0),
                Color::WHITE,
                100.0,
            ));
        }
        registry.add(Light::directional(
            Vec3::new(0.0, -1.0, 0.0),
            Color::rgb(1.0, 0.9, 0.8),
        ));
        registry.add(Light::spot(
            Vec3::new(5000.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Color::WHITE,
            10.0,
            0.3,
            0.6,
        ));

        let selected = registry.closest_active_lights(Vec3::zeros());
        assert!(selected
            .iter()
            .any(|l| l.light_type == LightType::Directional));
        assert!(selected.iter().any(|l| l.light_type == LightType::Spot));
        let point_count = selected
            .iter()
            .filter(|l| l.light_type == LightType::Point)
            .count();
        assert!(point_count <= MAX_QUERY_LIGHTS);
        assert_sorted_by_distance(&selected, Vec3::zeros());
    }

    #[test]
    fn equidistant_lights_both_survive_in_registration_order() {
        let mut registry = LightRegistry::new();
        let first = registry.add(Light::point(Vec3::new(0.0, 3.0, 0.0), Color::WHITE, 10.0));
        let second = registry.add(Light::point(Vec3::new(3.0, 0.0, 0.0), Color::BLACK, 10.0));

        let selected = registry.closest_active_lights(Vec3::zeros());
        assert_eq!(selected.len(), 2);
        assert_eq!(
            selected[0].color,
            registry.get(first).unwrap().color,
            "first registered light should sort first on a tie"
        );
        assert_eq!(selected[1].color, registry.get(second).unwrap().color);
    }

    #[test]
    fn remove_reports_misses() {
        let mut registry = LightRegistry::new();
        let key = registry.add(Light::point(Vec3::zeros(), Color::WHITE, 1.0));
        assert!(registry.remove(key));
        assert!(!registry.remove(key));
        assert!(registry.is_empty());
    }

    #[test]
    fn light_block_packs_count_and_truncates() {
        let light = Light::point(Vec3::new(1.0, 2.0, 3.0), Color::rgb(0.5, 0.5, 0.5), 7.0);
        let refs: Vec<&Light> = std::iter::repeat(&light).take(40).collect();
        let block = LightBlock::from_lights(&refs);
        assert_eq!(block.count as usize, MAX_QUERY_LIGHTS);
        assert_eq!(block.lights[0].position, [1.0, 2.0, 3.0, 7.0]);
        assert_eq!(block.lights[0].direction[3], LightType::Point as u32 as f32);

        let empty = LightBlock::from_lights(&[]);
        assert_eq!(empty.count, 0);
    }
}
