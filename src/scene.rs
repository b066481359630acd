//! Scene graph of renderable spheres.
//!
//! Particles do not own GPU resources. Each one holds a [`MeshHandle`] into
//! the [`Scene`], and the renderer draws whatever the scene contains at the
//! end of a frame.
//!
//! Removal is idempotent: removing a handle that is already gone is a no-op
//! and reports `false`.

use glam::Vec3;
use std::collections::HashMap;

/// Opaque reference to a sphere in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(u64);

/// A single sphere instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// World-space centre.
    pub position: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// RGB colour (sRGB, 0.0-1.0).
    pub color: Vec3,
    /// Opacity (0.0 transparent, 1.0 opaque).
    pub opacity: f32,
}

/// Collection of live spheres keyed by handle.
#[derive(Debug, Default)]
pub struct Scene {
    next_id: u64,
    meshes: HashMap<MeshHandle, Sphere>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sphere and return its handle. Handles are never reused.
    pub fn add(&mut self, sphere: Sphere) -> MeshHandle {
        let handle = MeshHandle(self.next_id);
        self.next_id += 1;
        self.meshes.insert(handle, sphere);
        handle
    }

    /// Remove a sphere. Returns `false` if the handle was not present.
    pub fn remove(&mut self, handle: MeshHandle) -> bool {
        self.meshes.remove(&handle).is_some()
    }

    /// Move a sphere and change its opacity.
    ///
    /// Returns `false` if the handle was not present.
    pub fn set_transform(&mut self, handle: MeshHandle, position: Vec3, opacity: f32) -> bool {
        match self.meshes.get_mut(&handle) {
            Some(sphere) => {
                sphere.position = position;
                sphere.opacity = opacity;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn get(&self, handle: MeshHandle) -> Option<&Sphere> {
        self.meshes.get(&handle)
    }

    #[inline]
    pub fn contains(&self, handle: MeshHandle) -> bool {
        self.meshes.contains_key(&handle)
    }

    /// Number of spheres currently in the scene.
    #[inline]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Iterate over all spheres in unspecified order.
    pub fn spheres(&self) -> impl Iterator<Item = &Sphere> + '_ {
        self.meshes.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere() -> Sphere {
        Sphere {
            position: Vec3::ZERO,
            radius: 0.3,
            color: Vec3::ONE,
            opacity: 1.0,
        }
    }

    #[test]
    fn test_add_and_remove() {
        let mut scene = Scene::new();
        let a = scene.add(sphere());
        let b = scene.add(sphere());
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);

        assert!(scene.remove(a));
        assert!(!scene.contains(a));
        assert!(scene.contains(b));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut scene = Scene::new();
        let handle = scene.add(sphere());

        assert!(scene.remove(handle));
        assert!(!scene.remove(handle));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_set_transform() {
        let mut scene = Scene::new();
        let handle = scene.add(sphere());

        assert!(scene.set_transform(handle, Vec3::new(1.0, 2.0, 3.0), 0.25));
        let s = scene.get(handle).unwrap();
        assert_eq!(s.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s.opacity, 0.25);

        scene.remove(handle);
        assert!(!scene.set_transform(handle, Vec3::ZERO, 1.0));
    }

    #[test]
    fn test_handles_not_reused() {
        let mut scene = Scene::new();
        let first = scene.add(sphere());
        scene.remove(first);
        let second = scene.add(sphere());
        assert_ne!(first, second);
    }
}
