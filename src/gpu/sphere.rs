//! Unit UV-sphere mesh shared by every particle instance.

use std::f32::consts::PI;

/// Indexed unit-sphere triangle list.
pub struct SphereMesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

impl SphereMesh {
    /// Build a unit sphere with the given longitude/latitude segment counts.
    ///
    /// Counts are clamped to at least 3 × 2. Pole rows emit one triangle per
    /// segment instead of a degenerate quad.
    pub fn new(width_segments: u32, height_segments: u32) -> Self {
        let width_segments = width_segments.max(3);
        let height_segments = height_segments.max(2);

        let mut positions = Vec::with_capacity(((width_segments + 1) * (height_segments + 1)) as usize);
        for iy in 0..=height_segments {
            let theta = iy as f32 / height_segments as f32 * PI;
            for ix in 0..=width_segments {
                let phi = ix as f32 / width_segments as f32 * PI * 2.0;
                positions.push([
                    -theta.sin() * phi.cos(),
                    theta.cos(),
                    theta.sin() * phi.sin(),
                ]);
            }
        }

        let row = width_segments + 1;
        let vertex = |ix: u32, iy: u32| (iy * row + ix) as u16;

        let mut indices = Vec::new();
        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = vertex(ix + 1, iy);
                let b = vertex(ix, iy);
                let c = vertex(ix, iy + 1);
                let d = vertex(ix + 1, iy + 1);

                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != height_segments - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { positions, indices }
    }

    pub const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
        wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::VERTEX_ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mesh = SphereMesh::new(8, 8);
        assert_eq!(mesh.positions.len(), 81);
        // 2 pole rows of 8 triangles, 6 middle rows of 16
        assert_eq!(mesh.indices.len(), (8 + 8 + 6 * 16) * 3);
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        let mesh = SphereMesh::new(8, 8);
        for p in &mesh.positions {
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_indices_in_range() {
        let mesh = SphereMesh::new(5, 3);
        let count = mesh.positions.len() as u16;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_segments_clamped() {
        let mesh = SphereMesh::new(0, 0);
        assert_eq!(mesh.positions.len(), 4 * 3);
    }
}
