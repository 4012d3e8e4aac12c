//! Validated surface mesh with per-vertex data
//!
//! [`NeuroSurface`] is what a viewer is built from: positions, smooth vertex
//! normals, a triangle list, and the per-vertex scalar and curvature arrays
//! that drive coloring.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::error::{Error, Result};
use crate::surface::color_map::ColorMapName;
use crate::surface::payload::SurfacePayload;
use crate::surface::view::Hemisphere;

#[derive(Debug, Clone, PartialEq)]
pub struct NeuroSurface {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u32>,
    data: Vec<f32>,
    curvature: Vec<f32>,
    color_map: ColorMapName,
    hemisphere: Hemisphere,
}

impl NeuroSurface {
    /// Validates a payload and derives normals.
    ///
    /// Empty meshes are accepted. `data` and `curvature` must be empty or
    /// hold exactly one value per vertex.
    pub fn from_payload(payload: SurfacePayload) -> Result<Self> {
        let SurfacePayload {
            vertices,
            indices,
            data,
            color_map,
            curvature,
            hemisphere,
        } = payload;

        if vertices.len() % 3 != 0 {
            return Err(Error::InvalidSurface(format!(
                "vertex array length {} is not a multiple of 3",
                vertices.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(Error::InvalidSurface(format!(
                "index array length {} is not a multiple of 3",
                indices.len()
            )));
        }

        let vertex_count = vertices.len() / 3;
        if let Some(bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(Error::InvalidSurface(format!(
                "index {} out of bounds for {} vertices",
                bad, vertex_count
            )));
        }
        check_per_vertex("data", data.len(), vertex_count)?;
        check_per_vertex("curvature", curvature.len(), vertex_count)?;

        let color_map = color_map.parse::<ColorMapName>()?;
        let positions: Vec<[f32; 3]> = vertices
            .chunks_exact(3)
            .map(|v| [v[0], v[1], v[2]])
            .collect();
        let normals = vertex_normals(&positions, &indices);

        Ok(Self {
            positions,
            normals,
            indices,
            data,
            curvature,
            color_map,
            hemisphere,
        })
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn curvature(&self) -> &[f32] {
        &self.curvature
    }

    pub fn color_map(&self) -> ColorMapName {
        self.color_map
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// `(min, max)` of the finite data values; `(0, 0)` when there are none.
    pub fn intensity_range(&self) -> (f32, f32) {
        let mut finite = self.data.iter().copied().filter(|v| v.is_finite());
        match finite.next() {
            Some(first) => finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))),
            None => (0.0, 0.0),
        }
    }

    /// Center and radius of the axis-aligned bounding box's enclosing sphere.
    pub fn bounding_sphere(&self) -> (Point3<f32>, f32) {
        let Some(first) = self.positions.first() else {
            return (Point3::new(0.0, 0.0, 0.0), 1.0);
        };

        let (min, max) = self.positions.iter().fold(
            (Vector3::from(*first), Vector3::from(*first)),
            |(min, max), p| {
                (
                    Vector3::new(min.x.min(p[0]), min.y.min(p[1]), min.z.min(p[2])),
                    Vector3::new(max.x.max(p[0]), max.y.max(p[1]), max.z.max(p[2])),
                )
            },
        );

        let center = (min + max) * 0.5;
        let radius = (max - center).magnitude();
        (
            Point3::new(center.x, center.y, center.z),
            if radius > f32::EPSILON { radius } else { 1.0 },
        )
    }
}

fn check_per_vertex(field: &str, len: usize, vertex_count: usize) -> Result<()> {
    if len == 0 || len == vertex_count {
        Ok(())
    } else {
        Err(Error::InvalidSurface(format!(
            "{} has {} values for {} vertices",
            field, len, vertex_count
        )))
    }
}

/// Area-weighted smooth normals: face normals summed per vertex, then
/// normalised. Vertices not referenced by any triangle get +z.
fn vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut sums = vec![Vector3::new(0.0f32, 0.0, 0.0); positions.len()];

    for triangle in indices.chunks_exact(3) {
        let [i0, i1, i2] = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
        let v0 = Vector3::from(positions[i0]);
        let edge1 = Vector3::from(positions[i1]) - v0;
        let edge2 = Vector3::from(positions[i2]) - v0;
        let face_normal = edge1.cross(edge2);

        for i in [i0, i1, i2] {
            sums[i] += face_normal;
        }
    }

    sums.into_iter()
        .map(|n| -> [f32; 3] {
            if n.magnitude2() > 0.0 {
                n.normalize().into()
            } else {
                [0.0, 0.0, 1.0]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_payload() -> SurfacePayload {
        SurfacePayload {
            vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            indices: vec![0, 1, 2],
            data: vec![-4.0, 0.5, 2.0],
            color_map: "cool".to_string(),
            curvature: vec![0.1, -0.1, 0.0],
            hemisphere: Hemisphere::Left,
        }
    }

    #[test]
    fn test_valid_triangle() {
        let surface = NeuroSurface::from_payload(triangle_payload()).unwrap();
        assert_eq!(surface.vertex_count(), 3);
        assert_eq!(surface.triangle_count(), 1);
        assert_eq!(surface.color_map(), ColorMapName::Cool);
        for n in surface.normals() {
            assert_eq!(*n, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_intensity_range() {
        let surface = NeuroSurface::from_payload(triangle_payload()).unwrap();
        assert_eq!(surface.intensity_range(), (-4.0, 2.0));
    }

    #[test]
    fn test_intensity_range_skips_non_finite() {
        let mut payload = triangle_payload();
        payload.data = vec![f32::NAN, 3.0, f32::INFINITY];
        let surface = NeuroSurface::from_payload(payload).unwrap();
        assert_eq!(surface.intensity_range(), (3.0, 3.0));
    }

    #[test]
    fn test_empty_mesh_is_valid() {
        let surface = NeuroSurface::from_payload(SurfacePayload {
            color_map: "jet".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(surface.vertex_count(), 0);
        assert_eq!(surface.intensity_range(), (0.0, 0.0));
        assert_eq!(surface.bounding_sphere().1, 1.0);
    }

    #[test]
    fn test_rejects_ragged_vertices() {
        let mut payload = triangle_payload();
        payload.vertices.pop();
        assert!(matches!(
            NeuroSurface::from_payload(payload),
            Err(Error::InvalidSurface(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_bounds_index() {
        let mut payload = triangle_payload();
        payload.indices = vec![0, 1, 3];
        assert!(matches!(
            NeuroSurface::from_payload(payload),
            Err(Error::InvalidSurface(_))
        ));
    }

    #[test]
    fn test_rejects_mismatched_data() {
        let mut payload = triangle_payload();
        payload.data = vec![1.0, 2.0];
        assert!(matches!(
            NeuroSurface::from_payload(payload),
            Err(Error::InvalidSurface(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_color_map() {
        let mut payload = triangle_payload();
        payload.color_map = "magma".to_string();
        assert!(matches!(
            NeuroSurface::from_payload(payload),
            Err(Error::UnknownColorMap(_))
        ));
    }

    #[test]
    fn test_bounding_sphere() {
        let surface = NeuroSurface::from_payload(triangle_payload()).unwrap();
        let (center, radius) = surface.bounding_sphere();
        assert_eq!(center, Point3::new(0.5, 0.5, 0.0));
        assert!((radius - 0.5f32.sqrt()).abs() < 1e-6);
    }
}
