//! Axis-aligned box primitives and the flattened triangle mesh the renderers
//! upload to the GPU.

use glam::Vec3;

/// Axis-aligned bounds. No ordering is enforced; callers pass min < max.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(x0: f32, x1: f32, y0: f32, y1: f32, z0: f32, z1: f32) -> Self {
        Self {
            min: Vec3::new(x0, y0, z0),
            max: Vec3::new(x1, y1, z1),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Smallest bounds containing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Triangle lists over the eight box corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Triangulation {
    /// Two outward-wound triangles per face.
    #[default]
    Closed,
    /// The 16-triangle list used by the plotting scripts the layout first
    /// appeared in. Kept for side-by-side comparison; it repeats a face and
    /// leaves parts of the top and sides open.
    Reference,
}

// Columns i, j, k of the reference list, zipped into triples.
const REFERENCE_TRIANGLES: [[u32; 3]; 16] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 1],
    [1, 4, 5],
    [2, 5, 6],
    [3, 6, 7],
    [4, 7, 0],
    [5, 2, 1],
    [6, 3, 4],
    [7, 6, 5],
    [1, 4, 7],
    [2, 5, 6],
    [3, 7, 0],
    [4, 0, 3],
    [5, 1, 4],
    [6, 3, 7],
];

const CLOSED_TRIANGLES: [[u32; 3]; 12] = [
    // z0
    [0, 2, 1],
    [0, 3, 2],
    // z1
    [4, 5, 6],
    [4, 6, 7],
    // y0
    [0, 1, 5],
    [0, 5, 4],
    // x1
    [1, 2, 6],
    [1, 6, 5],
    // y1
    [2, 3, 7],
    [2, 7, 6],
    // x0
    [3, 0, 4],
    [3, 4, 7],
];

impl Triangulation {
    pub fn triangles(self) -> &'static [[u32; 3]] {
        match self {
            Triangulation::Closed => &CLOSED_TRIANGLES,
            Triangulation::Reference => &REFERENCE_TRIANGLES,
        }
    }
}

/// Eight corners of a box: the z0 face counter-clockwise from (x0, y0),
/// then the z1 face in the same order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxMesh {
    pub vertices: [Vec3; 8],
}

impl BoxMesh {
    /// Triangle list split into the `i`, `j`, `k` index columns a plotting
    /// library's mesh trace expects.
    pub fn index_columns(triangulation: Triangulation) -> (Vec<u32>, Vec<u32>, Vec<u32>) {
        let tris = triangulation.triangles();
        (
            tris.iter().map(|t| t[0]).collect(),
            tris.iter().map(|t| t[1]).collect(),
            tris.iter().map(|t| t[2]).collect(),
        )
    }
}

pub fn create_box(x0: f32, x1: f32, y0: f32, y1: f32, z0: f32, z1: f32) -> BoxMesh {
    BoxMesh {
        vertices: [
            Vec3::new(x0, y0, z0),
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y1, z0),
            Vec3::new(x0, y1, z0),
            Vec3::new(x0, y0, z1),
            Vec3::new(x1, y0, z1),
            Vec3::new(x1, y1, z1),
            Vec3::new(x0, y1, z1),
        ],
    }
}

impl From<&Bounds> for BoxMesh {
    fn from(b: &Bounds) -> Self {
        create_box(b.min.x, b.max.x, b.min.y, b.max.y, b.min.z, b.max.z)
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Indexed triangle list with per-vertex RGBA.
#[derive(Clone, Debug, Default)]
pub struct TriangleMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn with_capacity(boxes: usize, triangulation: Triangulation) -> Self {
        Self {
            vertices: Vec::with_capacity(boxes * 8),
            indices: Vec::with_capacity(boxes * triangulation.triangles().len() * 3),
        }
    }

    pub fn push_box(&mut self, mesh: &BoxMesh, rgba: [f32; 4], triangulation: Triangulation) {
        let base = self.vertices.len() as u32;
        self.vertices
            .extend(mesh.vertices.iter().map(|v| MeshVertex {
                position: v.to_array(),
                color: rgba,
            }));
        for tri in triangulation.triangles() {
            self.indices.extend(tri.iter().map(|i| base + i));
        }
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
