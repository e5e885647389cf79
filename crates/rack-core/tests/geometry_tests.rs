// Host-side tests for box primitives and mesh flattening.

use rack_core::*;
use std::collections::HashMap;

#[test]
fn unit_box_has_eight_unique_corners() {
    let b = create_box(0.0, 1.0, 0.0, 1.0, 0.0, 1.0);
    for (i, a) in b.vertices.iter().enumerate() {
        for c in &b.vertices[i + 1..] {
            assert_ne!(a, c);
        }
        for axis in a.to_array() {
            assert!(axis == 0.0 || axis == 1.0);
        }
    }
}

#[test]
fn corner_order_walks_bottom_then_top() {
    let b = create_box(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    assert_eq!(b.vertices[0].to_array(), [1.0, 3.0, 5.0]);
    assert_eq!(b.vertices[2].to_array(), [2.0, 4.0, 5.0]);
    assert_eq!(b.vertices[4].to_array(), [1.0, 3.0, 6.0]);
    assert_eq!(b.vertices[6].to_array(), [2.0, 4.0, 6.0]);
}

#[test]
fn triangle_indices_stay_within_the_eight_corners() {
    for tri in [Triangulation::Reference, Triangulation::Closed] {
        for t in tri.triangles() {
            assert!(t.iter().all(|&i| i <= 7), "{tri:?} has out of range index");
        }
    }
}

#[test]
fn reference_columns_match_plot_trace_layout() {
    let (i, j, k) = BoxMesh::index_columns(Triangulation::Reference);
    assert_eq!(i, vec![0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 1, 2, 3, 4, 5, 6]);
    assert_eq!(j, vec![1, 2, 3, 4, 5, 6, 7, 2, 3, 6, 4, 5, 7, 0, 1, 3]);
    assert_eq!(k, vec![2, 3, 1, 5, 6, 7, 0, 1, 4, 5, 7, 6, 0, 3, 4, 7]);
}

#[test]
fn closed_triangulation_is_watertight() {
    let tris = Triangulation::Closed.triangles();
    assert_eq!(tris.len(), 12);
    let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
    for t in tris {
        for (a, b) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
            *edges.entry((a.min(b), a.max(b))).or_default() += 1;
        }
    }
    assert!(edges.values().all(|&n| n == 2));
}

#[test]
fn closed_triangulation_faces_outward() {
    let b = create_box(0.0, 1.0, 0.0, 1.0, 0.0, 1.0);
    let center = glam::Vec3::splat(0.5);
    for t in Triangulation::Closed.triangles() {
        let [a, bb, c] = t.map(|i| b.vertices[i as usize]);
        let normal = (bb - a).cross(c - a);
        let centroid = (a + bb + c) / 3.0;
        assert!(normal.dot(centroid - center) > 0.0, "triangle {t:?} faces inward");
    }
}

#[test]
fn mesh_offsets_indices_per_box() {
    let mut mesh = TriangleMesh::default();
    assert!(mesh.is_empty());
    let rgba = [0.5, 0.5, 0.5, 0.7];
    mesh.push_box(&create_box(0.0, 1.0, 0.0, 1.0, 0.0, 1.0), rgba, Triangulation::Closed);
    mesh.push_box(&create_box(2.0, 3.0, 0.0, 1.0, 0.0, 1.0), rgba, Triangulation::Closed);
    assert_eq!(mesh.vertices.len(), 16);
    assert_eq!(mesh.triangle_count(), 24);
    assert!(mesh.indices[..36].iter().all(|&i| i < 8));
    assert!(mesh.indices[36..].iter().all(|&i| (8..16).contains(&i)));
    assert!(mesh.vertices.iter().all(|v| v.color == rgba));
}

#[test]
fn bounds_union_and_center() {
    let a = Bounds::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0);
    let b = Bounds::new(2.0, 4.0, -1.0, 0.5, 0.0, 3.0);
    let u = a.union(&b);
    assert_eq!(u.min.to_array(), [0.0, -1.0, 0.0]);
    assert_eq!(u.max.to_array(), [4.0, 1.0, 3.0]);
    assert_eq!(u.center().to_array(), [2.0, 0.0, 1.5]);
}
