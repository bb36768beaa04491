// Host-side tests for the wireframe icosphere.

use icopulse_core::*;

#[test]
fn base_icosahedron_has_twelve_vertices_and_thirty_edges() {
    let m = icosphere(1.0, 0);
    assert_eq!(m.positions.len(), 12);
    assert_eq!(m.edges.len(), 30);
}

#[test]
fn subdivision_counts_follow_euler() {
    for detail in [0u32, 1, 2, 5, MESH_DETAIL] {
        let n = (detail + 1) as usize;
        let m = icosphere(MESH_RADIUS, detail);
        let v = m.positions.len();
        let e = m.edges.len();
        let f = 20 * n * n;
        assert_eq!(v, 10 * n * n + 2, "vertices at detail {detail}");
        assert_eq!(e, 30 * n * n, "edges at detail {detail}");
        assert_eq!(v + f, e + 2, "V - E + F = 2");
    }
}

#[test]
fn vertices_lie_on_the_sphere() {
    let m = icosphere(MESH_RADIUS, 4);
    for p in &m.positions {
        let r = glam::Vec3::from(*p).length();
        assert!((r - MESH_RADIUS).abs() < 1e-4, "radius {r}");
    }
}

#[test]
fn edges_are_unique_and_in_range() {
    let m = icosphere(1.0, 3);
    let mut seen = std::collections::HashSet::new();
    for e in &m.edges {
        assert!(e[0] < e[1]);
        assert!((e[1] as usize) < m.positions.len());
        assert!(seen.insert(*e));
    }
    let idx = m.line_indices();
    assert_eq!(idx.len(), m.edges.len() * 2);
}
