//! Subdivided icosahedron as a line list, for wireframe rendering.

use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;

const T: f32 = 1.618_034; // golden ratio

const ICOSA_VERTICES: [[f32; 3]; 12] = [
    [-1.0, T, 0.0],
    [1.0, T, 0.0],
    [-1.0, -T, 0.0],
    [1.0, -T, 0.0],
    [0.0, -1.0, T],
    [0.0, 1.0, T],
    [0.0, -1.0, -T],
    [0.0, 1.0, -T],
    [T, 0.0, -1.0],
    [T, 0.0, 1.0],
    [-T, 0.0, -1.0],
    [-T, 0.0, 1.0],
];

const ICOSA_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Sphere vertices and the unique edges between them.
///
/// Each vertex normal is its normalized position, so shaders can displace
/// along `normalize(position)`.
#[derive(Clone, Debug, Default)]
pub struct WireMesh {
    pub positions: Vec<[f32; 3]>,
    pub edges: Vec<[u32; 2]>,
}

impl WireMesh {
    /// Flattened edge list for a line-list index buffer.
    pub fn line_indices(&self) -> Vec<u32> {
        self.edges.iter().flat_map(|e| [e[0], e[1]]).collect()
    }
}

// Integer barycentric weights over base-vertex ids, zero weights dropped and
// sorted by id. Identical for a point no matter which face generated it.
type WeldKey = [(usize, u32); 3];

fn weld_key(ids: [usize; 3], weights: [u32; 3]) -> WeldKey {
    let mut key = [0, 1, 2].map(|k| {
        if weights[k] == 0 {
            (usize::MAX, 0)
        } else {
            (ids[k], weights[k])
        }
    });
    key.sort_unstable();
    key
}

#[derive(Default)]
struct Builder {
    radius: f32,
    positions: Vec<[f32; 3]>,
    weld: FnvHashMap<WeldKey, u32>,
    edges: Vec<[u32; 2]>,
    seen: FnvHashSet<[u32; 2]>,
}

impl Builder {
    fn vertex(&mut self, key: WeldKey, p: Vec3) -> u32 {
        if let Some(&i) = self.weld.get(&key) {
            return i;
        }
        let i = self.positions.len() as u32;
        self.positions.push((p.normalize() * self.radius).to_array());
        self.weld.insert(key, i);
        i
    }

    fn edge(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        let e = [a.min(b), a.max(b)];
        if self.seen.insert(e) {
            self.edges.push(e);
        }
    }

    fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.edge(a, b);
        self.edge(b, c);
        self.edge(c, a);
    }

    // Split face (a, b, c) into (detail + 1)^2 triangles on a barycentric grid.
    fn subdivide(&mut self, ids: [usize; 3], detail: u32) {
        let [a, b, c] = ids.map(|i| Vec3::from(ICOSA_VERTICES[i]));
        let cols = (detail + 1) as usize;
        let mut grid: Vec<Vec<u32>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let t = i as f32 / cols as f32;
            let aj = a.lerp(c, t);
            let bj = b.lerp(c, t);
            let rows = cols - i;
            let mut row = Vec::with_capacity(rows + 1);
            for j in 0..=rows {
                let p = if j == 0 && i == cols {
                    aj
                } else {
                    aj.lerp(bj, j as f32 / rows as f32)
                };
                let weights = [(rows - j) as u32, j as u32, i as u32];
                row.push(self.vertex(weld_key(ids, weights), p));
            }
            grid.push(row);
        }
        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                if j % 2 == 0 {
                    self.triangle(grid[i][k + 1], grid[i + 1][k], grid[i][k]);
                } else {
                    self.triangle(grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]);
                }
            }
        }
    }
}

/// Icosahedron of `radius`, each face edge split into `detail + 1` segments.
pub fn icosphere(radius: f32, detail: u32) -> WireMesh {
    let mut b = Builder {
        radius,
        ..Default::default()
    };
    for face in ICOSA_FACES {
        b.subdivide(face, detail);
    }
    WireMesh {
        positions: b.positions,
        edges: b.edges,
    }
}
