/// Wireframe geometry: vertices plus index-pair edges
use nalgebra::Point3;

use crate::error::{RenderError, RenderResult};

/// A segment between two entries of a vertex list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

/// Edges of the cube built by [`Wireframe::cube`]
pub const CUBE_EDGES: [Edge; 12] = [
    // Back face
    Edge::new(0, 1),
    Edge::new(1, 2),
    Edge::new(2, 3),
    Edge::new(3, 0),
    // Front face
    Edge::new(4, 5),
    Edge::new(5, 6),
    Edge::new(6, 7),
    Edge::new(7, 4),
    // Connecting edges
    Edge::new(0, 4),
    Edge::new(1, 5),
    Edge::new(2, 6),
    Edge::new(3, 7),
];

/// A 3D object made only of edges. Every edge index is valid for `vertices`.
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    vertices: Vec<Point3<f32>>,
    edges: Vec<Edge>,
}

impl Wireframe {
    pub fn new(vertices: Vec<Point3<f32>>, edges: Vec<Edge>) -> RenderResult<Self> {
        let vertex_count = vertices.len();
        if let Some((index, edge)) = edges
            .iter()
            .enumerate()
            .find(|(_, e)| e.a >= vertex_count || e.b >= vertex_count)
        {
            return Err(RenderError::InvalidEdge {
                index,
                a: edge.a,
                b: edge.b,
                vertex_count,
            });
        }
        Ok(Self { vertices, edges })
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Axis-aligned cube centred at the origin, spanning `-half_extent..=half_extent`.
    ///
    /// Vertices 0-3 are the back face (z = -half_extent), 4-7 the front face,
    /// each counter-clockwise from bottom-left.
    pub fn cube(half_extent: f32) -> Self {
        let s = half_extent;
        let vertices = vec![
            Point3::new(-s, -s, -s),
            Point3::new(s, -s, -s),
            Point3::new(s, s, -s),
            Point3::new(-s, s, -s),
            Point3::new(-s, -s, s),
            Point3::new(s, -s, s),
            Point3::new(s, s, s),
            Point3::new(-s, s, s),
        ];
        Self {
            vertices,
            edges: CUBE_EDGES.to_vec(),
        }
    }
}
