use delve_geom::Vec3;

use crate::face::Face;

/// Flat triangle buffers for one chunk: positions and normals (xyz per
/// vertex), RGBA per vertex, and triangle indices. Quads never share vertices.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pos: Vec<f32>,
    norm: Vec<f32>,
    idx: Vec<u32>,
    col: Vec<u8>,
}

impl MeshBuild {
    /// Appends a quad (two triangles) with four fresh vertices and one flat color.
    /// Winding is corrected so the front face points along `n`.
    pub fn add_quad(&mut self, corners: [Vec3; 4], n: Vec3, rgba: [u8; 4]) {
        let base = self.vertex_count() as u32;
        let mut vs = corners;
        let e1 = vs[1] - vs[0];
        let e2 = vs[2] - vs[0];
        if e1.cross(e2).dot(n) < 0.0 {
            vs.swap(1, 3);
        }
        for v in vs {
            self.pos.extend_from_slice(&[v.x, v.y, v.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
            self.col.extend_from_slice(&rgba);
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Emits the given face of the cell at grid `(x, y, z)`.
    #[inline]
    pub fn add_cell_face(&mut self, face: Face, x: i32, y: i32, z: i32, rgba: [u8; 4]) {
        self.add_quad(face.corners(Vec3::from_cell(x, y, z)), face.normal(), rgba);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    /// Vertex positions, x,y,z per vertex.
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }
    pub fn colors(&self) -> &[u8] {
        &self.col
    }
    pub fn indices(&self) -> &[u32] {
        &self.idx
    }
}
