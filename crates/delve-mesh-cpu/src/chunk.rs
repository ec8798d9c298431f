use delve_geom::Aabb;
use delve_world::ChunkCoord;

use crate::mesh_build::MeshBuild;

/// Derived geometry for one chunk. Holds no voxel data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChunkMesh {
    pub coord: ChunkCoord,
    pub bbox: Aabb,
    pub build: MeshBuild,
}

impl ChunkMesh {
    pub fn empty(coord: ChunkCoord) -> Self {
        Self {
            coord,
            bbox: Aabb::default(),
            build: MeshBuild::default(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.build.is_empty()
    }

    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertices: self.build.vertex_count(),
            triangles: self.build.triangle_count(),
            quads: self.build.quad_count(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    pub vertices: usize,
    pub triangles: usize,
    pub quads: usize,
}

impl std::ops::AddAssign for MeshStats {
    fn add_assign(&mut self, rhs: MeshStats) {
        self.vertices += rhs.vertices;
        self.triangles += rhs.triangles;
        self.quads += rhs.quads;
    }
}
