//! CPU chunk mesher: per-face solid/empty culling over the global grid.
#![forbid(unsafe_code)]

mod chunk;
mod face;
mod mesh_build;

pub use chunk::{ChunkMesh, MeshStats};
pub use face::Face;
pub use mesh_build::MeshBuild;

use delve_blocks::BlockColors;
use delve_geom::Aabb;
use delve_world::{ChunkCoord, VoxelGrid};

/// Builds the geometry for chunk `coord` of edge `chunk_size`.
///
/// Every solid cell in the chunk's own volume emits one quad per face whose
/// neighbor is empty. Neighbors are read from the whole grid, so cells just
/// outside the chunk (the halo) cull correctly; neighbors outside the grid
/// count as empty. The result depends only on the arguments.
pub fn build_chunk_mesh(
    grid: &VoxelGrid,
    coord: ChunkCoord,
    chunk_size: usize,
    colors: &BlockColors,
) -> ChunkMesh {
    let (lo, hi) = chunk_span(grid, coord, chunk_size);
    let mut build = MeshBuild::default();
    for z in lo.2..hi.2 {
        for y in lo.1..hi.1 {
            for x in lo.0..hi.0 {
                let Some(ty) = grid.try_get(x, y, z) else {
                    continue;
                };
                let rgba = colors.color_of(ty);
                for face in Face::ALL {
                    let (dx, dy, dz) = face.delta();
                    if !grid.is_solid(x + dx, y + dy, z + dz) {
                        build.add_cell_face(face, x, y, z, rgba);
                    }
                }
            }
        }
    }
    let bbox = if lo.0 < hi.0 && lo.1 < hi.1 && lo.2 < hi.2 {
        Aabb::from_cell_span(lo, hi)
    } else {
        Aabb::default()
    };
    ChunkMesh { coord, bbox, build }
}

/// The chunk's cell range clipped to the grid; empty when it lies outside.
fn chunk_span(
    grid: &VoxelGrid,
    coord: ChunkCoord,
    chunk_size: usize,
) -> ((i32, i32, i32), (i32, i32, i32)) {
    let s = chunk_size.max(1) as i32;
    let (ox, oy, oz) = coord.origin(chunk_size.max(1));
    let (gx, gy, gz) = grid.dims();
    let clip = |o: i32, n: usize| {
        let n = n.min(i32::MAX as usize) as i32;
        (o.clamp(0, n), (o + s).clamp(0, n))
    };
    let (x0, x1) = clip(ox, gx);
    let (y0, y1) = clip(oy, gy);
    let (z0, z1) = clip(oz, gz);
    ((x0, y0, z0), (x1, y1, z1))
}
