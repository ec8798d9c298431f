use delve_blocks::{BlockColors, BlockType, Cell, FALLBACK_COLOR};
use delve_geom::Vec3;
use delve_mesh_cpu::{ChunkMesh, Face, build_chunk_mesh};
use delve_world::{ChunkCoord, VoxelGrid};
use proptest::prelude::*;

const S: usize = 16;

fn mesh(grid: &VoxelGrid, c: (i32, i32, i32)) -> ChunkMesh {
    build_chunk_mesh(grid, ChunkCoord::from(c), S, &BlockColors::default())
}

fn vertex(m: &ChunkMesh, i: usize) -> Vec3 {
    let p = m.build.positions();
    Vec3::new(p[i * 3], p[i * 3 + 1], p[i * 3 + 2])
}

fn normal(m: &ChunkMesh, i: usize) -> Vec3 {
    let n = m.build.normals();
    Vec3::new(n[i * 3], n[i * 3 + 1], n[i * 3 + 2])
}

/// Brute-force count of solid faces with an empty or out-of-grid neighbor.
fn exposed_faces(grid: &VoxelGrid, lo: (i32, i32, i32), hi: (i32, i32, i32)) -> usize {
    let mut n = 0;
    for z in lo.2..hi.2 {
        for y in lo.1..hi.1 {
            for x in lo.0..hi.0 {
                if !grid.is_solid(x, y, z) {
                    continue;
                }
                for f in Face::ALL {
                    let (dx, dy, dz) = f.delta();
                    if !grid.is_solid(x + dx, y + dy, z + dz) {
                        n += 1;
                    }
                }
            }
        }
    }
    n
}

#[test]
fn lone_cube_emits_six_unshared_quads() {
    let mut g = VoxelGrid::new(3, 3, 3);
    g.set(1, 1, 1, BlockType::Stone);
    let m = mesh(&g, (0, 0, 0));
    assert_eq!(m.build.quad_count(), 6);
    assert_eq!(m.build.vertex_count(), 24);
    assert_eq!(m.build.triangle_count(), 12);
    assert_eq!(m.build.colors().len(), 24 * 4);
    let mut sorted = m.build.indices().to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 24, "no vertex is shared between quads");
}

#[test]
fn vertical_axis_is_inverted() {
    let mut g = VoxelGrid::new(1, 8, 1);
    g.set(0, 5, 0, BlockType::Dirt);
    let m = mesh(&g, (0, 0, 0));
    for i in 0..m.build.vertex_count() {
        let v = vertex(&m, i);
        assert!(v.y == -5.0 || v.y == -4.0, "y = {}", v.y);
    }
    assert_eq!(m.bbox.min.y, -7.0);
    assert_eq!(m.bbox.max.y, 1.0);
}

#[test]
fn deeper_face_points_down_in_world_space() {
    let mut g = VoxelGrid::new(1, 2, 1);
    g.set(0, 0, 0, BlockType::Gold);
    g.set(0, 1, 0, BlockType::Gold);
    let m = mesh(&g, (0, 0, 0));
    // Shared face between the two rows is culled
    assert_eq!(m.build.quad_count(), 10);
    let down: Vec<_> = (0..m.build.vertex_count())
        .filter(|i| normal(&m, *i) == Vec3::new(0.0, -1.0, 0.0))
        .map(|i| vertex(&m, i).y)
        .collect();
    assert_eq!(down.len(), 4);
    assert!(down.iter().all(|y| *y == -1.0));
}

#[test]
fn triangles_wind_counter_clockwise_around_normal() {
    let mut g = VoxelGrid::new(1, 1, 1);
    g.set(0, 0, 0, BlockType::Iron);
    let m = mesh(&g, (0, 0, 0));
    for t in m.build.indices().chunks(3) {
        let (a, b, c) = (
            vertex(&m, t[0] as usize),
            vertex(&m, t[1] as usize),
            vertex(&m, t[2] as usize),
        );
        let n = normal(&m, t[0] as usize);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn halo_neighbor_in_other_chunk_culls_boundary_face() {
    let mut g = VoxelGrid::new(32, 1, 1);
    g.set(15, 0, 0, BlockType::Stone);
    let alone = mesh(&g, (0, 0, 0));
    assert_eq!(alone.build.quad_count(), 6);

    g.set(16, 0, 0, BlockType::Stone);
    let left = mesh(&g, (0, 0, 0));
    let right = mesh(&g, (1, 0, 0));
    assert_eq!(left.build.quad_count(), 5);
    assert_eq!(right.build.quad_count(), 5);
    let faces_pos_x = (0..left.build.vertex_count())
        .filter(|i| normal(&left, *i) == Face::PosX.normal())
        .count();
    assert_eq!(faces_pos_x, 0);
}

#[test]
fn grid_edge_faces_always_render() {
    let mut g = VoxelGrid::new(4, 4, 4);
    g.fill_with(|_, _, _| Cell::of(BlockType::Dirt));
    let m = mesh(&g, (0, 0, 0));
    // Only the outer shell: 6 sides of 4x4 faces
    assert_eq!(m.build.quad_count(), 6 * 16);
}

#[test]
fn empty_or_missing_chunk_has_no_geometry() {
    let g = VoxelGrid::new(20, 20, 20);
    assert!(mesh(&g, (0, 0, 0)).is_empty());
    assert!(mesh(&g, (5, 0, 0)).is_empty());
    assert!(mesh(&g, (-1, 0, 0)).is_empty());
}

#[test]
fn rebuild_is_byte_identical() {
    let mut g = VoxelGrid::new(20, 20, 20);
    g.fill_with(|x, y, z| {
        if (x * 7 + y * 3 + z) % 5 == 0 {
            Cell::EMPTY
        } else {
            Cell::of(BlockType::from_index(((x + y + z) % 4) as usize).unwrap())
        }
    });
    for c in [(0, 0, 0), (1, 0, 1), (1, 1, 1)] {
        let a = mesh(&g, c);
        let b = mesh(&g, c);
        assert_eq!(a, b);
        let bits = |m: &ChunkMesh| {
            m.build
                .positions()
                .iter()
                .map(|f| f.to_bits())
                .collect::<Vec<_>>()
        };
        assert_eq!(bits(&a), bits(&b));
    }
}

#[test]
fn uncovered_type_uses_fallback_color() {
    let mut g = VoxelGrid::new(2, 1, 1);
    g.set(0, 0, 0, BlockType::Dirt);
    g.set(1, 0, 0, BlockType::Gold);
    let colors = BlockColors::from_rgb(&[[1, 2, 3]]);
    let m = build_chunk_mesh(&g, ChunkCoord::new(0, 0, 0), S, &colors);
    let rgba: Vec<[u8; 4]> = m
        .build
        .colors()
        .chunks(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect();
    assert!(rgba.contains(&[1, 2, 3, 255]));
    assert!(rgba.contains(&FALLBACK_COLOR));
    assert!(!rgba.contains(&[0, 0, 0, 255]));
}

proptest! {
    // Quad count equals the brute-force exposed face count for every chunk
    #[test]
    fn quads_match_exposed_faces(
        seed in any::<u64>(),
        sx in 1usize..24,
        sy in 1usize..24,
        sz in 1usize..24,
    ) {
        let mut g = VoxelGrid::new(sx, sy, sz);
        g.fill_with(|x, y, z| {
            let h = (x as u64).wrapping_mul(73_856_093)
                ^ (y as u64).wrapping_mul(19_349_663)
                ^ (z as u64).wrapping_mul(83_492_791)
                ^ seed;
            if h % 3 == 0 { Cell::EMPTY } else { Cell::of(BlockType::Stone) }
        });
        let mut total = 0;
        for cz in 0..sz.div_ceil(S) as i32 {
            for cy in 0..sy.div_ceil(S) as i32 {
                for cx in 0..sx.div_ceil(S) as i32 {
                    let m = mesh(&g, (cx, cy, cz));
                    total += m.build.quad_count();
                }
            }
        }
        prop_assert_eq!(total, exposed_faces(&g, (0, 0, 0), (sx as i32, sy as i32, sz as i32)));
    }
}
