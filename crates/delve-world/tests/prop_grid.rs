use delve_blocks::BlockType;
use delve_world::{ChunkCoord, ChunkLayout, VoxelGrid};
use proptest::prelude::*;

fn dim() -> impl Strategy<Value = usize> {
    1usize..=12
}

fn block() -> impl Strategy<Value = BlockType> {
    (0usize..BlockType::COUNT).prop_map(|i| BlockType::from_index(i).unwrap())
}

proptest! {
    // set then get returns the written type; remove empties it
    #[test]
    fn set_get_remove_in_bounds(
        sx in dim(),
        sy in dim(),
        sz in dim(),
        seed in any::<u32>(),
        ty in block(),
    ) {
        let mut g = VoxelGrid::new(sx, sy, sz);
        let x = (seed as usize % sx) as i32;
        let y = (seed as usize / 7 % sy) as i32;
        let z = (seed as usize / 49 % sz) as i32;
        g.set(x, y, z, ty);
        prop_assert_eq!(g.try_get(x, y, z), Some(ty));
        prop_assert!(g.is_solid(x, y, z));
        prop_assert_eq!(g.solid_count(), 1);
        g.remove(x, y, z);
        prop_assert_eq!(g.try_get(x, y, z), None);
        prop_assert!(!g.is_solid(x, y, z));
    }

    // Out-of-bounds writes are dropped and reads report absent
    #[test]
    fn out_of_bounds_is_a_no_op(
        sx in dim(),
        sy in dim(),
        sz in dim(),
        ty in block(),
        pick in 0usize..6,
        far in 0i32..100,
    ) {
        let mut g = VoxelGrid::new(sx, sy, sz);
        let (x, y, z) = match pick {
            0 => (-1 - far, 0, 0),
            1 => (sx as i32 + far, 0, 0),
            2 => (0, -1 - far, 0),
            3 => (0, sy as i32 + far, 0),
            4 => (0, 0, -1 - far),
            _ => (0, 0, sz as i32 + far),
        };
        let before = g.clone();
        g.set(x, y, z, ty);
        g.remove(x, y, z);
        prop_assert_eq!(&g, &before);
        prop_assert_eq!(g.try_get(x, y, z), None);
        prop_assert_eq!(g.cell(x, y, z), None);
        prop_assert!(!g.is_solid(x, y, z));
    }

    // Arena index and coord_at are inverse over the whole layout
    #[test]
    fn layout_index_roundtrip(
        sx in 1usize..80,
        sy in 1usize..80,
        sz in 1usize..80,
        s in 1usize..20,
    ) {
        let l = ChunkLayout::new((sx, sy, sz), s);
        let mut seen = vec![false; l.len()];
        for (i, c) in l.coords().enumerate() {
            prop_assert_eq!(l.index(c), Some(i));
            prop_assert!(!seen[i]);
            seen[i] = true;
        }
        prop_assert!(seen.into_iter().all(|b| b));
        prop_assert_eq!(l.index(ChunkCoord::new(l.chunks_x as i32, 0, 0)), None);
        prop_assert_eq!(l.index(ChunkCoord::new(0, -1, 0)), None);
    }

    // Every in-grid cell belongs to exactly the chunk whose range contains it
    #[test]
    fn locate_agrees_with_cell_range(
        sx in 1usize..40,
        sy in 1usize..40,
        sz in 1usize..40,
        s in 1usize..10,
        seed in any::<u32>(),
    ) {
        let l = ChunkLayout::new((sx, sy, sz), s);
        let x = (seed as usize % sx) as i32;
        let y = (seed as usize / 41 % sy) as i32;
        let z = (seed as usize / 1681 % sz) as i32;
        let (c, (lx, ly, lz)) = l.locate(x, y, z).unwrap();
        prop_assert!(l.contains(c));
        let (lo, hi) = l.cell_range(c);
        prop_assert!(lo.0 <= x && x < hi.0 && lo.1 <= y && y < hi.1 && lo.2 <= z && z < hi.2);
        prop_assert_eq!((lo.0 + lx, lo.1 + ly, lo.2 + lz), (x, y, z));
        prop_assert_eq!(ChunkCoord::from_origin(lo, s), Some(c));
    }
}

#[test]
fn unaligned_origin_has_no_chunk() {
    assert_eq!(ChunkCoord::from_origin((16, 0, 32), 16), Some(ChunkCoord::new(1, 0, 2)));
    assert_eq!(ChunkCoord::from_origin((15, 0, 0), 16), None);
    assert_eq!(ChunkCoord::from_origin((-16, 0, 0), 16), Some(ChunkCoord::new(-1, 0, 0)));
}
