use delve_blocks::{BlockColors, BlockType, FALLBACK_COLOR};
use proptest::prelude::*;

#[test]
fn default_table_covers_every_type() {
    let colors = BlockColors::default();
    assert_eq!(colors.covered_types(), BlockType::COUNT);
    for ty in BlockType::ALL {
        let c = colors.color_of(ty);
        assert_ne!(c, FALLBACK_COLOR, "{ty} should have a configured color");
        assert_eq!(c[3], 255);
    }
}

#[test]
fn toml_overrides_only_listed_types() {
    let colors = BlockColors::from_toml_str(
        r#"
        gold = [1, 2, 3]
    "#,
    )
    .unwrap();
    assert_eq!(colors.color_of(BlockType::Gold), [1, 2, 3, 255]);
    assert_eq!(
        colors.color_of(BlockType::Dirt),
        BlockColors::default().color_of(BlockType::Dirt)
    );
}

#[test]
fn short_table_renders_missing_types_as_fallback() {
    let colors = BlockColors::from_rgb(&[[10, 20, 30]]);
    assert_eq!(colors.color_of(BlockType::Dirt), [10, 20, 30, 255]);
    assert_eq!(colors.color_of(BlockType::Stone), FALLBACK_COLOR);
    assert_eq!(colors.color_of(BlockType::Gold), FALLBACK_COLOR);
}

#[test]
fn malformed_toml_is_an_error() {
    assert!(BlockColors::from_toml_str("dirt = \"brown\"").is_err());
}

proptest! {
    // Every id outside 1..=COUNT maps to the fallback color, never black
    #[test]
    fn uncovered_ids_are_conspicuous(id in (BlockType::COUNT as u8 + 1)..=u8::MAX) {
        let colors = BlockColors::default();
        prop_assert_eq!(colors.color_for(id), FALLBACK_COLOR);
    }

    // Persisted ids always resolve to some real type
    #[test]
    fn persisted_ids_always_resolve(id in any::<i64>()) {
        let ty = BlockType::from_persisted_id(id);
        prop_assert!(BlockType::ALL.contains(&ty));
        if (1..=BlockType::COUNT as i64).contains(&id) {
            prop_assert_eq!(ty.cell_id() as i64, id);
        } else {
            prop_assert_eq!(ty, BlockType::DEFAULT_FILL);
        }
    }
}
