//! Built-in catalogue of classic blocks.
//!
//! Families 0 through 20 follow the legacy block id order, so their combined
//! ids match old chunk data. The blocks after that take the next free ids.

use crate::combined::FamilyId;
use crate::descriptor::{BlockDescriptor, DEFAULT_PLUGIN};
use crate::error::BlockError;
use crate::kind::BlockKind;
use crate::registry::BlockRegistry;

/// Family ids of the registered catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VanillaBlocks {
    pub air: FamilyId,
    pub stone: FamilyId,
    pub grass: FamilyId,
    pub dirt: FamilyId,
    pub cobblestone: FamilyId,
    pub planks: FamilyId,
    pub sapling: FamilyId,
    pub bedrock: FamilyId,
    pub flowing_water: FamilyId,
    pub water: FamilyId,
    pub flowing_lava: FamilyId,
    pub lava: FamilyId,
    pub sand: FamilyId,
    pub gravel: FamilyId,
    pub gold_ore: FamilyId,
    pub iron_ore: FamilyId,
    pub coal_ore: FamilyId,
    pub log: FamilyId,
    pub leaves: FamilyId,
    pub sponge: FamilyId,
    pub glass: FamilyId,
    pub wool: FamilyId,
    pub stained_glass: FamilyId,
    pub stone_slab: FamilyId,
    pub furnace: FamilyId,
    pub lit_furnace: FamilyId,
}

/// Register the catalogue into `registry`, which should be empty for the
/// legacy ids to line up.
pub fn register(registry: &mut BlockRegistry) -> Result<VanillaBlocks, BlockError> {
    // Field initialisers run in order, which is what assigns the ids.
    Ok(VanillaBlocks {
        air: block(registry, "air", BlockKind::Plain, false)?,
        stone: block(registry, "stone", BlockKind::Stone, true)?,
        grass: block(registry, "grass", BlockKind::Grass, true)?,
        dirt: block(registry, "dirt", BlockKind::Plain, true)?,
        cobblestone: block(registry, "cobblestone", BlockKind::Plain, true)?,
        planks: block(registry, "planks", BlockKind::Planks, true)?,
        sapling: block(registry, "sapling", BlockKind::Sapling, false)?,
        bedrock: block(registry, "bedrock", BlockKind::Plain, true)?,
        flowing_water: block(registry, "flowing_water", BlockKind::Liquid, false)?,
        water: block(registry, "water", BlockKind::Liquid, false)?,
        flowing_lava: block(registry, "flowing_lava", BlockKind::Liquid, false)?,
        lava: block(registry, "lava", BlockKind::Liquid, false)?,
        sand: block(registry, "sand", BlockKind::Sand, true)?,
        gravel: block(registry, "gravel", BlockKind::Plain, true)?,
        gold_ore: block(registry, "gold_ore", BlockKind::Plain, true)?,
        iron_ore: block(registry, "iron_ore", BlockKind::Plain, true)?,
        coal_ore: block(registry, "coal_ore", BlockKind::Plain, true)?,
        log: block(registry, "log", BlockKind::Log, true)?,
        leaves: block(registry, "leaves", BlockKind::Leaves, false)?,
        sponge: block(registry, "sponge", BlockKind::Sponge, true)?,
        glass: block(registry, "glass", BlockKind::Plain, false)?,
        wool: block(registry, "wool", BlockKind::Colored, true)?,
        stained_glass: block(registry, "stained_glass", BlockKind::Colored, false)?,
        stone_slab: block(registry, "stone_slab", BlockKind::Slab, false)?,
        furnace: block(registry, "furnace", BlockKind::Furnace, true)?,
        lit_furnace: block(registry, "lit_furnace", BlockKind::Furnace, true)?,
    })
}

/// Allocate a family and expand it over every axis its kind declares.
fn block(
    registry: &mut BlockRegistry,
    name: &'static str,
    kind: BlockKind,
    cull_against: bool,
) -> Result<FamilyId, BlockError> {
    let axes = kind.axes().to_vec();
    let seed = BlockDescriptor::new(DEFAULT_PLUGIN, name, kind).with_cull_against(cull_against);
    let family = registry.allocate(seed)?;
    for axis in &axes {
        family.expand(axis)?;
    }
    Ok(family.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combined::CombinedId;
    use crate::state::StateValue;

    fn finalized() -> (BlockRegistry, VanillaBlocks) {
        let mut registry = BlockRegistry::new();
        let blocks = register(&mut registry).unwrap();
        registry.finalize().unwrap();
        (registry, blocks)
    }

    fn id(family: FamilyId, offset: u8) -> CombinedId {
        CombinedId::new(family, offset).unwrap()
    }

    #[test]
    fn legacy_ids_line_up() {
        let (_, blocks) = finalized();
        assert_eq!(blocks.air, FamilyId::new(0));
        assert_eq!(blocks.stone, FamilyId::new(1));
        assert_eq!(blocks.water, FamilyId::new(9));
        assert_eq!(blocks.sand, FamilyId::new(12));
        assert_eq!(blocks.log, FamilyId::new(17));
        assert_eq!(blocks.glass, FamilyId::new(20));
    }

    #[test]
    fn all_families_are_distinct() {
        let (registry, _) = finalized();
        assert_eq!(registry.len(), 26);
        let mut names: Vec<_> = registry
            .families()
            .map(|f| f.default_variant().to_string())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 26);
    }

    #[test]
    fn air_does_not_cull() {
        let (registry, blocks) = finalized();
        let air = registry.lookup(blocks.air.base());
        assert_eq!(air.to_string(), "minecraft:air");
        assert!(!air.cull_against());
        assert!(registry.lookup(id(blocks.air, 1)).is_missing());
    }

    #[test]
    fn stone_variants() {
        let (registry, blocks) = finalized();
        assert_eq!(registry.lookup(blocks.stone.base()).model_name(), "stone");
        assert_eq!(registry.lookup(id(blocks.stone, 3)).model_name(), "diorite");
        assert_eq!(
            registry.lookup(id(blocks.stone, 6)).model_name(),
            "smooth_andesite"
        );
        assert!(registry.lookup(id(blocks.stone, 7)).is_missing());
    }

    #[test]
    fn birch_log_on_x_axis() {
        let (registry, blocks) = finalized();
        let block = registry.lookup(id(blocks.log, 2 | 1 << 2));
        assert_eq!(block.model_name(), "birch_log");
        assert_eq!(block.model_variant(), "axis=x");
        assert_eq!(registry.combined_id(block), Some(id(blocks.log, 6)));
    }

    #[test]
    fn furnace_stores_horizontal_facings() {
        let (registry, blocks) = finalized();
        assert!(registry.lookup(id(blocks.furnace, 0)).is_missing());
        assert!(registry.lookup(id(blocks.furnace, 1)).is_missing());
        for (offset, facing) in [(2, "north"), (3, "south"), (4, "west"), (5, "east")] {
            let block = registry.lookup(id(blocks.furnace, offset));
            assert_eq!(block.state("facing"), Some(&StateValue::from(facing)));
        }
        let family = registry.family(blocks.furnace).unwrap();
        assert_eq!(family.len(), 6);
    }

    #[test]
    fn grass_snowy_variant_is_registered_but_not_placed() {
        let (registry, blocks) = finalized();
        let family = registry.family(blocks.grass).unwrap();
        assert_eq!(family.len(), 2);
        let snowy = family.find(&[("snowy", true.into())]).unwrap();
        assert_eq!(registry.combined_id(snowy), None);
        let placed = registry.lookup(blocks.grass.base());
        assert_eq!(placed.state("snowy"), Some(&StateValue::Bool(false)));
        assert_eq!(placed.model_variant(), "snowy=false");
    }

    #[test]
    fn water_levels() {
        let (registry, blocks) = finalized();
        for level in 0..16u8 {
            let block = registry.lookup(id(blocks.water, level));
            assert_eq!(block.state("level"), Some(&StateValue::Int(level as i32)));
            assert!(!block.cull_against());
        }
    }

    #[test]
    fn slab_halves() {
        let (registry, blocks) = finalized();
        let top_brick = registry.lookup(id(blocks.stone_slab, 4 | 8));
        assert_eq!(top_brick.model_name(), "brick_slab");
        assert_eq!(top_brick.model_variant(), "half=top");
    }

    #[test]
    fn sapling_skips_unused_types() {
        let (registry, blocks) = finalized();
        assert_eq!(
            registry.lookup(id(blocks.sapling, 5 | 8)).model_name(),
            "dark_oak_sapling"
        );
        assert!(registry.lookup(id(blocks.sapling, 6)).is_missing());
        assert!(registry.lookup(id(blocks.sapling, 15)).is_missing());
    }

    #[test]
    fn registering_twice_appends_new_families() {
        let mut registry = BlockRegistry::new();
        register(&mut registry).unwrap();
        let second = register(&mut registry).unwrap();
        assert_eq!(second.air, FamilyId::new(26));
        registry.finalize().unwrap();
        assert_eq!(
            registry.family_by_name("minecraft:air").unwrap().id(),
            FamilyId::new(0)
        );
    }
}
