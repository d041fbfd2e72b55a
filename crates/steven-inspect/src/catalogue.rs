//! Builds the registry the inspector reports on.

use steven_block::{
    vanilla, Axis, BlockDescriptor, BlockError, BlockKind, BlockRegistry, FamilyId,
};
use tracing::{debug, info};

use crate::config::{BlockSection, InspectConfig};

/// Register the catalogue and configured blocks, then finalize.
pub fn build_registry(config: &InspectConfig) -> Result<BlockRegistry, BlockError> {
    let mut registry = BlockRegistry::new();
    if config.catalogue.vanilla {
        vanilla::register(&mut registry)?;
        info!("Registered vanilla catalogue ({} families)", registry.len());
    }
    for block in &config.blocks {
        let id = register_block(&mut registry, block)?;
        debug!("Registered configured block {} as family {id}", block.id);
    }
    registry.finalize()?;
    Ok(registry)
}

/// Register one configured block family and expand it over its states.
pub fn register_block(
    registry: &mut BlockRegistry,
    block: &BlockSection,
) -> Result<FamilyId, BlockError> {
    let axes: Vec<Axis> = block
        .states
        .iter()
        .map(|state| Axis::new(state.key.clone(), state.values.clone()))
        .collect();
    let kind = BlockKind::custom(axes.clone())?;
    let seed = BlockDescriptor::parse(&block.id, kind)?.with_cull_against(block.cull_against);

    let family = registry.allocate(seed)?;
    for axis in &axes {
        family.expand(axis)?;
    }
    if let Some(data) = block.data {
        family.set_supports_data(data);
    }
    Ok(family.id())
}
