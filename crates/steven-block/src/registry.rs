//! The block registry: family allocation and the flattened combined-id table.
//!
//! Registration is a single-threaded start-up phase: [`allocate`], expand, then
//! [`finalize`]. After that the registry is only read, and `&BlockRegistry`
//! can be shared freely across threads. Anything that needs to register more
//! blocks later has to get `&mut` access again, which excludes every reader.
//!
//! The table holds its own copies of the placed blocks, so changes to a family
//! after [`finalize`] are not visible through lookups until it runs again.
//!
//! [`allocate`]: BlockRegistry::allocate
//! [`finalize`]: BlockRegistry::finalize

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::combined::{CombinedId, FamilyId, FAMILY_CAPACITY, TABLE_SIZE};
use crate::descriptor::{split_identifier, BlockDescriptor};
use crate::error::BlockError;
use crate::family::BlockFamily;
use crate::missing::missing_block;

/// Outcome of a [`BlockRegistry::finalize`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinalizeReport {
    pub families: usize,
    /// Combined ids that now resolve to a block.
    pub placed: usize,
    /// Variants with no slot: non-default variants of no-data families and
    /// variants whose state is not addressable.
    pub skipped: usize,
}

/// Registry of block families, indexed by family id and by combined id.
pub struct BlockRegistry {
    families: Vec<BlockFamily>,
    by_name: HashMap<String, FamilyId>,
    table: Box<[Option<Arc<BlockDescriptor>>]>,
    finalized: bool,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            families: Vec::with_capacity(FAMILY_CAPACITY),
            by_name: HashMap::new(),
            table: vec![None; TABLE_SIZE].into_boxed_slice(),
            finalized: false,
        }
    }

    /// Create a new family seeded with `initial` and give it the next id.
    pub fn allocate(&mut self, initial: BlockDescriptor) -> Result<&mut BlockFamily, BlockError> {
        let id = match u8::try_from(self.families.len()) {
            Ok(raw) => FamilyId::new(raw),
            Err(_) => {
                return Err(BlockError::CapacityExceeded {
                    capacity: FAMILY_CAPACITY,
                })
            }
        };
        if self.finalized {
            warn!(
                "Allocating {} after finalize; lookups are stale until the next finalize",
                initial
            );
            self.finalized = false;
        }

        match self.by_name.entry(initial.to_string()) {
            Entry::Occupied(existing) => warn!(
                "{} registered again as family {}, name lookups keep family {}",
                existing.key(),
                id,
                existing.get()
            ),
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }
        debug!("Allocated family {id} for {initial}");

        let index = self.families.len();
        self.families.push(BlockFamily::new(id, initial));
        Ok(&mut self.families[index])
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn family(&self, id: FamilyId) -> Option<&BlockFamily> {
        self.families.get(id.index())
    }

    /// Mutable access to a family. The table is considered stale until the
    /// next [`finalize`](Self::finalize).
    pub fn family_mut(&mut self, id: FamilyId) -> Option<&mut BlockFamily> {
        let family = self.families.get_mut(id.index())?;
        self.finalized = false;
        Some(family)
    }

    /// Family registered under `plugin:name` (bare names use `minecraft`).
    pub fn family_by_name(&self, identifier: &str) -> Option<&BlockFamily> {
        let (plugin, name) = split_identifier(identifier).ok()?;
        let id = self.by_name.get(&format!("{plugin}:{name}"))?;
        self.family(*id)
    }

    pub fn families(&self) -> impl Iterator<Item = &BlockFamily> {
        self.families.iter()
    }

    /// Rebuild the combined-id table from every family.
    ///
    /// The table is recomputed from scratch, so running this again without
    /// changes yields the same table. If any variant encodes to an offset
    /// outside the data field, or two variants claim one id, the error is
    /// returned and the previous table stays in place.
    pub fn finalize(&mut self) -> Result<FinalizeReport, BlockError> {
        let mut table: Box<[Option<Arc<BlockDescriptor>>]> =
            vec![None; TABLE_SIZE].into_boxed_slice();
        let mut report = FinalizeReport::default();

        for family in &self.families {
            report.families += 1;

            if !family.supports_data() {
                table[family.id().base().raw() as usize] =
                    Some(Arc::new(family.default_variant().clone()));
                report.placed += 1;
                report.skipped += family.len() - 1;
                continue;
            }

            for variant in family.variants() {
                let Some(offset) = variant.data_offset().get() else {
                    trace!("{} is not addressable, skipped", variant.full_name());
                    report.skipped += 1;
                    continue;
                };
                let combined = CombinedId::new(family.id(), offset).ok_or_else(|| {
                    BlockError::OffsetOutOfRange {
                        block: variant.full_name(),
                        offset,
                    }
                })?;
                let entry = &mut table[combined.raw() as usize];
                if let Some(existing) = entry {
                    return Err(BlockError::OffsetCollision {
                        combined: combined.raw(),
                        first: existing.full_name(),
                        second: variant.full_name(),
                    });
                }
                *entry = Some(Arc::new(variant.clone()));
                report.placed += 1;
            }
        }

        self.table = table;
        self.finalized = true;
        info!(
            "Block registry finalized: {} families, {} ids placed, {} variants skipped",
            report.families, report.placed, report.skipped
        );
        Ok(report)
    }

    /// The block stored under a combined id, or the missing block.
    pub fn lookup(&self, id: impl Into<CombinedId>) -> &BlockDescriptor {
        self.get(id).unwrap_or(missing_block())
    }

    /// Like [`lookup`](Self::lookup) but `None` instead of the missing block.
    pub fn get(&self, id: impl Into<CombinedId>) -> Option<&BlockDescriptor> {
        self.table[id.into().raw() as usize].as_deref()
    }

    /// The combined id `block` occupies in the finalized table, if any.
    pub fn combined_id(&self, block: &BlockDescriptor) -> Option<CombinedId> {
        let family = self.family(block.family()?)?;
        let id = if family.supports_data() {
            CombinedId::new(family.id(), block.data_offset().get()?)?
        } else {
            family.id().base()
        };
        (self.get(id)? == block).then_some(id)
    }

    /// Every placed id with its block, in ascending id order.
    pub fn entries(&self) -> impl Iterator<Item = (CombinedId, &BlockDescriptor)> {
        self.table
            .iter()
            .enumerate()
            .filter_map(|(raw, slot)| Some((CombinedId(raw as u16), slot.as_deref()?)))
    }
}
