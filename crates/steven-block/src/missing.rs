//! The missing block: what every lookup of an unregistered id resolves to.

use crate::descriptor::BlockDescriptor;

pub const MISSING_PLUGIN: &str = "steven";
pub const MISSING_NAME: &str = "missing_block";

/// Unknown blocks are treated as opaque, so the sentinel culls.
static MISSING_BLOCK: BlockDescriptor = BlockDescriptor::sentinel(MISSING_PLUGIN, MISSING_NAME);

pub fn missing_block() -> &'static BlockDescriptor {
    &MISSING_BLOCK
}

impl BlockDescriptor {
    /// Whether this is the missing-block sentinel (or an unowned copy of it).
    pub fn is_missing(&self) -> bool {
        self.family().is_none() && self.identity() == (MISSING_PLUGIN, MISSING_NAME)
    }
}
