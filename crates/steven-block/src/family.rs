//! Block families: every state variant of one block type.

use tracing::debug;

use crate::combined::FamilyId;
use crate::descriptor::BlockDescriptor;
use crate::error::BlockError;
use crate::state::{StateAxis, StateValue};

/// An ordered, never-empty collection of variants sharing one family id.
///
/// `variants()[0]` is the default variant. Families are created by
/// [`BlockRegistry::allocate`](crate::BlockRegistry::allocate).
#[derive(Debug, Clone)]
pub struct BlockFamily {
    id: FamilyId,
    variants: Vec<BlockDescriptor>,
    supports_data: bool,
}

impl BlockFamily {
    pub(crate) fn new(id: FamilyId, mut seed: BlockDescriptor) -> Self {
        seed.set_family(id);
        let supports_data = seed.kind().has_data();
        Self {
            id,
            variants: vec![seed],
            supports_data,
        }
    }

    pub fn id(&self) -> FamilyId {
        self.id
    }

    pub fn variants(&self) -> &[BlockDescriptor] {
        &self.variants
    }

    pub fn default_variant(&self) -> &BlockDescriptor {
        &self.variants[0]
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always false: a family holds at least its seed.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Whether every variant is placed by its data offset. When false, only the
    /// default variant is placed, at offset 0.
    pub fn supports_data(&self) -> bool {
        self.supports_data
    }

    /// Override the kind's default for [`supports_data`](Self::supports_data).
    pub fn set_supports_data(&mut self, supports_data: bool) -> &mut Self {
        self.supports_data = supports_data;
        self
    }

    /// Cross every existing variant with every value of `axis`.
    ///
    /// The axis value is the outer loop, so an axis expanded later varies more
    /// slowly in [`variants`](Self::variants) than the ones before it. On error
    /// the family is left as it was.
    pub fn expand<A: StateAxis + ?Sized>(&mut self, axis: &A) -> Result<&mut Self, BlockError> {
        let key = axis.key();
        let domain = axis.domain();
        if domain.is_empty() {
            return Err(BlockError::EmptyDomain {
                key: key.to_owned(),
            });
        }

        let mut expanded = Vec::with_capacity(self.variants.len() * domain.len());
        for value in &domain {
            for variant in &self.variants {
                let mut block = variant.clone();
                block.set_state(key, value.clone())?;
                expanded.push(block);
            }
        }

        debug!(
            "Expanded {} over '{}': {} -> {} variants",
            self.default_variant(),
            key,
            self.variants.len(),
            expanded.len()
        );
        self.variants = expanded;
        Ok(self)
    }

    /// First variant whose states include every `(key, value)` pair.
    pub fn find(&self, states: &[(&str, StateValue)]) -> Option<&BlockDescriptor> {
        self.variants.iter().find(|variant| {
            states
                .iter()
                .all(|(key, value)| variant.state(key) == Some(value))
        })
    }
}
