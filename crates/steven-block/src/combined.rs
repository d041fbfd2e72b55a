//! Combined block identifiers: `family << 4 | data`.
//!
//! This layout is what chunk storage and the wire protocol carry, so it must
//! stay bit-exact: family ids in the high 12 bits, the legacy 4-bit metadata
//! field in the low bits.

use std::fmt;

/// Maximum number of block families a registry can hold.
pub const FAMILY_CAPACITY: usize = 256;

/// Width of the data (metadata) field.
pub const DATA_BITS: u32 = 4;

/// Largest data offset representable in [`DATA_BITS`].
pub const MAX_DATA_OFFSET: u8 = (1 << DATA_BITS) - 1;

/// Number of slots in the combined-id lookup table.
pub const TABLE_SIZE: usize = 1 << 16;

/// Identifier of a block family, assigned sequentially on allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FamilyId(u8);

impl FamilyId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Combined id of the family's offset-0 slot.
    pub const fn base(self) -> CombinedId {
        CombinedId((self.0 as u16) << DATA_BITS)
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a variant lives within its family's 16 data slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataOffset {
    At(u8),
    /// The state combination has no legacy data value; finalize skips it.
    NotAddressable,
}

impl DataOffset {
    pub const fn get(self) -> Option<u8> {
        match self {
            DataOffset::At(offset) => Some(offset),
            DataOffset::NotAddressable => None,
        }
    }

    pub const fn is_addressable(self) -> bool {
        matches!(self, DataOffset::At(_))
    }
}

/// A 16-bit block identifier as stored in chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CombinedId(pub u16);

impl CombinedId {
    /// Returns `None` if `offset` does not fit in the data field.
    pub const fn new(family: FamilyId, offset: u8) -> Option<Self> {
        if offset > MAX_DATA_OFFSET {
            return None;
        }
        Some(Self(((family.0 as u16) << DATA_BITS) | offset as u16))
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Raw high 12 bits. May exceed the family capacity for ids read off disk.
    pub const fn family_bits(self) -> u16 {
        self.0 >> DATA_BITS
    }

    /// The family part, if it is within [`FAMILY_CAPACITY`].
    pub fn family(self) -> Option<FamilyId> {
        u8::try_from(self.family_bits()).ok().map(FamilyId)
    }

    pub const fn offset(self) -> u8 {
        (self.0 & MAX_DATA_OFFSET as u16) as u8
    }
}

impl From<u16> for CombinedId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<CombinedId> for u16 {
    fn from(id: CombinedId) -> Self {
        id.0
    }
}

impl fmt::Display for CombinedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.family_bits(), self.offset())
    }
}
