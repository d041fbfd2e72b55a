//! Block type registry: block families, state expansion, and the flattened
//! combined-id (`family << 4 | data`) lookup table.

pub mod combined;
pub mod descriptor;
pub mod error;
pub mod family;
pub mod kind;
pub mod missing;
pub mod registry;
pub mod state;
pub mod vanilla;

pub use combined::{CombinedId, DataOffset, FamilyId, FAMILY_CAPACITY};
pub use descriptor::BlockDescriptor;
pub use error::BlockError;
pub use family::BlockFamily;
pub use kind::BlockKind;
pub use missing::missing_block;
pub use registry::{BlockRegistry, FinalizeReport};
pub use state::{Axis, StateAxis, StateMap, StateType, StateValue};
