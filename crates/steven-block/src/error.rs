//! Block registry errors.

use thiserror::Error;

use crate::state::StateType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("block family capacity exceeded (limit: {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("{block} has no state, cannot set '{key}'")]
    UnsupportedOperation { block: String, key: String },

    #[error("{block} does not declare state '{key}'")]
    UnknownState { block: String, key: String },

    #[error("state '{key}' of {block} expects {expected}, got {got}")]
    StateTypeMismatch {
        block: String,
        key: String,
        expected: StateType,
        got: StateType,
    },

    #[error("value {value} is not in the domain of state '{key}' of {block}")]
    ValueOutOfDomain {
        block: String,
        key: String,
        value: String,
    },

    #[error("state axis '{key}' has an empty domain")]
    EmptyDomain { key: String },

    #[error("state axis '{key}' is declared more than once")]
    DuplicateState { key: String },

    #[error("invalid block identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("{block} encodes to data offset {offset}, outside [0, 15]")]
    OffsetOutOfRange { block: String, offset: u8 },

    #[error("combined id {combined} claimed by both {first} and {second}")]
    OffsetCollision {
        combined: u16,
        first: String,
        second: String,
    },
}
