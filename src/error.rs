use crate::condition::ChainId;
use thiserror::Error;

/// Errors that can occur while mutating a block tree.
///
/// Editor operations are pure; an error means the requested mutation was
/// rejected and the caller's tree is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Path segment '{segment}' does not address a connected block")]
    PathNotFound { segment: String },

    #[error("Block '{block_id}' has no input slot '{slot_id}'")]
    SlotNotFound { block_id: String, slot_id: String },

    #[error("Slot '{slot_id}' already holds a connected block; detach it first")]
    SlotOccupied { slot_id: String },

    #[error("Slot '{slot_id}' does not accept '{kind}' blocks")]
    KindNotAccepted { slot_id: String, kind: String },

    #[error("Operator block '{block_id}' already has its maximum of {max_inputs} inputs")]
    OperatorFull { block_id: String, max_inputs: usize },
}

/// Errors that can occur while compiling a block tree into a condition.
///
/// Compilation is total over well-formed trees: incomplete compositions
/// yield an absent condition, not an error. Errors are reserved for values
/// the user explicitly entered that can never become valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(
        "Chain id '{value}' is not supported; valid chain ids are {allowed}",
        allowed = ChainId::allowed_list()
    )]
    UnsupportedChain { value: String },

    #[error("Slot '{slot_id}' holds '{value}', which is not a valid integer")]
    InvalidNumericValue { slot_id: String, value: String },
}

/// Errors that can occur when converting a host UI format into a [`Workspace`].
///
/// [`Workspace`]: crate::block::Workspace
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid workspace data: {0}")]
    ValidationError(String),
}
