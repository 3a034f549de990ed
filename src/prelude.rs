//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the jouken
//! crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use jouken::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::standard();
//! let workspace = Workspace::new().spawn(catalog.get("timeCondition").unwrap());
//!
//! if let Some(condition) = Compiler::new(&workspace).compile()? {
//!     println!("{}", condition.to_document()?);
//! }
//! # Ok(())
//! # }
//! ```

// Core compilation
pub use crate::compiler::Compiler;

// Block model and template catalog
pub use crate::block::{
    Block, BlockId, BlockInput, BlockKind, BlockProperties, Catalog, ConditionKind, IntoWorkspace,
    Workspace,
};

// Editor operations
pub use crate::editor;

// Condition AST types
pub use crate::condition::{
    BoolOperator, ChainId, Comparator, CompoundCondition, Condition, ContractCondition,
    ReturnValueTest, RpcCondition, StandardContractType, TimeCondition,
};

// Error types
pub use crate::error::{CompileError, ConversionError, EditError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
