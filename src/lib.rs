//! # Jouken - Block-Based Access-Control Condition Engine
//!
//! **Jouken** models the nested block tree a user assembles when composing a
//! "release this secret only if chain-state predicate P holds" rule, and
//! deterministically compiles that tree into the canonical condition
//! document consumed by an external threshold-decryption engine.
//!
//! ## Core Workflow
//!
//! The engine is UI-agnostic. It operates on a canonical [`Workspace`] of
//! [`Block`] values; the hosting canvas merely holds the latest tree. The
//! primary workflow is:
//!
//! 1.  **Instantiate**: Clone block prototypes from the [`Catalog`] as the
//!     user drops them, via [`Workspace::spawn`] or [`editor::attach`].
//! 2.  **Edit**: Apply the pure [`editor`] operations on each user action.
//!     Every operation returns a new root block and leaves the previous
//!     tree untouched, so earlier snapshots stay valid.
//! 3.  **Compile**: Re-run the [`Compiler`] after every mutation. It turns
//!     the tree into a typed [`Condition`] AST, or reports that the
//!     composition does not encode one yet.
//! 4.  **Hand off**: Serialize the condition with
//!     [`Condition::to_document`] and pass it, unmodified, to the
//!     encryption collaborator and the display widget.
//!
//! [`Workspace`]: block::Workspace
//! [`Block`]: block::Block
//! [`Catalog`]: block::Catalog
//! [`Workspace::spawn`]: block::Workspace::spawn
//! [`Compiler`]: compiler::Compiler
//! [`Condition`]: condition::Condition
//! [`Condition::to_document`]: condition::Condition::to_document
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jouken::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let catalog = Catalog::standard();
//!
//!     // Drop an AND operator onto the empty canvas.
//!     let workspace = Workspace::new().spawn(catalog.get("andOperator").unwrap());
//!     let mut root = workspace.blocks[0].clone();
//!
//!     // Attach a time lock into the operator's first operand slot and
//!     // fill in its fields.
//!     let slot = root.inputs[0].id.clone();
//!     root = editor::attach(&root, &[], &slot, catalog.get("timeCondition").unwrap())?;
//!     root = editor::set_value(&root, &[slot.as_str()], "chain", "11155111")?;
//!     root = editor::set_value(&root, &[slot.as_str()], "minTimestamp", "1700000000")?;
//!
//!     // Re-derive the condition document for display and hand-off.
//!     let workspace = workspace.with_root(0, root);
//!     if let Some(condition) = Compiler::new(&workspace).compile()? {
//!         println!("{}", condition.to_document()?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod block;
pub mod compiler;
pub mod condition;
pub mod editor;
pub mod error;
pub mod prelude;
