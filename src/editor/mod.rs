//! Pure, copy-on-write mutation operations over block trees.
//!
//! Every operation takes the current root block plus a path of input ids
//! leading from the root to the target, returns a new root, and leaves the
//! input tree untouched. The hosting UI merely replaces its reference with
//! the returned value, so tree snapshots held elsewhere are never mutated
//! in place.
//!
//! Operations preserve the model invariants: an operator block always
//! exposes exactly one trailing empty operand slot until its `max_inputs`
//! bound is reached, operand labels are numbered in attachment order, and
//! `param_N` slots stay contiguous with `parameter_count` equal to their
//! count.

use crate::block::{next_slot_id, Block, BlockId, BlockInput, BlockKind};
use crate::condition::Comparator;
use crate::error::EditError;

/// Deep-clones a template into a fresh block ready for attachment: new ids
/// throughout, literal values cleared, and empty accept-sets defaulted to
/// value-only.
pub fn instantiate(template: &Block) -> Block {
    let mut block = template.clone();
    reset(&mut block);
    block
}

fn reset(block: &mut Block) {
    block.id = BlockId::next();
    for input in &mut block.inputs {
        input.value = String::new();
        if input.accepts.is_empty() {
            input.accepts = vec![BlockKind::Value];
        }
        if let Some(child) = &mut input.connected {
            reset(child);
        }
    }
}

/// Attaches an instantiated copy of `template` to the slot `slot_id` on
/// the block addressed by `path`.
///
/// Attaching into an operator's trailing growth slot appends a fresh empty
/// slot, unless the operator's `max_inputs` bound is now reached, and
/// renumbers operand labels in attachment order.
pub fn attach(
    root: &Block,
    path: &[&str],
    slot_id: &str,
    template: &Block,
) -> Result<Block, EditError> {
    let mut next = root.clone();
    let owner = block_at_path_mut(&mut next, path)?;
    let owner_id = owner.id.to_string();

    if owner.kind == BlockKind::Operator {
        if let Some(max_inputs) = owner.properties.max_inputs {
            if owner.connected_count() >= max_inputs {
                return Err(EditError::OperatorFull {
                    block_id: owner_id,
                    max_inputs,
                });
            }
        }
    }

    let slot = owner
        .input_mut(slot_id)
        .ok_or_else(|| EditError::SlotNotFound {
            block_id: owner_id,
            slot_id: slot_id.to_string(),
        })?;
    if slot.connected.is_some() {
        return Err(EditError::SlotOccupied {
            slot_id: slot_id.to_string(),
        });
    }
    if !slot.accepts_kind(template.kind) {
        return Err(EditError::KindNotAccepted {
            slot_id: slot_id.to_string(),
            kind: template.kind.to_string(),
        });
    }
    slot.connected = Some(Box::new(instantiate(template)));

    if owner.kind == BlockKind::Operator {
        maintain_growth(owner);
    }
    Ok(next)
}

/// Detaches the block connected at `slot_id` on the block addressed by
/// `path`. The detached subtree is discarded.
///
/// On operators, the slot list is rebuilt as the still-connected slots,
/// relabeled `Condition 1..k`, followed by exactly one fresh empty growth
/// slot.
pub fn detach(root: &Block, path: &[&str], slot_id: &str) -> Result<Block, EditError> {
    let mut next = root.clone();
    let owner = block_at_path_mut(&mut next, path)?;
    let owner_id = owner.id.to_string();

    let slot = owner
        .input_mut(slot_id)
        .ok_or_else(|| EditError::SlotNotFound {
            block_id: owner_id,
            slot_id: slot_id.to_string(),
        })?;
    slot.connected = None;

    if owner.kind == BlockKind::Operator {
        maintain_growth(owner);
    }
    Ok(next)
}

/// Sets the literal value on the addressed slot. Never touches `connected`.
pub fn set_value(
    root: &Block,
    path: &[&str],
    slot_id: &str,
    value: &str,
) -> Result<Block, EditError> {
    let mut next = root.clone();
    let owner = block_at_path_mut(&mut next, path)?;
    let owner_id = owner.id.to_string();

    let slot = owner
        .input_mut(slot_id)
        .ok_or_else(|| EditError::SlotNotFound {
            block_id: owner_id,
            slot_id: slot_id.to_string(),
        })?;
    slot.value = value.to_string();
    Ok(next)
}

/// Sets the comparator on the addressed numeric-test slot. Pass an empty
/// path for the common case of a slot on the root block itself.
pub fn set_comparator(
    root: &Block,
    path: &[&str],
    slot_id: &str,
    comparator: Comparator,
) -> Result<Block, EditError> {
    let mut next = root.clone();
    let owner = block_at_path_mut(&mut next, path)?;
    let owner_id = owner.id.to_string();

    let slot = owner
        .input_mut(slot_id)
        .ok_or_else(|| EditError::SlotNotFound {
            block_id: owner_id,
            slot_id: slot_id.to_string(),
        })?;
    slot.comparator = Some(comparator);
    Ok(next)
}

/// Appends the next `param_N` slot to the block addressed by `path`,
/// immediately after the last existing parameter slot, and increments the
/// block's `parameter_count`.
pub fn add_parameter_slot(root: &Block, path: &[&str]) -> Result<Block, EditError> {
    let mut next = root.clone();
    let block = block_at_path_mut(&mut next, path)?;

    let count = block.properties.parameter_count;
    let slot = BlockInput::literal(
        &format!("param_{count}"),
        &format!("Parameter {}", count + 1),
    );
    let position = block
        .inputs
        .iter()
        .rposition(|input| input.id.starts_with("param_"))
        .map(|index| index + 1)
        .unwrap_or(block.inputs.len());
    block.inputs.insert(position, slot);
    block.properties.parameter_count = count + 1;
    Ok(next)
}

/// Walks a path of input ids from `root`, descending through connected
/// blocks, and returns the block the path addresses.
fn block_at_path_mut<'a>(root: &'a mut Block, path: &[&str]) -> Result<&'a mut Block, EditError> {
    let mut current = root;
    for segment in path {
        current = current
            .input_mut(segment)
            .and_then(|slot| slot.connected.as_deref_mut())
            .ok_or_else(|| EditError::PathNotFound {
                segment: segment.to_string(),
            })?;
    }
    Ok(current)
}

/// Restores the operator growth invariant after a connection change:
/// empty operand slots are dropped, one fresh growth slot is appended
/// unless `max_inputs` connected slots already exist, and operand labels
/// are renumbered in attachment order.
fn maintain_growth(owner: &mut Block) {
    owner
        .inputs
        .retain(|input| input.connected.is_some() || !input.is_operand_slot());

    let connected = owner.connected_count();
    let at_capacity = owner
        .properties
        .max_inputs
        .is_some_and(|max_inputs| connected >= max_inputs);
    if !at_capacity {
        owner
            .inputs
            .push(BlockInput::operand(&next_slot_id(), ""));
    }

    let mut n = 0;
    for input in owner.inputs.iter_mut().filter(|input| input.is_operand_slot()) {
        n += 1;
        input.label = format!("Condition {n}");
    }
}
