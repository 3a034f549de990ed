use super::BlockId;
use crate::condition::{BoolOperator, Comparator, StandardContractType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a block, which determines its capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Compiles into a leaf condition (time, rpc or contract).
    Condition,
    /// Combines connected conditions with a boolean operator.
    Operator,
    /// Carries a literal that can feed a value slot.
    Value,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Condition => "condition",
            BlockKind::Operator => "operator",
            BlockKind::Value => "value",
        };
        write!(f, "{name}")
    }
}

/// Which condition family a condition-kind block compiles into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    Time,
    Rpc,
    Contract,
}

/// Kind-specific configuration carried by a block.
///
/// Fields that do not apply to a block's kind are simply left unset;
/// `parameter_count` always equals the number of `param_*` slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<ConditionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_contract_type: Option<StandardContractType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<BoolOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_inputs: Option<usize>,
    pub parameter_count: usize,
    /// Free-text JSON entered by the user; parsed at compile time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    /// Free-text JSON entered by the user; parsed at compile time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_abi: Option<String>,
    /// Verbatim fallback test for contract conditions without a
    /// `tokenAmount` slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_value_test: Option<serde_json::Value>,
}

/// A named attachment slot on a block.
///
/// A slot holds either a literal `value` or a `connected` child block,
/// never both meaningfully. Slot order is semantically significant: the
/// compiler treats operator slots as positional operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInput {
    /// Slot identifier, unique within the owning block.
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// Block kinds this slot accepts when a child is attached.
    #[serde(default)]
    pub accepts: Vec<BlockKind>,
    /// Literal entered directly into the slot.
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparator: Option<Comparator>,
    /// Exclusively owned child subtree. Ownership is strict parent to
    /// child, which makes cycles unrepresentable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<Box<Block>>,
}

impl BlockInput {
    /// A slot that takes a directly entered literal.
    pub fn literal(id: &str, label: &str) -> Self {
        BlockInput {
            id: id.to_string(),
            label: label.to_string(),
            accepts: vec![BlockKind::Value],
            value: String::new(),
            comparator: None,
            connected: None,
        }
    }

    /// A literal slot carrying a comparator for numeric tests.
    pub fn numeric_test(id: &str, label: &str) -> Self {
        BlockInput {
            comparator: Some(Comparator::GreaterThanOrEqual),
            ..Self::literal(id, label)
        }
    }

    /// An operand slot accepting condition and operator blocks.
    pub fn operand(id: &str, label: &str) -> Self {
        BlockInput {
            accepts: vec![BlockKind::Condition, BlockKind::Operator],
            ..Self::literal(id, label)
        }
    }

    /// Whether this slot takes condition/operator operands.
    pub fn is_operand_slot(&self) -> bool {
        self.accepts.contains(&BlockKind::Condition)
    }

    pub fn accepts_kind(&self, kind: BlockKind) -> bool {
        self.accepts.contains(&kind)
    }
}

/// A node in the user-authored visual tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    /// Display metadata, ignored by the compiler.
    #[serde(default)]
    pub category: String,
    /// Display metadata, ignored by the compiler.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub properties: BlockProperties,
    /// Ordered slots; order is positional for operator operands.
    #[serde(default)]
    pub inputs: Vec<BlockInput>,
}

impl Block {
    pub fn input(&self, slot_id: &str) -> Option<&BlockInput> {
        self.inputs.iter().find(|input| input.id == slot_id)
    }

    pub fn input_mut(&mut self, slot_id: &str) -> Option<&mut BlockInput> {
        self.inputs.iter_mut().find(|input| input.id == slot_id)
    }

    /// Number of slots currently holding a connected block.
    pub fn connected_count(&self) -> usize {
        self.inputs
            .iter()
            .filter(|input| input.connected.is_some())
            .count()
    }
}

/// The ordered collection of top-level blocks on the canvas.
///
/// Top-level blocks are exactly the entries of this collection; everything
/// else in a tree is owned through some slot's `connected` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub blocks: Vec<Block>,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace::default()
    }

    /// Instantiates a template as a new top-level block and returns the
    /// updated workspace. Like the editor operations, this is pure.
    pub fn spawn(&self, template: &Block) -> Workspace {
        let mut next = self.clone();
        next.blocks.push(crate::editor::instantiate(template));
        next
    }

    /// Replaces the top-level block at `index` with an edited version.
    pub fn with_root(&self, index: usize, root: Block) -> Workspace {
        let mut next = self.clone();
        next.blocks[index] = root;
        next
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
