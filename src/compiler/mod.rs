//! Deterministic translation of a block workspace into a condition.
//!
//! Compilation is total: an empty or incomplete composition yields an
//! absent condition rather than an error. Errors are reserved for values
//! the user explicitly entered that can never become valid, so no
//! condition is ever silently rewritten to mean something other than what
//! the tree encodes. Defaults apply only where nothing was entered at all.

use crate::block::{Block, BlockInput, BlockKind, ConditionKind, Workspace};
use crate::condition::{
    BoolOperator, ChainId, Comparator, CompoundCondition, Condition, ContractCondition,
    ReturnValueTest, RpcCondition, TimeCondition,
};
use crate::error::CompileError;
use tracing::warn;

/// Compiles a [`Workspace`] into the condition handed to the decryption
/// network.
pub struct Compiler<'a> {
    workspace: &'a Workspace,
}

impl<'a> Compiler<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Compiler { workspace }
    }

    /// Derives the condition for the workspace's root block, if any.
    ///
    /// Calling this twice on an unmutated workspace yields structurally
    /// equal results.
    pub fn compile(&self) -> Result<Option<Condition>, CompileError> {
        match self.root() {
            Some(root) => self.compile_block(root),
            None => Ok(None),
        }
    }

    /// The root is the first condition- or operator-kind block not owned
    /// by any other block. Top-level blocks are exactly the workspace
    /// entries, so ownership needs no reachability scan.
    fn root(&self) -> Option<&Block> {
        self.workspace
            .blocks
            .iter()
            .find(|block| matches!(block.kind, BlockKind::Condition | BlockKind::Operator))
    }

    fn compile_block(&self, block: &Block) -> Result<Option<Condition>, CompileError> {
        match block.kind {
            BlockKind::Operator => self.compile_operator(block),
            BlockKind::Condition => self.compile_condition(block),
            // A bare value block has no meaning on its own.
            BlockKind::Value => Ok(None),
        }
    }

    fn compile_operator(&self, block: &Block) -> Result<Option<Condition>, CompileError> {
        let mut operands = Vec::new();
        for input in &block.inputs {
            if let Some(child) = &input.connected {
                if let Some(condition) = self.compile_block(child)? {
                    operands.push(condition);
                }
            }
        }
        if operands.is_empty() {
            return Ok(None);
        }
        let operator = block.properties.operator.unwrap_or(BoolOperator::And);
        Ok(Some(Condition::Compound(CompoundCondition {
            operator,
            operands,
        })))
    }

    fn compile_condition(&self, block: &Block) -> Result<Option<Condition>, CompileError> {
        match block.properties.condition_type {
            Some(ConditionKind::Time) => self.compile_time(block),
            Some(ConditionKind::Rpc) => self.compile_rpc(block),
            Some(ConditionKind::Contract) => self.compile_contract(block),
            // A condition block without a type cannot be translated.
            None => Ok(None),
        }
    }

    fn compile_time(&self, block: &Block) -> Result<Option<Condition>, CompileError> {
        let chain = resolve_chain(block.input("chain"))?;
        let return_value_test = numeric_test(block.input("minTimestamp"))?;
        Ok(Some(Condition::Time(TimeCondition {
            chain,
            method: "blocktime".to_string(),
            return_value_test,
        })))
    }

    fn compile_rpc(&self, block: &Block) -> Result<Option<Condition>, CompileError> {
        let chain = resolve_chain(block.input("chain"))?;
        let return_value_test = numeric_test(block.input("minBalance"))?;
        // eth_getBalance is the sole supported rpc method; its parameters
        // are fixed regardless of anything set on the block.
        Ok(Some(Condition::Rpc(RpcCondition {
            chain,
            method: "eth_getBalance".to_string(),
            parameters: vec![":userAddress".to_string(), "latest".to_string()],
            return_value_test,
        })))
    }

    fn compile_contract(&self, block: &Block) -> Result<Option<Condition>, CompileError> {
        let chain = resolve_chain(block.input("chain"))?;

        let Some(method) = block
            .properties
            .method
            .as_deref()
            .map(str::trim)
            .filter(|method| !method.is_empty())
        else {
            return Ok(None);
        };

        let contract_address = block
            .input("contractAddress")
            .map(effective_literal)
            .unwrap_or_default();
        if contract_address.is_empty() {
            return Ok(None);
        }

        // functionAbi is carried for hosts that need it but has no field in
        // the emitted document; malformed JSON is only worth a diagnostic.
        if let Some(raw) = &block.properties.function_abi {
            if let Err(err) = serde_json::from_str::<serde_json::Value>(raw) {
                warn!(block = %block.id, %err, "ignoring malformed functionAbi JSON");
            }
        }

        let return_value_test = match block.input("tokenAmount") {
            Some(slot) => numeric_test(Some(slot))?,
            None => match &block.properties.return_value_test {
                Some(raw) => match serde_json::from_value::<ReturnValueTest>(raw.clone()) {
                    Ok(test) => test,
                    Err(err) => {
                        warn!(block = %block.id, %err, "ignoring malformed returnValueTest");
                        return Ok(None);
                    }
                },
                None => ReturnValueTest::default(),
            },
        };

        Ok(Some(Condition::Contract(ContractCondition {
            chain,
            contract_address,
            method: method.to_string(),
            parameters: contract_parameters(block),
            standard_contract_type: block.properties.standard_contract_type,
            return_value_test,
        })))
    }
}

/// A slot's effective literal: the value typed into the slot, or the
/// literal carried by a connected value block.
fn effective_literal(slot: &BlockInput) -> String {
    let typed = slot.value.trim();
    if !typed.is_empty() {
        return typed.to_string();
    }
    match &slot.connected {
        Some(child) if child.kind == BlockKind::Value => child
            .inputs
            .first()
            .map(|input| input.value.trim().to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Resolves the chain for a condition block. An empty slot falls back to
/// Sepolia; an entered value must name a supported chain.
fn resolve_chain(slot: Option<&BlockInput>) -> Result<ChainId, CompileError> {
    let raw = slot.map(effective_literal).unwrap_or_default();
    if raw.is_empty() {
        return Ok(ChainId::default());
    }
    ChainId::from_entered(&raw)
}

/// Builds the numeric test for a slot. An empty or missing slot defaults
/// to `>= 0`; an entered value must parse as an integer.
fn numeric_test(slot: Option<&BlockInput>) -> Result<ReturnValueTest, CompileError> {
    let Some(slot) = slot else {
        return Ok(ReturnValueTest::default());
    };
    let comparator = slot.comparator.unwrap_or(Comparator::GreaterThanOrEqual);
    let raw = effective_literal(slot);
    if raw.is_empty() {
        return Ok(ReturnValueTest {
            comparator,
            value: 0,
        });
    }
    let value = raw
        .parse::<i64>()
        .map_err(|_| CompileError::InvalidNumericValue {
            slot_id: slot.id.clone(),
            value: raw.clone(),
        })?;
    Ok(ReturnValueTest { comparator, value })
}

/// Parameters for a contract call, from the block's free-text JSON
/// property. Malformed JSON is logged and treated as unset.
fn contract_parameters(block: &Block) -> Vec<serde_json::Value> {
    let fallback = || vec![serde_json::Value::String(":userAddress".to_string())];
    let Some(raw) = &block.properties.parameters else {
        return fallback();
    };
    match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
        Ok(parameters) => parameters,
        Err(err) => {
            warn!(block = %block.id, %err, "ignoring malformed parameters JSON");
            fallback()
        }
    }
}
