use super::ChainId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparator applied by a [`ReturnValueTest`] against an on-chain read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<=")]
    LessThanOrEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "==")]
    Equal,
}

impl Comparator {
    pub fn as_symbol(self) -> &'static str {
        match self {
            Comparator::GreaterThanOrEqual => ">=",
            Comparator::GreaterThan => ">",
            Comparator::LessThanOrEqual => "<=",
            Comparator::LessThan => "<",
            Comparator::Equal => "==",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">=" => Some(Comparator::GreaterThanOrEqual),
            ">" => Some(Comparator::GreaterThan),
            "<=" => Some(Comparator::LessThanOrEqual),
            "<" => Some(Comparator::LessThan),
            "==" => Some(Comparator::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_symbol())
    }
}

/// Boolean combinator of a [`CompoundCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoolOperator {
    And,
    Or,
    Not,
}

impl fmt::Display for BoolOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoolOperator::And => "and",
            BoolOperator::Or => "or",
            BoolOperator::Not => "not",
        };
        write!(f, "{name}")
    }
}

/// Standard contract interface a contract condition may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardContractType {
    #[serde(rename = "ERC20")]
    Erc20,
    #[serde(rename = "ERC721")]
    Erc721,
    #[serde(rename = "ERC1155")]
    Erc1155,
}

/// A `(comparator, value)` predicate asserted against the result of an
/// on-chain read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnValueTest {
    pub comparator: Comparator,
    pub value: i64,
}

impl Default for ReturnValueTest {
    fn default() -> Self {
        ReturnValueTest {
            comparator: Comparator::GreaterThanOrEqual,
            value: 0,
        }
    }
}

/// The compiled condition handed to the decryption network.
///
/// Serializes to the condition-document JSON: internally tagged on
/// `conditionType`, camelCase keys, keys in construction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "conditionType", rename_all = "camelCase")]
pub enum Condition {
    Time(TimeCondition),
    Rpc(RpcCondition),
    Contract(ContractCondition),
    Compound(CompoundCondition),
}

impl Condition {
    /// Renders the condition document: two-space indentation, stable key
    /// order as constructed.
    pub fn to_document(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A block-timestamp predicate on a chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeCondition {
    pub chain: ChainId,
    pub method: String,
    pub return_value_test: ReturnValueTest,
}

/// A native-balance predicate answered over RPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcCondition {
    pub chain: ChainId,
    pub method: String,
    pub parameters: Vec<String>,
    pub return_value_test: ReturnValueTest,
}

/// A predicate over an arbitrary contract call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCondition {
    pub chain: ChainId,
    pub contract_address: String,
    pub method: String,
    pub parameters: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_contract_type: Option<StandardContractType>,
    pub return_value_test: ReturnValueTest,
}

/// A boolean combinator over other conditions, operand order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundCondition {
    pub operator: BoolOperator,
    pub operands: Vec<Condition>,
}
