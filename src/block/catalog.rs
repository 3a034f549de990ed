use super::model::{Block, BlockInput, BlockKind, BlockProperties, ConditionKind};
use super::BlockId;
use crate::condition::{BoolOperator, StandardContractType};
use ahash::AHashMap;

/// The fixed set of block prototypes the editor instantiates from.
///
/// The catalog's shape is the only contract the editor depends on: each
/// template carries a predefined `inputs` skeleton, and `attach` clones
/// from it. Hosts can register their own prototypes with
/// [`Catalog::with_template`].
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: AHashMap<String, Block>,
}

impl Catalog {
    /// The built-in templates: time/rpc/contract conditions, the three
    /// boolean operators, and a literal value block.
    pub fn standard() -> Self {
        let mut templates = AHashMap::new();
        for (name, template) in [
            ("timeCondition", time_condition()),
            ("rpcBalance", rpc_balance()),
            ("contractCall", contract_call()),
            ("erc20BalanceOf", erc20_balance_of()),
            ("andOperator", operator("AND", BoolOperator::And, None)),
            ("orOperator", operator("OR", BoolOperator::Or, None)),
            ("notOperator", operator("NOT", BoolOperator::Not, Some(1))),
            ("literalValue", literal_value()),
        ] {
            templates.insert(name.to_string(), template);
        }
        Catalog { templates }
    }

    pub fn with_template(mut self, name: &str, template: Block) -> Self {
        self.templates.insert(name.to_string(), template);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Block> {
        self.templates.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Templates grouped under a display category.
    pub fn in_category<'a>(&'a self, category: &str) -> Vec<&'a Block> {
        self.templates
            .values()
            .filter(|template| template.category == category)
            .collect()
    }
}

fn condition_block(
    label: &str,
    category: &str,
    condition_type: ConditionKind,
    method: Option<&str>,
    inputs: Vec<BlockInput>,
) -> Block {
    Block {
        id: BlockId::next(),
        kind: BlockKind::Condition,
        category: category.to_string(),
        label: label.to_string(),
        properties: BlockProperties {
            condition_type: Some(condition_type),
            method: method.map(str::to_string),
            ..BlockProperties::default()
        },
        inputs,
    }
}

fn time_condition() -> Block {
    condition_block(
        "Time Lock",
        "time",
        ConditionKind::Time,
        Some("blocktime"),
        vec![
            BlockInput::literal("chain", "Chain"),
            BlockInput::numeric_test("minTimestamp", "Minimum Timestamp"),
        ],
    )
}

fn rpc_balance() -> Block {
    condition_block(
        "Wallet Balance",
        "rpc",
        ConditionKind::Rpc,
        Some("eth_getBalance"),
        vec![
            BlockInput::literal("chain", "Chain"),
            BlockInput::numeric_test("minBalance", "Minimum Balance"),
        ],
    )
}

fn contract_call() -> Block {
    condition_block(
        "Contract Call",
        "contract",
        ConditionKind::Contract,
        None,
        vec![
            BlockInput::literal("chain", "Chain"),
            BlockInput::literal("contractAddress", "Contract Address"),
            BlockInput::numeric_test("tokenAmount", "Token Amount"),
        ],
    )
}

fn erc20_balance_of() -> Block {
    let mut template = condition_block(
        "ERC-20 Balance",
        "contract",
        ConditionKind::Contract,
        Some("balanceOf"),
        vec![
            BlockInput::literal("chain", "Chain"),
            BlockInput::literal("contractAddress", "Contract Address"),
            BlockInput::numeric_test("tokenAmount", "Token Amount"),
        ],
    );
    template.properties.standard_contract_type = Some(StandardContractType::Erc20);
    template
}

fn operator(label: &str, operator: BoolOperator, max_inputs: Option<usize>) -> Block {
    Block {
        id: BlockId::next(),
        kind: BlockKind::Operator,
        category: "operator".to_string(),
        label: label.to_string(),
        properties: BlockProperties {
            operator: Some(operator),
            max_inputs,
            ..BlockProperties::default()
        },
        inputs: vec![BlockInput::operand("condition-0", "Condition 1")],
    }
}

fn literal_value() -> Block {
    Block {
        id: BlockId::next(),
        kind: BlockKind::Value,
        category: "value".to_string(),
        label: "Value".to_string(),
        properties: BlockProperties::default(),
        inputs: vec![BlockInput::literal("value", "Value")],
    }
}
