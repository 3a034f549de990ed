//! Tests for compiling block workspaces into condition documents.
mod common;
use common::*;
use jouken::prelude::*;
use serde_json::json;

#[test]
fn test_empty_workspace_compiles_to_absent() {
    let workspace = Workspace::new();
    assert_eq!(Compiler::new(&workspace).compile().unwrap(), None);
}

#[test]
fn test_operator_without_operands_is_absent() {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("andOperator").unwrap());
    assert_eq!(Compiler::new(&workspace).compile().unwrap(), None);
}

#[test]
fn test_nested_empty_operators_are_absent() {
    // or(and()) — the inner operator compiles to nothing, so the outer
    // one is left with zero operands and is absent as well.
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("orOperator").unwrap());
    let root = workspace.blocks[0].clone();
    let slot = root.inputs[0].id.clone();
    let root = editor::attach(&root, &[], &slot, catalog.get("andOperator").unwrap()).unwrap();
    let workspace = workspace.with_root(0, root);
    assert_eq!(Compiler::new(&workspace).compile().unwrap(), None);
}

#[test]
fn test_time_condition_document() {
    let condition = Compiler::new(&time_workspace())
        .compile()
        .unwrap()
        .expect("time workspace should compile");
    assert_eq!(
        serde_json::to_value(&condition).unwrap(),
        json!({
            "conditionType": "time",
            "chain": 11155111,
            "method": "blocktime",
            "returnValueTest": { "comparator": ">=", "value": 1700000000i64 }
        })
    );
}

#[test]
fn test_and_of_rpc_and_contract() {
    let condition = Compiler::new(&and_workspace())
        .compile()
        .unwrap()
        .expect("and workspace should compile");
    let Condition::Compound(compound) = condition else {
        panic!("expected a compound condition");
    };
    assert_eq!(compound.operator, BoolOperator::And);
    assert_eq!(compound.operands.len(), 2);

    let Condition::Rpc(rpc) = &compound.operands[0] else {
        panic!("expected the rpc operand first");
    };
    assert_eq!(rpc.chain, ChainId::Polygon);
    assert_eq!(rpc.method, "eth_getBalance");
    assert_eq!(rpc.parameters, vec![":userAddress", "latest"]);
    assert_eq!(
        rpc.return_value_test,
        ReturnValueTest {
            comparator: Comparator::GreaterThanOrEqual,
            value: 1_000_000_000_000_000_000,
        }
    );

    let Condition::Contract(contract) = &compound.operands[1] else {
        panic!("expected the contract operand second");
    };
    assert_eq!(contract.chain, ChainId::Polygon);
    assert_eq!(
        contract.contract_address,
        "0xABC0000000000000000000000000000000000000"
    );
    assert_eq!(contract.method, "balanceOf");
    assert_eq!(
        contract.standard_contract_type,
        Some(StandardContractType::Erc20)
    );
    assert_eq!(
        contract.parameters,
        vec![serde_json::Value::String(":userAddress".to_string())]
    );
    assert_eq!(
        contract.return_value_test,
        ReturnValueTest {
            comparator: Comparator::GreaterThan,
            value: 5,
        }
    );
}

#[test]
fn test_contract_without_method_or_address_is_absent() {
    // The generic contract template carries no method, and its address
    // slot starts empty.
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("contractCall").unwrap());
    assert_eq!(Compiler::new(&workspace).compile().unwrap(), None);
}

#[test]
fn test_absent_operand_is_dropped_from_compound() {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("andOperator").unwrap());
    let root = workspace.blocks[0].clone();

    let first = root.inputs[0].id.clone();
    let root = editor::attach(&root, &[], &first, catalog.get("timeCondition").unwrap()).unwrap();
    let second = root.inputs[1].id.clone();
    let root = editor::attach(&root, &[], &second, catalog.get("contractCall").unwrap()).unwrap();

    let condition = Compiler::new(&workspace.with_root(0, root))
        .compile()
        .unwrap()
        .expect("the time operand alone should survive");
    let Condition::Compound(compound) = condition else {
        panic!("expected a compound condition");
    };
    assert_eq!(compound.operands.len(), 1);
    assert!(matches!(compound.operands[0], Condition::Time(_)));
}

#[test]
fn test_unsupported_chain_is_an_error() {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("timeCondition").unwrap());
    let root = editor::set_value(&workspace.blocks[0], &[], "chain", "999").unwrap();

    let err = Compiler::new(&workspace.with_root(0, root))
        .compile()
        .unwrap_err();
    assert_eq!(
        err,
        CompileError::UnsupportedChain {
            value: "999".to_string()
        }
    );
    let message = err.to_string();
    for id in ["1", "137", "80002", "11155111"] {
        assert!(message.contains(id), "error should enumerate chain id {id}");
    }
}

#[test]
fn test_empty_chain_slot_defaults_to_sepolia() {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("timeCondition").unwrap());
    let condition = Compiler::new(&workspace)
        .compile()
        .unwrap()
        .expect("an untouched time block still compiles");
    let Condition::Time(time) = condition else {
        panic!("expected a time condition");
    };
    assert_eq!(time.chain, ChainId::Sepolia);
    assert_eq!(time.return_value_test, ReturnValueTest::default());
}

#[test]
fn test_non_numeric_test_value_is_an_error() {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("timeCondition").unwrap());
    let root = editor::set_value(&workspace.blocks[0], &[], "minTimestamp", "soon").unwrap();

    let err = Compiler::new(&workspace.with_root(0, root))
        .compile()
        .unwrap_err();
    assert_eq!(
        err,
        CompileError::InvalidNumericValue {
            slot_id: "minTimestamp".to_string(),
            value: "soon".to_string()
        }
    );
}

#[test]
fn test_rpc_parameters_are_fixed() {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("rpcBalance").unwrap());
    let mut root = workspace.blocks[0].clone();
    // A stray parameters property must not leak into the document.
    root.properties.parameters = Some("[\"0xdeadbeef\"]".to_string());

    let condition = Compiler::new(&workspace.with_root(0, root))
        .compile()
        .unwrap()
        .expect("rpc block should compile");
    let Condition::Rpc(rpc) = condition else {
        panic!("expected an rpc condition");
    };
    assert_eq!(rpc.parameters, vec![":userAddress", "latest"]);
}

#[test]
fn test_malformed_parameters_json_falls_back() {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("erc20BalanceOf").unwrap());
    let mut root =
        editor::set_value(&workspace.blocks[0], &[], "contractAddress", "0xABC").unwrap();
    root.properties.parameters = Some("not json".to_string());

    let condition = Compiler::new(&workspace.with_root(0, root))
        .compile()
        .unwrap()
        .expect("the condition itself should still compile");
    let Condition::Contract(contract) = condition else {
        panic!("expected a contract condition");
    };
    assert_eq!(
        contract.parameters,
        vec![serde_json::Value::String(":userAddress".to_string())]
    );
}

#[test]
fn test_value_block_feeds_chain_slot() {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("timeCondition").unwrap());
    let root = editor::attach(
        &workspace.blocks[0],
        &[],
        "chain",
        catalog.get("literalValue").unwrap(),
    )
    .unwrap();
    let root = editor::set_value(&root, &["chain"], "value", "137").unwrap();

    let condition = Compiler::new(&workspace.with_root(0, root))
        .compile()
        .unwrap()
        .expect("time block should compile");
    let Condition::Time(time) = condition else {
        panic!("expected a time condition");
    };
    assert_eq!(time.chain, ChainId::Polygon);
}

#[test]
fn test_compile_is_deterministic() {
    let workspace = and_workspace();
    let compiler = Compiler::new(&workspace);
    let first = compiler.compile().unwrap();
    let second = compiler.compile().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.as_ref().unwrap().to_document().unwrap(),
        second.as_ref().unwrap().to_document().unwrap()
    );
}

#[test]
fn test_detach_then_attach_compiles_identically() {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("orOperator").unwrap());
    let root = workspace.blocks[0].clone();

    let slot = root.inputs[0].id.clone();
    let direct = editor::attach(&root, &[], &slot, catalog.get("timeCondition").unwrap()).unwrap();

    let detached = editor::detach(&direct, &[], &slot).unwrap();
    let growth = detached.inputs[0].id.clone();
    let rebuilt =
        editor::attach(&detached, &[], &growth, catalog.get("timeCondition").unwrap()).unwrap();

    let a = Compiler::new(&workspace.with_root(0, direct.clone()))
        .compile()
        .unwrap();
    let b = Compiler::new(&workspace.with_root(0, rebuilt))
        .compile()
        .unwrap();
    assert_eq!(a, b);
}
