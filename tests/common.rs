//! Common test utilities for building block workspaces.
use jouken::prelude::*;

/// Workspace with a single time condition: Sepolia, minTimestamp 1700000000.
#[allow(dead_code)]
pub fn time_workspace() -> Workspace {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("timeCondition").unwrap());
    let root = editor::set_value(&workspace.blocks[0], &[], "chain", "11155111").unwrap();
    let root = editor::set_value(&root, &[], "minTimestamp", "1700000000").unwrap();
    workspace.with_root(0, root)
}

/// Workspace with an AND of an rpc balance check and an ERC-20 balanceOf
/// check, both on Polygon.
#[allow(dead_code)]
pub fn and_workspace() -> Workspace {
    let catalog = Catalog::standard();
    let workspace = Workspace::new().spawn(catalog.get("andOperator").unwrap());
    let root = workspace.blocks[0].clone();

    let first = root.inputs[0].id.clone();
    let root = editor::attach(&root, &[], &first, catalog.get("rpcBalance").unwrap()).unwrap();
    let root = editor::set_value(&root, &[first.as_str()], "chain", "137").unwrap();
    let root = editor::set_value(
        &root,
        &[first.as_str()],
        "minBalance",
        "1000000000000000000",
    )
    .unwrap();

    let second = root.inputs[1].id.clone();
    let root =
        editor::attach(&root, &[], &second, catalog.get("erc20BalanceOf").unwrap()).unwrap();
    let root = editor::set_value(&root, &[second.as_str()], "chain", "137").unwrap();
    let root = editor::set_value(
        &root,
        &[second.as_str()],
        "contractAddress",
        "0xABC0000000000000000000000000000000000000",
    )
    .unwrap();
    let root = editor::set_value(&root, &[second.as_str()], "tokenAmount", "5").unwrap();
    let root = editor::set_comparator(
        &root,
        &[second.as_str()],
        "tokenAmount",
        Comparator::GreaterThan,
    )
    .unwrap();

    workspace.with_root(0, root)
}
