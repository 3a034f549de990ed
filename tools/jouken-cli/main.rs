use clap::Parser;
use jouken::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the canvas export format and are only used here for
// conversion into the canonical workspace.

#[derive(Deserialize)]
struct RawCanvas {
    #[serde(alias = "nodes")]
    blocks: Vec<Block>,
}

impl IntoWorkspace for RawCanvas {
    fn into_workspace(self) -> std::result::Result<Workspace, ConversionError> {
        Ok(Workspace {
            blocks: self.blocks,
        })
    }
}

/// Compiles a block workspace export into a condition document.
#[derive(Parser)]
#[command(name = "jouken-cli", version, about)]
struct Cli {
    /// Path to the workspace JSON file.
    workspace: String,

    /// Print compile timing to stderr.
    #[arg(long)]
    timing: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.workspace)?;
    let canvas: RawCanvas = serde_json::from_str(&content)?;
    let workspace = canvas.into_workspace()?;

    let started = Instant::now();
    let compiled = Compiler::new(&workspace).compile();
    if cli.timing {
        eprintln!("compiled in {:?}", started.elapsed());
    }

    match compiled? {
        Some(condition) => println!("{}", condition.to_document()?),
        None => eprintln!("workspace does not encode a condition"),
    }
    Ok(())
}
