use anyhow::{Context, Result};
use std::fs;

// Prints the config JSON schema, or writes it to the path given as first argument.
fn main() -> Result<()> {
    let schema = artboard_ruler::Config::json_schema();
    let json = serde_json::to_string_pretty(&schema)?;
    match std::env::args_os().nth(1) {
        Some(path) => fs::write(&path, json)
            .with_context(|| format!("Failed to write schema to {}", path.to_string_lossy()))?,
        None => println!("{json}"),
    }
    Ok(())
}
