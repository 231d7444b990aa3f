//! Schema command implementation.
//!
//! The `nocturne schema` command prints a JSON Schema for the flow
//! definition file format, enabling IDE autocomplete and validation.

use schemars::schema_for;

use crate::config::FlowDefinition;
use crate::error::{NocturneError, Result};

/// Execute the schema command.
pub fn execute() -> Result<()> {
    let schema = schema_for!(FlowDefinition);
    let json =
        serde_json::to_string_pretty(&schema).map_err(|e| NocturneError::Other(e.into()))?;
    println!("{}", json);
    Ok(())
}
