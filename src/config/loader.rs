//! Flow definition discovery and loading.
//!
//! Definitions come from two places: YAML files on disk, and the built-in
//! flows embedded in the binary at compile time. Both go through the same
//! parse-then-validate path.

use include_dir::{include_dir, Dir};
use std::path::Path;

use crate::config::schema::FlowDefinition;
use crate::error::{NocturneError, Result};

/// Built-in flow definitions embedded at compile time.
static FLOWS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/flows");

/// Load and validate a flow definition from a file on disk.
pub fn load_file(path: &Path) -> Result<FlowDefinition> {
    if !path.exists() {
        return Err(NocturneError::DefinitionNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let definition: FlowDefinition =
        serde_yaml::from_str(&content).map_err(|e| NocturneError::DefinitionParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    definition.validate()?;
    Ok(definition)
}

/// Load a built-in flow by name.
pub fn load_builtin(name: &str) -> Result<FlowDefinition> {
    let file = FLOWS_DIR
        .get_file(format!("{}.yml", name))
        .ok_or_else(|| NocturneError::UnknownFlow {
            name: name.to_string(),
        })?;

    let content = file
        .contents_utf8()
        .ok_or_else(|| NocturneError::DefinitionParseError {
            path: file.path().to_path_buf(),
            message: "Invalid UTF-8".to_string(),
        })?;

    let definition: FlowDefinition =
        serde_yaml::from_str(content).map_err(|e| NocturneError::DefinitionParseError {
            path: file.path().to_path_buf(),
            message: e.to_string(),
        })?;

    definition.validate()?;
    Ok(definition)
}

/// All built-in flows, sorted by name for stable listing.
pub fn builtin_flows() -> Result<Vec<FlowDefinition>> {
    let mut flows = Vec::new();

    for file in FLOWS_DIR.files() {
        let is_yaml = file
            .path()
            .extension()
            .is_some_and(|ext| ext == "yml" || ext == "yaml");
        if !is_yaml {
            continue;
        }

        let content = file
            .contents_utf8()
            .ok_or_else(|| NocturneError::DefinitionParseError {
                path: file.path().to_path_buf(),
                message: "Invalid UTF-8".to_string(),
            })?;

        let definition: FlowDefinition =
            serde_yaml::from_str(content).map_err(|e| NocturneError::DefinitionParseError {
                path: file.path().to_path_buf(),
                message: e.to_string(),
            })?;

        definition.validate()?;
        flows.push(definition);
    }

    flows.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(flows)
}

/// Resolve a flow reference: a path to a YAML file, or a built-in name.
pub fn resolve(reference: &str) -> Result<FlowDefinition> {
    let path = Path::new(reference);
    let looks_like_path = path.exists()
        || path
            .extension()
            .is_some_and(|ext| ext == "yml" || ext == "yaml");

    if looks_like_path {
        load_file(path)
    } else {
        load_builtin(reference)
    }
}
