use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use commitkit_core::config::EnumConfig;
use commitkit_core::protocol;
use commitkit_core::registry::EnumRegistry;
use commitkit_core::value::Value;
use tracing::debug;

pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let v: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| anyhow!("invalid json in {}: {e}", path.display()))?;
    Ok(v)
}

/// Read a value file in the tagged JSON form.
pub fn read_value<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let json = read_json_file(path)?;
    serde_json::from_value(json).map_err(|e| anyhow!("invalid value in {}: {e}", path.display()))
}

/// Read an action list: either a `seq` value or a bare JSON array of values.
pub fn read_actions<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let json = read_json_file(path)?;
    let value: Value = if json.is_array() {
        Value::Sequence(
            serde_json::from_value(json)
                .map_err(|e| anyhow!("invalid action list in {}: {e}", path.display()))?,
        )
    } else {
        serde_json::from_value(json).map_err(|e| anyhow!("invalid value in {}: {e}", path.display()))?
    };

    match value {
        Value::Sequence(items) => Ok(items),
        other => Err(anyhow!(
            "{} must hold a sequence of actions, found {}",
            path.display(),
            other.kind()
        )),
    }
}

/// Protocol enums, then entries from `enums_path` (overriding same-named types).
pub fn load_registry(enums_path: Option<&str>) -> Result<EnumRegistry> {
    let mut reg = protocol::registry()?;
    if let Some(p) = enums_path {
        let raw = fs::read(p).with_context(|| format!("failed to read enum config {p}"))?;
        let from_file = EnumConfig::from_json_slice(&raw)?.to_registry()?;
        debug!(path = p, enums = from_file.len(), "loaded enum config file");
        reg.merge(&from_file);
    }
    Ok(reg)
}
