use std::path::{Path, PathBuf};

use anyhow::Context;
use toml::{map::Map, Value};

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to run cargo locate-project")?;
    let located = std::str::from_utf8(&output.stdout)
        .context("failed to decode cargo locate-project output")?
        .trim();
    let cargo_path = Path::new(located);

    cargo_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .context("failed to locate workspace dir")
}

pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir()?;
    let config = std::fs::read_to_string(workspace_dir.join(config_name))
        .with_context(|| format!("failed to read {}", config_name))?;

    parse_config(&config)
        .with_context(|| format!("failed to parse {}", config_name))
}

pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir()?;
    let secrets = std::fs::read_to_string(workspace_dir.join("Secrets.toml"))
        .context("failed to read Secrets.toml")?;

    parse_config(&secrets).context("failed to parse Secrets.toml")
}

pub fn parse_config(text: &str) -> anyhow::Result<Map<String, Value>> {
    Ok(toml::from_str::<Map<String, Value>>(text)?)
}

/// Reads `[table] key = "..."`.
pub fn config_str(
    config: &Map<String, Value>,
    table: &str,
    key: &str,
) -> anyhow::Result<String> {
    let value = config
        .get(table)
        .with_context(|| format!("failed to get {} config", table))?
        .get(key)
        .with_context(|| format!("failed to load {} config", key))?
        .as_str()
        .with_context(|| format!("failed to parse {} config", key))?;

    Ok(value.to_string())
}

/// Reads `[table] key = 123`.
pub fn config_integer(
    config: &Map<String, Value>,
    table: &str,
    key: &str,
) -> anyhow::Result<i64> {
    config
        .get(table)
        .with_context(|| format!("failed to get {} config", table))?
        .get(key)
        .with_context(|| format!("failed to load {} config", key))?
        .as_integer()
        .with_context(|| format!("failed to parse {} config", key))
}
