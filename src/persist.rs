//! Output file handling. Writes go through a temp file and rename so a
//! crashed run never leaves a truncated database behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::assemble::CanonicalPlayer;

const DEFAULT_OUTPUT: &str = "data/players.json";

pub fn default_output_path() -> PathBuf {
    match std::env::var("ROSTER_OUTPUT") {
        Ok(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
        _ => PathBuf::from(DEFAULT_OUTPUT),
    }
}

pub fn write_players(path: &Path, players: &[CanonicalPlayer]) -> Result<()> {
    write_json(path, &players)
}

pub fn load_players(path: &Path) -> Result<Vec<CanonicalPlayer>> {
    load_json(path)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swap {}", path.display()))?;
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}
