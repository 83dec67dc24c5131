use anyhow::Context;
use std::path::{Path, PathBuf};

/// Resolve the profile directory.
///
/// Priority:
/// 1. `--root` flag / `NEUROFLOW_HOME` env var (passed in as `explicit`)
/// 2. `~/.neuroflow`
pub fn resolve_root(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    let home = home::home_dir().context("home directory not found: set HOME or NEUROFLOW_HOME")?;
    Ok(home.join(".neuroflow"))
}
