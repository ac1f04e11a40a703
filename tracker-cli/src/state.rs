use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracker_core::TaskList;

pub fn tracker_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tracker"))
}

pub fn ensure_tracker_home() -> Result<PathBuf> {
    let dir = tracker_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn tasks_path() -> Result<PathBuf> {
    Ok(ensure_tracker_home()?.join("tasks.json"))
}

/// Read the full task collection. A missing file is an empty list.
pub fn load_tasks(path: &Path) -> Result<TaskList> {
    if !path.exists() {
        return Ok(TaskList::new());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

/// Overwrite the tasks file with the full collection.
pub fn save_tasks(path: &Path, tasks: &TaskList) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(tasks)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
