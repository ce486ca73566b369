use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{CompanionError, Result};
use crate::problem::Problem;

const PROBLEM_DIR: &str = ".cph";

/// `<dir>/.cph/.<file name>_<sha256 of src path>.prob`
pub fn problem_path(src_path: &Path) -> PathBuf {
    let dir = src_path.parent().unwrap_or_else(|| Path::new(""));
    let file_name = src_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let hash = Sha256::digest(src_path.to_string_lossy().as_bytes());
    dir.join(PROBLEM_DIR)
        .join(format!(".{}_{:x}.prob", file_name, hash))
}

pub fn save_problem(src_path: &Path, problem: &Problem) -> Result<()> {
    let path = problem_path(src_path);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| CompanionError::io(dir, e))?;
    }
    let json = serde_json::to_string_pretty(problem)?;
    fs::write(&path, json).map_err(|e| CompanionError::io(&path, e))?;
    log::debug!("Saved problem metadata to {}", path.display());
    Ok(())
}

pub fn load_problem(src_path: &Path) -> Result<Option<Problem>> {
    let path = problem_path(src_path);
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path).map_err(|e| CompanionError::io(&path, e))?;
    Ok(Some(serde_json::from_str(&raw)?))
}
