use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{CompanionError, Result};
use crate::host::Host;
use crate::problem::{JudgeViewMessage, Problem};

/// Hands `problem.src_path` to the Kattis `submit.py` found in `kattis_dir`.
pub fn submit_kattis_problem(
    problem: &Problem,
    kattis_dir: &Path,
    python: &str,
    host: &dyn Host,
) -> Result<()> {
    let submit_path = kattis_dir.join("submit.py");
    if !kattis_dir.join(".kattisrc").exists() || !submit_path.exists() {
        let err = CompanionError::MissingKattisFiles(kattis_dir.to_path_buf());
        host.show_error(&err.to_string());
        return Err(err);
    }

    log::info!("Submitting {} to Kattis", problem.src_path.display());
    let mut process = Command::new(python)
        .arg(&submit_path)
        .arg("-f")
        .arg(&problem.src_path)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| CompanionError::io(&submit_path, e))?;

    // Answers the script's "open submission in browser?" question.
    if let Some(mut stdin) = process.stdin.take() {
        stdin
            .write_all(b"Y\n")
            .map_err(|e| CompanionError::io(&submit_path, e))?;
    }
    let output = process
        .wait_with_output()
        .map_err(|e| CompanionError::io(&submit_path, e))?;

    for line in String::from_utf8_lossy(&output.stdout).lines() {
        log::info!("{}", line);
        host.notify(JudgeViewMessage::NewProblem {
            problem: Some(problem.clone()),
        });
    }
    for line in String::from_utf8_lossy(&output.stderr).lines() {
        log::warn!("{}", line);
        host.show_error(line);
    }
    Ok(())
}
