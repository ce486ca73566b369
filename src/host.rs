use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

use crate::error::{CompanionError, Result};
use crate::problem::JudgeViewMessage;

/// Editor-side capabilities the receiver needs.
pub trait Host: Send + Sync {
    fn open_document(&self, path: &Path) -> Result<()>;

    /// Lets the user pick one of `choices`. `None` means the prompt was dismissed.
    fn prompt_choice(&self, choices: &[String]) -> Option<String>;

    fn notify(&self, message: JudgeViewMessage);

    fn show_error(&self, message: &str);

    fn show_info(&self, message: &str);
}

/// Host for running outside an editor: log lines, a stdin menu and an
/// optional editor command.
pub struct TerminalHost {
    editor: Option<String>,
}

impl TerminalHost {
    pub fn new(editor: Option<String>) -> Self {
        TerminalHost { editor }
    }
}

impl Host for TerminalHost {
    fn open_document(&self, path: &Path) -> Result<()> {
        let Some(editor) = &self.editor else {
            log::info!("Created {}", path.display());
            return Ok(());
        };
        Command::new(editor)
            .arg(path)
            .spawn()
            .map_err(|e| CompanionError::Editor {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    fn prompt_choice(&self, choices: &[String]) -> Option<String> {
        let mut stderr = io::stderr();
        for (i, choice) in choices.iter().enumerate() {
            writeln!(stderr, "  {}) {}", i + 1, choice).ok()?;
        }
        write!(stderr, "Language for the new problem: ").ok()?;
        stderr.flush().ok()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let index = line.trim().parse::<usize>().ok()?;
        choices.get(index.checked_sub(1)?).cloned()
    }

    fn notify(&self, message: JudgeViewMessage) {
        match serde_json::to_string(&message) {
            Ok(json) => log::info!("Judge view: {}", json),
            Err(e) => log::warn!("Could not encode judge view message: {}", e),
        }
    }

    fn show_error(&self, message: &str) {
        log::error!("{}", message);
    }

    fn show_info(&self, message: &str) {
        log::warn!("{}", message);
    }
}
