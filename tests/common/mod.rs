#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use cph_companion::host::Host;
use cph_companion::problem::JudgeViewMessage;

/// Host fake that answers prompts with a fixed choice and records everything else.
#[derive(Default)]
pub struct RecordingHost {
    pub choice: Option<String>,
    pub opened: Mutex<Vec<PathBuf>>,
    pub prompts: Mutex<Vec<Vec<String>>>,
    pub messages: Mutex<Vec<JudgeViewMessage>>,
    pub errors: Mutex<Vec<String>>,
    pub infos: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn choosing(choice: &str) -> Self {
        RecordingHost {
            choice: Some(choice.to_string()),
            ..Default::default()
        }
    }

    pub fn messages(&self) -> Vec<JudgeViewMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

impl Host for RecordingHost {
    fn open_document(&self, path: &Path) -> cph_companion::Result<()> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn prompt_choice(&self, choices: &[String]) -> Option<String> {
        self.prompts.lock().unwrap().push(choices.to_vec());
        self.choice.clone()
    }

    fn notify(&self, message: JudgeViewMessage) {
        self.messages.lock().unwrap().push(message);
    }

    fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn show_info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }
}

pub fn pushed_problem(url: &str, name: &str, tests: usize) -> String {
    let tests: Vec<_> = (0..tests)
        .map(|i| serde_json::json!({"input": format!("{}\n", i), "output": format!("{}\n", i * 2)}))
        .collect();
    serde_json::json!({
        "name": name,
        "group": "Test Group",
        "url": url,
        "interactive": false,
        "memoryLimit": 256,
        "timeLimit": 2000,
        "tests": tests,
        "testType": "single",
        "input": {"type": "stdin"},
        "output": {"type": "stdout"},
        "languages": {"java": {"mainClass": "Main", "taskClass": "Task"}}
    })
    .to_string()
}
