use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A problem as pushed by Competitive Companion, plus the fields assigned locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub name: String,
    #[serde(default)]
    pub group: String,
    pub url: String,
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub memory_limit: u64,
    #[serde(default)]
    pub time_limit: u64,
    pub tests: Vec<TestCase>,
    #[serde(default)]
    pub src_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl Problem {
    /// Gives every test a fresh identifier, replacing any the browser sent.
    pub fn assign_test_ids(&mut self) {
        for test in &mut self.tests {
            test.id = Some(Uuid::new_v4());
        }
    }
}

/// What the cph-submit relay reads back on every connection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitResponse {
    pub empty: bool,
    #[serde(flatten)]
    pub submission: Option<Submission>,
}

impl SubmitResponse {
    pub fn empty() -> Self {
        SubmitResponse {
            empty: true,
            submission: None,
        }
    }
}

impl From<Option<Submission>> for SubmitResponse {
    fn from(submission: Option<Submission>) -> Self {
        SubmitResponse {
            empty: submission.is_none(),
            submission,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub url: String,
    pub problem_name: String,
    pub source_code: String,
    pub language_id: u32,
}

/// Messages for the judge view presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum JudgeViewMessage {
    NewProblem { problem: Option<Problem> },
    SubmitFinished,
}
