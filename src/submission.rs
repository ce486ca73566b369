use std::fs;
use std::sync::{Mutex, MutexGuard};

use crate::config::Config;
use crate::error::{CompanionError, Result};
use crate::lang::Lang;
use crate::namer;
use crate::problem::{Problem, Submission, SubmitResponse};

/// Single-slot mailbox for the next submission the cph-submit relay picks up.
#[derive(Debug, Default)]
pub struct PendingSubmission {
    slot: Mutex<Option<Submission>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub response: SubmitResponse,
    /// A stored payload was handed out and cleared.
    pub consumed: bool,
}

impl PendingSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Submission>> {
        // The slot holds plain data; a panic elsewhere cannot leave it half-written.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replaces whatever was pending.
    pub fn store(&self, submission: Submission) {
        log::info!(
            "Stored submission for {} ({})",
            submission.problem_name,
            submission.url
        );
        *self.lock() = Some(submission);
    }

    pub fn snapshot(&self) -> SubmitResponse {
        SubmitResponse::from(self.lock().clone())
    }

    /// Snapshot for the response; with `consume` the slot is cleared in the same step.
    pub fn deliver(&self, consume: bool) -> Delivery {
        let mut slot = self.lock();
        if consume {
            let taken = slot.take();
            Delivery {
                consumed: taken.is_some(),
                response: SubmitResponse::from(taken),
            }
        } else {
            Delivery {
                consumed: false,
                response: SubmitResponse::from(slot.clone()),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_none()
    }
}

/// Reads the source at `problem.src_path` and shapes it for the Codeforces submit form.
pub fn build_submission(problem: &Problem, config: &Config) -> Result<Submission> {
    let src_path = &problem.src_path;
    let ext = src_path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    let lang = Lang::from_extension(&ext)
        .ok_or_else(|| CompanionError::UnsupportedLanguage(src_path.display().to_string()))?;
    let source_code =
        fs::read_to_string(src_path).map_err(|e| CompanionError::io(src_path, e))?;

    Ok(Submission {
        url: problem.url.clone(),
        problem_name: namer::codeforces_problem_name(&problem.url),
        source_code,
        language_id: config.compiler_id(lang),
    })
}
