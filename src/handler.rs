use std::fs;

use url::Url;

use crate::config::Config;
use crate::error::{CompanionError, Result};
use crate::host::Host;
use crate::lang::Lang;
use crate::namer;
use crate::problem::{JudgeViewMessage, Problem};
use crate::storage;

#[derive(Debug, Clone, PartialEq)]
pub enum Handled {
    Created(Problem),
    Aborted(AbortReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    NoWorkspace,
    Cancelled,
    InvalidUrl,
}

/// Creates the source file for a pushed problem, stores its metadata and opens it.
pub fn handle_new_problem(mut problem: Problem, config: &Config, host: &dyn Host) -> Result<Handled> {
    // Clears whatever the judge view shows before the new file takes focus.
    host.notify(JudgeViewMessage::NewProblem { problem: None });

    let Some(folder) = config.workspace_folder() else {
        host.show_info("Please open a folder first.");
        return Ok(Handled::Aborted(AbortReason::NoWorkspace));
    };

    let (lang, from_preference) = match config.default_language {
        Some(lang) => (lang, true),
        None => {
            let choices = config.language_choices();
            match host.prompt_choice(&choices).as_deref().and_then(Lang::from_name) {
                Some(lang) => (lang, false),
                None => {
                    host.show_info("Aborted creation of new file");
                    return Ok(Handled::Aborted(AbortReason::Cancelled));
                }
            }
        }
    };

    let url = match Url::parse(&problem.url) {
        Ok(url) => url,
        Err(source) => {
            let err = CompanionError::InvalidUrl {
                url: problem.url.clone(),
                source,
            };
            log::error!("{}", err);
            return Ok(Handled::Aborted(AbortReason::InvalidUrl));
        }
    };
    if url.host_str() == Some("open.kattis.com") {
        if let Some(last) = url.path_segments().and_then(|s| s.filter(|p| !p.is_empty()).last()) {
            problem.name = last.to_string();
        }
    }

    let src_path = folder.join(namer::problem_file_name(&problem, lang.get_extension()));
    problem.src_path = src_path.clone();
    problem.assign_test_ids();

    if !src_path.exists() {
        fs::write(&src_path, "").map_err(|e| CompanionError::io(&src_path, e))?;
    }
    storage::save_problem(&src_path, &problem)?;

    match &config.template_file {
        Some(template) if from_preference => {
            if !template.exists() {
                host.show_error(&format!("Template file does not exist: {}", template.display()));
            } else {
                let contents =
                    fs::read_to_string(template).map_err(|e| CompanionError::io(template, e))?;
                fs::write(&src_path, contents).map_err(|e| CompanionError::io(&src_path, e))?;
            }
        }
        _ => {}
    }

    host.open_document(&src_path)?;
    log::info!("New problem {} at {}", problem.name, src_path.display());
    host.notify(JudgeViewMessage::NewProblem {
        problem: Some(problem.clone()),
    });
    Ok(Handled::Created(problem))
}
