use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use actix_web::{post, web, App, HttpRequest, HttpResponse, HttpServer};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{CompanionError, Result};
use crate::handler::{self, Handled};
use crate::host::Host;
use crate::kattis;
use crate::namer;
use crate::problem::{JudgeViewMessage, Problem, SubmitResponse};
use crate::storage;
use crate::submission::{self, PendingSubmission};

/// Marks requests from the cph-submit relay.
pub const SUBMIT_HEADER: &str = "cph-submit";

const MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// State owned by the listener: config, host capabilities and the pending slot.
pub struct Companion {
    config: Config,
    host: Arc<dyn Host>,
    pending: PendingSubmission,
    intake: Mutex<()>,
}

impl Companion {
    pub fn new(config: Config, host: Arc<dyn Host>) -> Self {
        Companion {
            config,
            host,
            pending: PendingSubmission::new(),
            intake: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pending(&self) -> &PendingSubmission {
        &self.pending
    }

    /// The payload every connection gets back. Relay reads clear the slot.
    pub fn respond(&self, from_relay: bool) -> SubmitResponse {
        let delivery = self.pending.deliver(from_relay);
        if delivery.consumed {
            log::debug!("Request came from cph-submit; handed out and cleared the pending submission");
            self.host.notify(JudgeViewMessage::SubmitFinished);
        }
        delivery.response
    }

    /// Parses a pushed body and runs the new-problem handler. Empty bodies are polls.
    pub fn receive(&self, raw: &str) -> Result<Option<Handled>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let problem: Problem = serde_json::from_str(raw)?;
        let _intake = self.intake.lock().unwrap_or_else(|p| p.into_inner());
        handler::handle_new_problem(problem, &self.config, self.host.as_ref()).map(Some)
    }

    /// Queues the stored problem behind `src_path` for submission.
    pub fn submit(&self, src_path: &Path) -> Result<SubmitResponse> {
        let problem = storage::load_problem(src_path)?
            .ok_or_else(|| CompanionError::ProblemNotFound(src_path.to_path_buf()))?;

        if namer::is_codeforces(&problem.url) {
            self.pending
                .store(submission::build_submission(&problem, &self.config)?);
        } else if namer::is_kattis(&problem.url) {
            kattis::submit_kattis_problem(
                &problem,
                &self.config.kattis_dir(),
                &self.config.python,
                self.host.as_ref(),
            )?;
        } else {
            return Err(CompanionError::UnsupportedJudge(problem.url));
        }
        Ok(self.pending.snapshot())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitRequest {
    src_path: PathBuf,
}

#[post("/cph/submit")]
async fn submit(
    req: web::Json<SubmitRequest>,
    companion: web::Data<Companion>,
) -> actix_web::Result<HttpResponse> {
    let src_path = req.into_inner().src_path;
    let response = web::block(move || companion.submit(&src_path)).await??;
    Ok(HttpResponse::Ok().json(response))
}

async fn receive_problem(
    req: HttpRequest,
    body: web::Bytes,
    companion: web::Data<Companion>,
) -> HttpResponse {
    let from_relay = req
        .headers()
        .get(SUBMIT_HEADER)
        .is_some_and(|value| value == "true");
    let response = companion.respond(from_relay);

    let raw = String::from_utf8_lossy(&body).into_owned();
    if !raw.trim().is_empty() {
        log::debug!("Companion server got {} bytes", raw.len());
        actix_web::rt::spawn(async move {
            match web::block(move || companion.receive(&raw)).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => log::error!("Dropped pushed problem: {}", e),
                Err(e) => log::error!("Problem handler did not finish: {}", e),
            }
        });
    }

    HttpResponse::Ok().json(response)
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_PAYLOAD))
        .app_data(web::JsonConfig::default().limit(MAX_PAYLOAD))
        .service(submit)
        .default_service(web::to(receive_problem));
}

/// Serves until shutdown. Bind failures are shown to the user and returned; there is no retry.
pub async fn run(companion: web::Data<Companion>) -> std::io::Result<()> {
    let port = companion.config().port;
    let data = companion.clone();
    let server = HttpServer::new(move || App::new().app_data(data.clone()).configure(routes))
        .workers(1)
        .bind(("127.0.0.1", port));

    let server = match server {
        Ok(server) => server,
        Err(err) => {
            companion.host.show_error(&format!(
                "Are multiple windows open? Only the first one receives problems. \
                 Companion server encountered an error: \"{}\", companion may not work.",
                err
            ));
            return Err(err);
        }
    };

    log::info!("Companion server listening on port {}", port);
    server.run().await
}
