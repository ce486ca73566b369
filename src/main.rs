use std::io;
use std::sync::Arc;

use actix_web::web;
use clap::Parser;
use cph_companion::host::TerminalHost;
use cph_companion::namer;
use cph_companion::problem::Problem;
use cph_companion::Companion;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use cli::{Cmd, Opts};

mod cli;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let opts = Opts::parse();

    // Derive log level from CLI options and construct logger.
    let log_level = cli::calc_log_level(opts.verbosity, opts.quiet);
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    match &opts.command {
        Some(Cmd::Name { url, name, ext }) => {
            let problem = Problem {
                url: url.clone(),
                name: name.clone(),
                ..Problem::default()
            };
            println!("{}", namer::problem_file_name(&problem, ext));
            Ok(())
        }
        Some(Cmd::Serve) | None => {
            let config = opts
                .config()
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            cli::debug_opts(&config);

            let host = Arc::new(TerminalHost::new(config.editor.clone()));
            let companion = web::Data::new(Companion::new(config, host));
            cph_companion::server::run(companion).await
        }
    }
}
