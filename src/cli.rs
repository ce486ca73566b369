use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use cph_companion::config::Config;
use cph_companion::lang::Lang;
use simplelog::LevelFilter;

/// cph-companion
/// Receives problems from Competitive Companion and sets up source files for them.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Opts {
    /// TOML config file.
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Port to listen on.
    #[arg(long = "port")]
    pub port: Option<u16>,

    /// Workspace folder. The first one receives new problems.
    #[arg(long = "workspace")]
    pub workspace: Vec<PathBuf>,

    /// Default language; skips the language menu.
    #[arg(long = "language")]
    pub language: Option<Lang>,

    /// Template copied into new files of the default language.
    #[arg(long = "template")]
    pub template: Option<PathBuf>,

    /// Command used to open new source files.
    #[arg(long = "editor")]
    pub editor: Option<String>,

    /// The level of verbosity.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,

    /// Whether the log should be suppressed. This option overrides the verbose option.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Run the companion listener (the default).
    Serve,
    /// Print the file name a problem url would get.
    Name {
        url: String,
        /// Problem title, used when the url matches no known judge.
        #[arg(long = "name", default_value = "")]
        name: String,
        #[arg(long = "ext", default_value = "cpp")]
        ext: String,
    },
}

impl Opts {
    /// Config file values with command-line overrides applied.
    pub fn config(&self) -> cph_companion::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(port) = self.port {
            config.port = port;
        }
        if !self.workspace.is_empty() {
            config.workspace = self.workspace.clone();
        }
        if let Some(lang) = self.language {
            config.default_language = Some(lang);
        }
        if let Some(template) = &self.template {
            config.template_file = Some(template.clone());
        }
        if let Some(editor) = &self.editor {
            config.editor = Some(editor.clone());
        }
        Ok(config)
    }
}

pub fn debug_opts(config: &Config) {
    log::debug!("Port: {}", config.port);
    log::debug!("Workspace: {:?}", config.workspace);
    log::debug!("Default language: {:?}", config.default_language);
}

pub fn calc_log_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Off
    } else {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
