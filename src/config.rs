use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CompanionError, Result};
use crate::lang::Lang;

pub const DEFAULT_PORT: u16 = 27121;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub port: u16,
    /// Workspace folders; new problems land in the first one.
    pub workspace: Vec<PathBuf>,
    pub default_language: Option<Lang>,
    /// Languages offered when no default is set. Unknown names are skipped.
    pub menu_choices: Vec<String>,
    pub template_file: Option<PathBuf>,
    pub editor: Option<String>,
    pub python: String,
    pub kattis_dir: Option<PathBuf>,
    /// Codeforces compiler id per language name.
    pub submission_compiler: HashMap<String, u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            workspace: Vec::new(),
            default_language: None,
            menu_choices: Lang::ALL.iter().map(|l| l.name().to_string()).collect(),
            template_file: None,
            editor: None,
            python: "python".to_string(),
            kattis_dir: None,
            submission_compiler: HashMap::new(),
        }
    }
}

impl Config {
    pub fn from_toml(raw: &str) -> Result<Config> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path).map_err(|e| CompanionError::io(path, e))?;
        Config::from_toml(&raw)
    }

    pub fn workspace_folder(&self) -> Option<&Path> {
        self.workspace.first().map(PathBuf::as_path)
    }

    /// Menu entries that name a known language, in configured order.
    pub fn language_choices(&self) -> Vec<String> {
        self.menu_choices
            .iter()
            .filter(|name| Lang::from_name(name).is_some())
            .cloned()
            .collect()
    }

    pub fn compiler_id(&self, lang: Lang) -> u32 {
        self.submission_compiler
            .get(lang.name())
            .copied()
            .unwrap_or_else(|| lang.default_compiler_id())
    }

    /// `~/.kattis` unless configured.
    pub fn kattis_dir(&self) -> PathBuf {
        match &self.kattis_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir().unwrap_or_default().join(".kattis"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.workspace_folder().is_none());
        assert_eq!(config.language_choices().len(), Lang::ALL.len());
        assert_eq!(config.python, "python");
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_toml(
            r#"
            port = 10043
            workspace = ["/home/me/cp", "/tmp"]
            default_language = "rust"
            menu_choices = ["cpp", "brainfuck", "python"]
            template_file = "/home/me/template.rs"
            editor = "vim"
            python = "python3"
            kattis_dir = "/home/me/.kattis"

            [submission_compiler]
            cpp = 73
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 10043);
        assert_eq!(config.workspace_folder(), Some(Path::new("/home/me/cp")));
        assert_eq!(config.default_language, Some(Lang::Rust));
        assert_eq!(config.language_choices(), vec!["cpp", "python"]);
        assert_eq!(config.compiler_id(Lang::Cpp), 73);
        assert_eq!(config.compiler_id(Lang::Python), 31);
        assert_eq!(config.kattis_dir(), PathBuf::from("/home/me/.kattis"));
    }

    #[test]
    fn rejects_unknown_language_and_keys() {
        assert!(Config::from_toml("default_language = \"cobol\"").is_err());
        assert!(Config::from_toml("prot = 1").is_err());
    }
}
