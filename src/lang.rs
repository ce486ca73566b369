use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    C,
    Cpp,
    CSharp,
    Python,
    Ruby,
    Rust,
    Java,
    Js,
    Go,
    Hs,
}

impl Lang {
    pub const ALL: [Lang; 10] = [
        Lang::C,
        Lang::Cpp,
        Lang::CSharp,
        Lang::Python,
        Lang::Ruby,
        Lang::Rust,
        Lang::Java,
        Lang::Js,
        Lang::Go,
        Lang::Hs,
    ];

    /// Name shown in the language menu and used in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Lang::C => "c",
            Lang::Cpp => "cpp",
            Lang::CSharp => "csharp",
            Lang::Python => "python",
            Lang::Ruby => "ruby",
            Lang::Rust => "rust",
            Lang::Java => "java",
            Lang::Js => "js",
            Lang::Go => "go",
            Lang::Hs => "hs",
        }
    }

    pub fn get_extension(&self) -> &'static str {
        match self {
            Lang::C => "c",
            Lang::Cpp => "cpp",
            Lang::CSharp => "cs",
            Lang::Python => "py",
            Lang::Ruby => "rb",
            Lang::Rust => "rs",
            Lang::Java => "java",
            Lang::Js => "js",
            Lang::Go => "go",
            Lang::Hs => "hs",
        }
    }

    /// Codeforces compiler id used when no override is configured.
    pub fn default_compiler_id(&self) -> u32 {
        match self {
            Lang::C => 43,
            Lang::Cpp => 54,
            Lang::CSharp => 79,
            Lang::Python => 31,
            Lang::Ruby => 67,
            Lang::Rust => 75,
            Lang::Java => 60,
            Lang::Js => 55,
            Lang::Go => 32,
            Lang::Hs => 12,
        }
    }

    pub fn from_name(name: &str) -> Option<Lang> {
        Lang::ALL.iter().copied().find(|lang| lang.name() == name)
    }

    pub fn from_extension(ext: &str) -> Option<Lang> {
        Lang::ALL
            .iter()
            .copied()
            .find(|lang| lang.get_extension() == ext)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_name(s).ok_or_else(|| format!("unknown language {:?}", s))
    }
}
