//! Output dialects for template expansion.
//!
//! The [`Mode`] decides how the lines produced by a single macro are joined:
//! JSON templates inline imported files into a `Fn::Join` array, so every line
//! but the last needs a trailing comma. YAML block lists need no separator.
//!
//! # Examples
//!
//! ```
//! use cfn_import::Mode;
//! use std::path::Path;
//! use std::str::FromStr;
//!
//! assert_eq!(Mode::from_str("yaml").unwrap(), Mode::Yaml);
//! assert_eq!(Mode::from_path(Path::new("stack.yml")), Some(Mode::Yaml));
//! assert_eq!(Mode::Json.to_string(), "json");
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::error::{ImportError, Result};

/// Template dialect controlling inter-line joining syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// JSON template, imported lines are comma separated
    Json,
    /// YAML template, imported lines are emitted as is
    Yaml,
}

impl Mode {
    /// Returns the mode as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Separator appended to every expanded line except the last one
    pub fn continuation(&self) -> &'static str {
        match self {
            Self::Json => ",",
            Self::Yaml => "",
        }
    }

    /// Detect the mode from the end of a file name.
    ///
    /// Names ending in `.json` map to [`Mode::Json`], names ending in `.yaml`
    /// or `.yml` map to [`Mode::Yaml`]. A bare `.yml` counts too. Matching
    /// ignores ASCII case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".json") {
            Some(Self::Json)
        } else if name.ends_with(".yaml") || name.ends_with(".yml") {
            Some(Self::Yaml)
        } else {
            None
        }
    }

    /// Pick the mode for a run: an explicit choice wins, otherwise the input
    /// path's extension decides. Standard input has no path and therefore
    /// requires an explicit mode.
    pub fn resolve(explicit: Option<Mode>, input: Option<&Path>) -> Result<Self> {
        if let Some(mode) = explicit {
            return Ok(mode);
        }
        match input {
            Some(path) => Self::from_path(path)
                .ok_or_else(|| ImportError::mode_undetermined(path.display().to_string())),
            None => Err(ImportError::mode_undetermined("<stdin>")),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Mode::Json),
            "yaml" | "yml" => Ok(Mode::Yaml),
            _ => Err(format!("Unknown mode: {s}")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
