//! Recognition of `%%{file}%%` import macros.
//!
//! A macro line consists solely of an optional prefix of indentation and
//! quoting characters, the macro token, and an optional suffix of quotes and
//! commas. The prefix and suffix are reproduced around every imported line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Comment marker. Lines starting with it are never treated as macros.
pub const COMMENT_MARKER: char = '#';

static MACRO_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([ \t"'-]*)%%\{(.+?)\}%%(["',]*)$"#).expect("macro pattern is valid")
});

/// A macro reference borrowed from a single template line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroRef<'a> {
    /// Indentation and quoting before the token, kept verbatim
    pub prefix: &'a str,
    /// File name between `%%{` and `}%%`
    pub file_name: &'a str,
    /// Quotes and commas after the token, kept verbatim
    pub suffix: &'a str,
}

impl<'a> MacroRef<'a> {
    /// Match `line` against the macro pattern.
    ///
    /// Returns `None` for comment lines and for any line that is not wholly a
    /// macro token with its surrounding punctuation.
    pub fn parse(line: &'a str) -> Option<Self> {
        if is_comment(line) {
            return None;
        }
        let caps = MACRO_LINE.captures(line)?;
        Some(Self {
            prefix: caps.get(1).map_or("", |m| m.as_str()),
            file_name: caps.get(2)?.as_str(),
            suffix: caps.get(3).map_or("", |m| m.as_str()),
        })
    }

    /// Wrap one imported line in this macro's prefix and suffix
    pub fn render(&self, imported: &str) -> String {
        let escaped = escape_quotes(imported);
        let mut out = String::with_capacity(self.prefix.len() + escaped.len() + self.suffix.len());
        out.push_str(self.prefix);
        out.push_str(&escaped);
        out.push_str(self.suffix);
        out
    }
}

/// Whether `line` is a comment line
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER)
}

/// Replace every `"` with `\"`
pub fn escape_quotes(line: &str) -> String {
    line.replace('"', "\\\"")
}
