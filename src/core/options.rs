//! Configuration options for a single import run.
//!
//! [`ImportOptions`] is assembled by the CLI from its flags and handed to the
//! expander unchanged. There is no configuration file.
//!
//! # Example
//!
//! ```rust
//! use cfn_import::{CommentPolicy, ImportOptions, Mode};
//!
//! let options = ImportOptions {
//!     comments: CommentPolicy::Strip,
//!     ..ImportOptions::new(Mode::Yaml)
//! };
//! assert_eq!(options.mode, Mode::Yaml);
//! ```

use crate::core::mode::Mode;

/// What to do with `#` comment lines in the input document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentPolicy {
    /// Emit comment lines unchanged
    #[default]
    Keep,
    /// Drop comment lines from the output
    Strip,
}

/// Options controlling how a document is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Output dialect
    pub mode: Mode,

    /// Handling of comment lines
    pub comments: CommentPolicy,
}

impl ImportOptions {
    /// Options for `mode` with comment lines kept
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            comments: CommentPolicy::default(),
        }
    }
}
