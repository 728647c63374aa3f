//! # cfn-import
//!
//! Pre-processor that inlines external files into JSON and YAML
//! CloudFormation templates, typically to embed Lambda function source in a
//! `ZipFile` property.
//!
//! A template line consisting solely of a `%%{file}%%` macro plus its quoting
//! is replaced by the lines of `file`, each wrapped in the same quoting:
//!
//! ```
//! use cfn_import::{ImportOptions, Mode, Result, expand};
//!
//! let resolver = |_: &str| -> Result<Vec<String>> {
//!     Ok(vec!["import os".to_string(), "print(\"hi\")".to_string()])
//! };
//! let template = vec![Ok("  \"%%{lambda.py}%%\"".to_string())];
//!
//! let out = expand(template, ImportOptions::new(Mode::Json), &resolver)
//!     .collect::<Result<Vec<_>>>()?;
//! assert_eq!(out, ["  \"import os\",", "  \"print(\\\"hi\\\")\""]);
//! # Ok::<(), cfn_import::ImportError>(())
//! ```
#![deny(unsafe_code)]

pub mod core;
pub mod importer;

// Re-export main types and functions for convenience
pub use crate::core::error::{ImportError, Result};
pub use crate::core::macro_ref::MacroRef;
pub use crate::core::mode::Mode;
pub use crate::core::options::{CommentPolicy, ImportOptions};
pub use importer::{
    Expand, FileResolver, FileSystemResolver, ImportSummary, InputSource, expand, expand_macro,
    import_document,
};
