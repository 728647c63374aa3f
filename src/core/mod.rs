//! Core types of the template importer.
//!
//! This module holds everything that does not touch the filesystem: the error
//! taxonomy, output modes, run options and macro recognition.

pub mod error;
pub mod macro_ref;
pub mod mode;
pub mod options;

pub use error::{ImportError, Result};
