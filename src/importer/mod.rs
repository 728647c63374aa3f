//! Template expansion: file resolution, the lazy expander and the streaming
//! document driver.

pub mod document;
pub mod expand;
pub mod resolver;

pub use document::{InputSource, import_document};
pub use expand::{Expand, ImportSummary, expand, expand_macro};
pub use resolver::{FileResolver, FileSystemResolver};
