//! Line-by-line macro expansion.
//!
//! [`expand`] wraps an iterator of input lines in a lazy [`Expand`] iterator.
//! Each input line is handled to completion before the next one is read:
//!
//! 1. Comment lines (`#...`) are emitted unchanged, or dropped with
//!    [`CommentPolicy::Strip`].
//! 2. Lines that are not a macro are emitted unchanged.
//! 3. A macro line is replaced by the lines of the referenced file, each
//!    wrapped in the macro's prefix and suffix with `"` escaped. In JSON mode
//!    every replacement line but the last gets a trailing comma.
//!
//! Input lines arrive already split by the caller. Trailing `\n`/`\r` are
//! trimmed from each one, but a `\r` inside a line is kept as content; only
//! imported files are split on lone `\r` (see `FileResolver`).
//!
//! The first error ends the iteration. Lines produced before it have already
//! been yielded, but nothing is yielded for the failing macro.

use std::collections::VecDeque;
use std::io;

use tracing::{debug, warn};

use crate::core::error::{ImportError, Result};
use crate::core::macro_ref::{MacroRef, is_comment};
use crate::core::mode::Mode;
use crate::core::options::{CommentPolicy, ImportOptions};
use crate::importer::resolver::FileResolver;

/// Counters describing a finished or partial expansion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Input lines consumed
    pub lines_read: usize,
    /// Macro lines replaced by file contents
    pub macros_expanded: usize,
    /// Output lines yielded
    pub lines_written: usize,
}

/// Lazy expansion of a document, see the module docs
pub struct Expand<'r, I, R: ?Sized> {
    lines: I,
    options: ImportOptions,
    resolver: &'r R,
    pending: VecDeque<String>,
    summary: ImportSummary,
    finished: bool,
}

/// Expand every macro in `lines` using `resolver` to read imported files
pub fn expand<I, R>(lines: I, options: ImportOptions, resolver: &R) -> Expand<'_, I::IntoIter, R>
where
    I: IntoIterator<Item = io::Result<String>>,
    R: FileResolver + ?Sized,
{
    Expand {
        lines: lines.into_iter(),
        options,
        resolver,
        pending: VecDeque::new(),
        summary: ImportSummary::default(),
        finished: false,
    }
}

/// Produce the replacement lines for one macro.
///
/// The file is read completely before anything is returned, so a failing
/// resolve yields no lines at all.
pub fn expand_macro<R>(macro_ref: &MacroRef<'_>, mode: Mode, resolver: &R) -> Result<Vec<String>>
where
    R: FileResolver + ?Sized,
{
    let imported = resolver.resolve(macro_ref.file_name)?;
    let last = imported.len().saturating_sub(1);
    let lines = imported
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let mut rendered = macro_ref.render(line);
            if index < last {
                rendered.push_str(mode.continuation());
            }
            rendered
        })
        .collect();
    Ok(lines)
}

impl<I, R: ?Sized> Expand<'_, I, R> {
    /// Counters for the lines processed so far
    pub fn summary(&self) -> ImportSummary {
        self.summary
    }

    fn emit(&mut self, line: String) -> Option<Result<String>> {
        self.summary.lines_written += 1;
        Some(Ok(line))
    }

    fn fail(&mut self, error: ImportError) -> Option<Result<String>> {
        self.finished = true;
        self.pending.clear();
        Some(Err(error))
    }
}

impl<I, R> Iterator for Expand<'_, I, R>
where
    I: Iterator<Item = io::Result<String>>,
    R: FileResolver + ?Sized,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return self.emit(line);
            }
            if self.finished {
                return None;
            }

            let mut line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return self.fail(e.into()),
                None => {
                    self.finished = true;
                    return None;
                }
            };
            let content_len = line.trim_end_matches(['\n', '\r']).len();
            line.truncate(content_len);
            self.summary.lines_read += 1;

            if is_comment(&line) {
                match self.options.comments {
                    CommentPolicy::Keep => return self.emit(line),
                    CommentPolicy::Strip => continue,
                }
            }

            let Some(macro_ref) = MacroRef::parse(&line) else {
                return self.emit(line);
            };

            match expand_macro(&macro_ref, self.options.mode, self.resolver) {
                Ok(expanded) => {
                    debug!(
                        file = macro_ref.file_name,
                        line = self.summary.lines_read,
                        lines = expanded.len(),
                        "Expanded import macro"
                    );
                    if expanded.is_empty() {
                        warn!(file = macro_ref.file_name, "Import file is empty");
                    }
                    self.summary.macros_expanded += 1;
                    self.pending.extend(expanded);
                }
                Err(e) => return self.fail(e),
            }
        }
    }
}
