//! Streaming a whole document through the expander.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::error::Result;
use crate::core::options::ImportOptions;
use crate::importer::expand::{ImportSummary, expand};
use crate::importer::resolver::FileResolver;

/// Where the template is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A template file
    File(PathBuf),
}

impl InputSource {
    /// `-` selects standard input, anything else is a file path
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => Self::Stdin,
            Some(path) if path.as_os_str() == "-" => Self::Stdin,
            Some(path) => Self::File(path.to_path_buf()),
        }
    }

    /// File path, used for mode detection
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path),
        }
    }

    /// Human readable name for logs and errors
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Open the source for buffered line reading
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Self::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        }
    }
}

/// Expand `input` into `output` line by line.
///
/// Each produced line is written as soon as it is available. On error the
/// writer is flushed first, so everything emitted before the failing line
/// stays in the output, and then the error is returned.
pub fn import_document<R, W, F>(
    input: R,
    output: &mut W,
    options: ImportOptions,
    resolver: &F,
) -> Result<ImportSummary>
where
    R: BufRead,
    W: Write + ?Sized,
    F: FileResolver + ?Sized,
{
    debug!(mode = %options.mode, comments = ?options.comments, "Expanding document");

    let mut lines = expand(input.lines(), options, resolver);
    for line in lines.by_ref() {
        match line {
            Ok(line) => writeln!(output, "{line}")?,
            Err(e) => {
                output.flush()?;
                return Err(e);
            }
        }
    }
    output.flush()?;

    let summary = lines.summary();
    info!(
        lines_read = summary.lines_read,
        macros_expanded = summary.macros_expanded,
        lines_written = summary.lines_written,
        "Document expanded"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ImportError;
    use crate::core::mode::Mode;
    use crate::importer::resolver::FileSystemResolver;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.py"), "print(\"a\")\nreturn 1\n").unwrap();
        temp_dir
    }

    #[test]
    fn test_import_document_writes_expanded_lines() {
        let temp_dir = fixture();
        let resolver = FileSystemResolver::new(temp_dir.path());
        let input = Cursor::new("[\n  \"%%{a.py}%%\"\n]\n");
        let mut output = Vec::new();

        let summary =
            import_document(input, &mut output, ImportOptions::new(Mode::Json), &resolver).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "[\n  \"print(\\\"a\\\")\",\n  \"return 1\"\n]\n"
        );
        assert_eq!(
            summary,
            ImportSummary {
                lines_read: 3,
                macros_expanded: 1,
                lines_written: 4,
            }
        );
    }

    #[test]
    fn test_import_document_normalizes_crlf() {
        let temp_dir = fixture();
        let resolver = FileSystemResolver::new(temp_dir.path());
        let input = Cursor::new("a: 1\r\nb: 2\r\n");
        let mut output = Vec::new();

        import_document(input, &mut output, ImportOptions::new(Mode::Yaml), &resolver).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "a: 1\nb: 2\n");
    }

    #[test]
    fn test_import_document_keeps_output_before_failure() {
        let temp_dir = fixture();
        let resolver = FileSystemResolver::new(temp_dir.path());
        let input = Cursor::new("head\n%%{a.py}%%\n%%{nope.py}%%\ntail\n");
        let mut output = Vec::new();

        let error =
            import_document(input, &mut output, ImportOptions::new(Mode::Yaml), &resolver)
                .unwrap_err();

        assert!(matches!(error, ImportError::FileNotFound { .. }));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "head\nprint(\\\"a\\\")\nreturn 1\n"
        );
    }

    #[test]
    fn test_input_source_from_arg() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(InputSource::from_arg(Some(Path::new("-"))), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(Path::new("stack.json"))),
            InputSource::File(PathBuf::from("stack.json"))
        );
    }

    #[test]
    fn test_input_source_names() {
        assert_eq!(InputSource::Stdin.display_name(), "<stdin>");
        assert!(InputSource::Stdin.path().is_none());
        let file = InputSource::File(PathBuf::from("stack.yml"));
        assert_eq!(file.display_name(), "stack.yml");
        assert_eq!(file.path(), Some(Path::new("stack.yml")));
    }

    #[test]
    fn test_open_missing_input_is_io_error() {
        let source = InputSource::File(PathBuf::from("/nonexistent/stack.json"));
        assert!(matches!(source.open(), Err(ImportError::Io(_))));
    }
}
