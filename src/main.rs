//! cfn-import CLI entrypoint
//! Parses command-line arguments and streams the expanded template to the output.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use cfn_import::{
    CommentPolicy, FileSystemResolver, ImportOptions, InputSource, Mode, import_document,
};

// External imports (alphabetized)
use anyhow::{Context, bail};
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cfn-import")]
#[command(author, version, long_about = None)]
#[command(about = "Import external files to a JSON or YAML template")]
struct Cli {
    /// Input file with %%{filename}%% macros (`-` or omitted reads stdin)
    file: Option<PathBuf>,

    /// JSON mode
    #[arg(long, conflicts_with = "yaml")]
    json: bool,

    /// YAML mode
    #[arg(long)]
    yaml: bool,

    /// Output mode by name (json, yaml or yml)
    #[arg(long, value_name = "MODE", conflicts_with_all = ["json", "yaml"])]
    mode: Option<Mode>,

    /// Drop `#` comment lines instead of copying them to the output
    #[arg(long)]
    strip_comments: bool,

    /// Directory that import file names are relative to
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Write the expanded template to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn explicit_mode(&self) -> Option<Mode> {
        match (self.json, self.yaml) {
            (true, _) => Some(Mode::Json),
            (_, true) => Some(Mode::Yaml),
            _ => self.mode,
        }
    }

    fn comment_policy(&self) -> CommentPolicy {
        if self.strip_comments {
            CommentPolicy::Strip
        } else {
            CommentPolicy::Keep
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the document, so logs go to stderr.
    // RUST_LOG, when set, takes precedence over the default level.
    let default_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = InputSource::from_arg(cli.file.as_deref());
    let mode = Mode::resolve(cli.explicit_mode(), source.path())?;
    let options = ImportOptions {
        mode,
        comments: cli.comment_policy(),
    };
    let resolver = cli
        .base_dir
        .as_ref()
        .map(FileSystemResolver::new)
        .unwrap_or_default();

    info!(
        input = %source.display_name(),
        mode = %mode,
        base_dir = %resolver.base_dir().display(),
        "Importing external files"
    );

    let input = source
        .open()
        .with_context(|| format!("Failed to open {}", source.display_name()))?;

    let mut output: Box<dyn Write> = match &cli.output {
        Some(path) => {
            if let Some(input_path) = source.path() {
                if same_file(input_path, path) {
                    bail!(
                        "Output {} is the input template, refusing to overwrite it",
                        path.display()
                    );
                }
            }
            debug!(output = %path.display(), "Writing to file");
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    import_document(input, &mut output, options, &resolver)
        .with_context(|| format!("Failed to import files into {}", source.display_name()))?;
    Ok(())
}

/// Whether both paths name the same existing file
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
