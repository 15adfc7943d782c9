//! Check command implementation.
//!
//! Scans every input file on a rayon thread pool and reports the first
//! lexical error of each failing file as a diagnostic. Each scan is
//! independent and owns its own diagnostic handler.

use std::path::{Path, PathBuf};
use std::time::Instant;

use asmc_lex::Lexer;
use asmc_util::{Diagnostic, Handler, SourceMap, SourceSnippet};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::commands::common::{error_messages, paint_error, read_source};
use crate::error::{AsmtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Number of files scanned in parallel.
    pub jobs: usize,
    /// Print the offending source line under each diagnostic.
    pub snippets: bool,
    /// Color the diagnostic level.
    pub color: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Outcome of scanning one file.
#[derive(Debug)]
pub struct FileReport {
    /// The scanned file.
    pub path: PathBuf,
    /// The scanned text, kept for rendering snippets.
    pub source: String,
    /// Number of tokens produced, terminal token included.
    pub tokens: usize,
    /// The lexical error the scan halted on, if any.
    pub diagnostic: Option<Diagnostic>,
}

impl FileReport {
    /// Whether the scan halted on a lexical error.
    pub fn failed(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Scan `source` and collect the diagnostic the lexer reported, if any.
pub fn check_source(path: &Path, source: String) -> FileReport {
    let mut handler = Handler::new();
    let tokens = Lexer::new(&source, &mut handler).count();
    let diagnostic = handler.take_diagnostics().into_iter().next();

    FileReport {
        path: path.to_path_buf(),
        source,
        tokens,
        diagnostic,
    }
}

/// Renders failing reports against a source map of the failing files.
///
/// Rendering happens on one thread after the parallel scan, in input order.
#[derive(Debug, Default)]
pub struct Reporter {
    map: SourceMap,
    snippets: bool,
    color: bool,
}

impl Reporter {
    /// Create a reporter.
    pub fn new(snippets: bool, color: bool) -> Self {
        Self {
            map: SourceMap::new(),
            snippets,
            color,
        }
    }

    /// Render a report as `path:line:col: error[code]: message` followed by
    /// any snippet lines. Returns `None` for a clean file.
    pub fn render(&mut self, report: FileReport) -> Option<String> {
        let diag = report.diagnostic?;
        let file_id = self
            .map
            .add_file(report.path.display().to_string(), report.source);
        let span = diag.span.with_file_id(file_id);

        let level = match diag.code {
            Some(code) => format!("{}[{}]", diag.level, code),
            None => diag.level.to_string(),
        };
        let location = self
            .map
            .format_span(span)
            .unwrap_or_else(|| report.path.display().to_string());
        let mut out = format!(
            "{}: {}: {}",
            location,
            paint_error(&level, self.color),
            diag.message
        );

        let snippet = self
            .map
            .get(file_id)
            .filter(|_| self.snippets)
            .and_then(|file| SourceSnippet::from_span(&file, span));
        if let Some(snippet) = snippet {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        Some(out)
    }

    /// Number of failing files rendered so far.
    pub fn failed(&self) -> usize {
        self.map.file_count()
    }
}

fn check_file(path: &Path) -> Result<FileReport> {
    let source = read_source(path)?;
    let report = check_source(path, source);
    debug!(
        path = %path.display(),
        tokens = report.tokens,
        failed = report.failed(),
        "checked file"
    );
    Ok(report)
}

/// Check every file, preserving input order in the result.
pub fn check_files(files: &[PathBuf], jobs: usize) -> Result<Vec<FileReport>> {
    if jobs == 0 {
        return Err(AsmtError::Validation(error_messages::ZERO_JOBS.to_string()));
    }

    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool.install(|| {
            files
                .par_iter()
                .map(|path| check_file(path))
                .collect()
        }),
        Err(e) => {
            warn!("failed to create thread pool ({e}), checking sequentially");
            files.iter().map(|path| check_file(path)).collect()
        },
    }
}

/// Run the check command, printing diagnostics and a summary to stdout.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let start_time = Instant::now();
    let reports = check_files(&args.files, args.jobs)?;
    let total = reports.len();

    let mut reporter = Reporter::new(args.snippets, args.color);
    for report in reports {
        if let Some(rendered) = reporter.render(report) {
            println!("{}", rendered);
        }
    }

    let failed = reporter.failed();
    println!(
        "checked {} file(s): {} ok, {} failed",
        total,
        total - failed,
        failed
    );
    if args.verbose {
        eprintln!("Check completed in {:.2}s", start_time.elapsed().as_secs_f64());
    }

    if failed > 0 {
        return Err(AsmtError::Lex(format!(
            "{} {}",
            failed,
            error_messages::FILES_FAILED
        )));
    }
    Ok(())
}
