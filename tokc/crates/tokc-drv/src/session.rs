//! Scan sessions.
//!
//! A [`Session`] drives one pass over an input: lines come from a
//! [`LineReader`], are scanned and classified by `tokc-lex`, grouped into
//! statements by a [`StatementState`] that lives for the whole input, and
//! handed to a [`Report`].

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use tokc_lex::{tokenize_line, StatementState, TokenCategory};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{DriverError, OpenMode, Result};
use crate::reader::LineReader;
use crate::report::{reporter, Report};

/// Counters collected over one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Physical lines read.
    pub lines: usize,
    /// Statements opened.
    pub statements: usize,
    /// Lexemes scanned, empty ones included.
    pub tokens: usize,
    /// Lexical errors reported.
    pub errors: usize,
    /// Lines cut at the line capacity.
    pub truncated_lines: usize,
    /// Lexemes longer than the lexeme bound.
    pub overflowed_lexemes: usize,
}

/// One configured scan.
pub struct Session {
    config: Config,
}

impl Session {
    /// Creates a session with `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scans `input` to completion, feeding `report`.
    pub fn scan<R: BufRead>(&self, input: R, report: &mut dyn Report) -> Result<ScanSummary> {
        let mut summary = ScanSummary::default();
        let mut state = StatementState::new();
        let policy = self.config.scan.overflow;

        for line in LineReader::new(input, self.config.scan.line_capacity) {
            let line = line?;
            summary.lines += 1;
            if line.truncated {
                summary.truncated_lines += 1;
                warn!(
                    line = line.number,
                    capacity = self.config.scan.line_capacity,
                    "line exceeds capacity, remainder dropped"
                );
            }

            let mut scanned = 0;
            for token in tokenize_line(&line.text, policy) {
                let (next, observation) = state.observe(token.category);
                state = next;
                scanned += 1;

                if token.overflowed {
                    summary.overflowed_lexemes += 1;
                    warn!(
                        line = line.number,
                        lexeme = %token.lexeme,
                        ?policy,
                        "lexeme exceeds the length limit"
                    );
                }
                if token.category == TokenCategory::Error {
                    summary.errors += 1;
                    debug!(
                        line = line.number,
                        statement = observation.statement_index,
                        lexeme = %token.lexeme,
                        "lexical error"
                    );
                }

                if observation.opens_statement {
                    report.statement_start(observation.statement_index)?;
                }
                report.token(&observation, &token)?;
            }

            summary.tokens += scanned;
            debug!(line = line.number, lexemes = scanned, "scanned line");
        }

        report.finish()?;
        summary.statements = state.statement_index();
        info!(
            lines = summary.lines,
            statements = summary.statements,
            tokens = summary.tokens,
            errors = summary.errors,
            "scan complete"
        );
        Ok(summary)
    }

    /// Scans the file at `input` and writes the report to `output`.
    ///
    /// The input is opened before the output is created, so a missing input
    /// never leaves an empty report behind.
    pub fn run_paths(&self, input: &Path, output: &Path) -> Result<ScanSummary> {
        let input_file = File::open(input).map_err(|source| DriverError::Open {
            path: input.to_path_buf(),
            mode: OpenMode::Reading,
            source,
        })?;
        let output_file = File::create(output).map_err(|source| DriverError::Open {
            path: output.to_path_buf(),
            mode: OpenMode::Writing,
            source,
        })?;

        debug!(input = %input.display(), output = %output.display(), "starting scan");
        let mut report = reporter(&self.config.report, BufWriter::new(output_file));
        self.scan(BufReader::new(input_file), report.as_mut())
    }
}
