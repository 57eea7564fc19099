//! Report writers.
//!
//! A [`Report`] receives statement markers and classified tokens in scan
//! order and renders them. Reporters never classify anything themselves.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tokc_lex::{Observation, Token, TokenCategory};

use crate::config::ReportConfig;
use crate::error::Result;

/// Supported report layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per token.
    Json,
}

/// Sink for scan results.
pub trait Report {
    /// Called when a new statement opens, before its first token.
    fn statement_start(&mut self, statement_index: usize) -> Result<()>;

    /// Called for every scanned token, empty ones included.
    fn token(&mut self, observation: &Observation, token: &Token) -> Result<()>;

    /// Called once after the last token.
    fn finish(&mut self) -> Result<()>;
}

/// Builds the reporter selected by `config`.
pub fn reporter<'w, W: Write + 'w>(config: &ReportConfig, out: W) -> Box<dyn Report + 'w> {
    match config.format {
        ReportFormat::Text => Box::new(TextReporter::new(out, config.separator_width)),
        ReportFormat::Json => Box::new(JsonReporter::new(out)),
    }
}

/// Writes the classic line-oriented report.
///
/// ```text
/// Statement #1
/// Lexeme 1 is 12 and is an INT_LITERAL
/// ===> 'x'
/// Lexical error: not a lexeme
/// ```
pub struct TextReporter<W> {
    out: W,
    separator: String,
}

impl<W: Write> TextReporter<W> {
    /// Creates a reporter whose statement separator is `separator_width`
    /// dashes.
    pub fn new(out: W, separator_width: usize) -> Self {
        Self {
            out,
            separator: "-".repeat(separator_width),
        }
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for TextReporter<W> {
    fn statement_start(&mut self, statement_index: usize) -> Result<()> {
        if statement_index > 1 {
            writeln!(self.out, "{}", self.separator)?;
        }
        writeln!(self.out, "Statement #{}", statement_index)?;
        Ok(())
    }

    fn token(&mut self, observation: &Observation, token: &Token) -> Result<()> {
        match token.category {
            TokenCategory::Empty => {}
            TokenCategory::Error => {
                writeln!(self.out, "===> '{}'", token.lexeme)?;
                writeln!(self.out, "Lexical error: not a lexeme")?;
            }
            category => {
                writeln!(
                    self.out,
                    "Lexeme {} is {} and is {}",
                    observation.token_index, token.lexeme, category
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    statement: usize,
    index: usize,
    lexeme: &'a str,
    category: &'static str,
}

/// Writes one JSON object per non-empty token.
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    /// Creates a JSON lines reporter.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for JsonReporter<W> {
    fn statement_start(&mut self, _statement_index: usize) -> Result<()> {
        Ok(())
    }

    fn token(&mut self, observation: &Observation, token: &Token) -> Result<()> {
        if token.category == TokenCategory::Empty {
            return Ok(());
        }
        let record = TokenRecord {
            statement: observation.statement_index,
            index: observation.token_index,
            lexeme: token.as_str(),
            category: token.category.label(),
        };
        serde_json::to_writer(&mut self.out, &record)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
