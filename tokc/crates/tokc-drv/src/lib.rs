//! tokc-drv - Driver for the tokc statement tokenizer
//!
//! Reads an input file line by line, classifies every lexeme with
//! `tokc-lex`, and writes a report grouped by statement.
//!
//! ```
//! use tokc_drv::{Config, Session, TextReporter};
//!
//! let session = Session::new(Config::default());
//! let mut report = TextReporter::new(Vec::new(), 57);
//! let summary = session.scan("12+3;\n".as_bytes(), &mut report).unwrap();
//! assert_eq!(summary.statements, 1);
//!
//! let text = String::from_utf8(report.into_inner()).unwrap();
//! assert!(text.starts_with("Statement #1\nLexeme 1 is 12 and is an INT_LITERAL\n"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod reader;
pub mod report;
pub mod session;

pub use config::{Config, ReportConfig, ScanConfig};
pub use error::{DriverError, OpenMode, Result};
pub use reader::{LineReader, SourceLine};
pub use report::{reporter, JsonReporter, Report, ReportFormat, TextReporter};
pub use session::{ScanSummary, Session};
