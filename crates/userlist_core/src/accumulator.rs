//! File-backed running total.
//!
//! # Responsibility
//! - Read a decimal integer from a text source asynchronously.
//! - Add each successfully read value to an instance-owned total.
//! - Report every outcome to the caller, success or failure.
//!
//! # Invariants
//! - The read is the only suspension point of an accumulation.
//! - A failed accumulation leaves `total` unchanged.
//! - The continuation of `add_from_source_then` runs exactly once per call.

use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type AccumulatorResult<T> = Result<T, AccumulatorError>;

/// Failure of one accumulation step.
#[derive(Debug)]
pub enum AccumulatorError {
    Read { path: PathBuf, source: io::Error },
    Empty { path: PathBuf },
    Parse { path: PathBuf, content: String },
    Overflow { total: i64, value: i64 },
}

impl AccumulatorError {
    /// Stable metadata code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "source_read_failed",
            Self::Empty { .. } => "source_empty",
            Self::Parse { .. } => "source_not_integer",
            Self::Overflow { .. } => "total_overflow",
        }
    }
}

impl Display for AccumulatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Empty { path } => write!(f, "source `{}` is empty", path.display()),
            Self::Parse { path, content } => write!(
                f,
                "source `{}` does not contain a decimal integer: `{content}`",
                path.display()
            ),
            Self::Overflow { total, value } => {
                write!(f, "adding {value} to total {total} overflows")
            }
        }
    }
}

impl Error for AccumulatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Empty { .. } | Self::Parse { .. } | Self::Overflow { .. } => None,
        }
    }
}

/// Reads and parses the integer stored at `path`.
///
/// Surrounding whitespace (including a trailing newline) is ignored.
///
/// # Errors
/// - `Read` when the file cannot be read.
/// - `Empty` when the file holds only whitespace.
/// - `Parse` when the content is not a decimal `i64`.
pub async fn read_value(path: &Path) -> AccumulatorResult<i64> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AccumulatorError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AccumulatorError::Empty {
            path: path.to_path_buf(),
        });
    }

    trimmed
        .parse::<i64>()
        .map_err(|_| AccumulatorError::Parse {
            path: path.to_path_buf(),
            content: trimmed.to_string(),
        })
}

/// Running total fed from one source file.
#[derive(Debug, Clone)]
pub struct Accumulator {
    source: PathBuf,
    total: i64,
}

impl Accumulator {
    /// Creates an accumulator over `source` with a zero total.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            total: 0,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    /// Reads the source once and adds its value to the total.
    ///
    /// Returns the new total.
    ///
    /// # Errors
    /// - Any `read_value` error, or `Overflow` when the sum exceeds `i64`.
    pub async fn add_from_source(&mut self) -> AccumulatorResult<i64> {
        let started_at = Instant::now();
        let outcome = self.try_add().await;

        match &outcome {
            Ok(total) => info!(
                "event=accumulate module=accumulator status=ok duration_ms={} total={}",
                started_at.elapsed().as_millis(),
                total
            ),
            Err(err) => error!(
                "event=accumulate module=accumulator status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            ),
        }

        outcome
    }

    /// Callback form of `add_from_source`.
    ///
    /// `on_done` is invoked with the outcome whether the read succeeded or not.
    pub async fn add_from_source_then<F>(&mut self, on_done: F)
    where
        F: FnOnce(&AccumulatorResult<i64>),
    {
        let outcome = self.add_from_source().await;
        on_done(&outcome);
    }

    async fn try_add(&mut self) -> AccumulatorResult<i64> {
        let value = read_value(&self.source).await?;
        let total = self
            .total
            .checked_add(value)
            .ok_or(AccumulatorError::Overflow {
                total: self.total,
                value,
            })?;
        self.total = total;
        Ok(total)
    }
}
