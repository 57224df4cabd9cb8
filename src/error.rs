//! Error types for the Boolean function manipulation engine
//!
//! Each failure domain gets its own enum with specific variants; there is
//! no blanket error type. Contract violations (an out-of-range variable
//! index passed to a raw URP kernel function) are not represented here,
//! since those are programmer errors and abort via `assert!`/`panic!` at
//! the call site.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced by the PCN codec (`pcn::parse`, `pcn::write`).
#[derive(Debug)]
pub enum PcnError {
    /// The file at `path` did not conform to the PCN wire format.
    ///
    /// Every parse failure (a non-integer field, a declared cube-literal
    /// count that doesn't match the literals that follow, a truncated
    /// file) collapses to this single variant naming the offending path.
    BadPcnFile { path: PathBuf, reason: String },
    /// The file could not be opened, read, or written.
    Io(io::Error),
}

impl fmt::Display for PcnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PcnError::BadPcnFile { path, reason } => {
                write!(f, "bad pcn file {}: {}", path.display(), reason)
            }
            PcnError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for PcnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PcnError::BadPcnFile { .. } => None,
            PcnError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for PcnError {
    fn from(err: io::Error) -> Self {
        PcnError::Io(err)
    }
}

/// Errors produced by the [`crate::expression::Expression`] façade.
///
/// This is the boundary where an out-of-range variable argument (e.g. one
/// read from a command file) becomes a recoverable `Result` rather than a
/// panic; the raw kernel functions in [`crate::urp`] still treat it as a
/// contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// `var` is not in `1..=num_vars`.
    VariableOutOfRange { var: i64, num_vars: usize },
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::VariableOutOfRange { var, num_vars } => write!(
                f,
                "variable {var} is out of range for an expression over {num_vars} variable(s)"
            ),
        }
    }
}

impl std::error::Error for ExpressionError {}

/// Errors produced by the batch command driver ([`crate::driver::Driver`]).
#[derive(Debug)]
pub enum DriverError {
    /// `command` on `line` is not in the recognised alphabet.
    UnknownCommand { line: usize, command: String },
    /// `command` on `line` was given the wrong number of arguments.
    WrongArity {
        line: usize,
        command: String,
        expected: usize,
        got: usize,
    },
    /// A command referenced a slot that has not been bound yet.
    MissingSlot { line: usize, slot: String },
    /// A command's variable argument failed to parse as an integer, or was
    /// out of range for the referenced expression.
    BadVariable {
        line: usize,
        command: String,
        value: String,
    },
    /// Loading or serializing a slot's `.pcn` file failed.
    Pcn(PcnError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::UnknownCommand { line, command } => {
                write!(f, "line {line}: unknown command '{command}'")
            }
            DriverError::WrongArity {
                line,
                command,
                expected,
                got,
            } => write!(
                f,
                "line {line}: command '{command}' expects {expected} argument(s), got {got}"
            ),
            DriverError::MissingSlot { line, slot } => {
                write!(f, "line {line}: slot '{slot}' has not been bound")
            }
            DriverError::BadVariable {
                line,
                command,
                value,
            } => write!(
                f,
                "line {line}: command '{command}' has an invalid variable argument '{value}'"
            ),
            DriverError::Pcn(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Pcn(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PcnError> for DriverError {
    fn from(err: PcnError) -> Self {
        DriverError::Pcn(err)
    }
}
