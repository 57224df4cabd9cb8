//! The batch command driver
//!
//! A [`Driver`] interprets a command file line by line against a slot
//! map of named [`Expression`]s, each bound on read/write to
//! `<dir>/<slot>.pcn`. The command alphabet is fixed at ten entries:
//!
//! | command | arity | effect |
//! |---|---|---|
//! | `r <slot>` | 1 | read `<input-dir>/<slot>.pcn` into `<slot>` |
//! | `p <slot>` | 1 | write `<slot>` to `<output-dir>/<slot>.pcn` |
//! | `! <dst> <src>` | 2 | `<dst> = ¬<src>` |
//! | `+ <dst> <lhs> <rhs>` | 3 | `<dst> = <lhs> ∨ <rhs>` |
//! | `& <dst> <lhs> <rhs>` | 3 | `<dst> = <lhs> ∧ <rhs>` |
//! | `xor <dst> <lhs> <rhs>` | 3 | `<dst> = <lhs> ⊕ <rhs>` |
//! | `dx <dst> <src> <var>` | 3 | `<dst> = ∂<src>/∂<var>` |
//! | `cx <dst> <src> <var>` | 3 | `<dst> = consensus(<src>, <var>)` |
//! | `sx <dst> <src> <var>` | 3 | `<dst> = smoothing(<src>, <var>)` |
//! | `q` | 0 | stop processing, even if lines remain |
//!
//! A blank line is skipped. Anything else that isn't exactly one of the
//! above, with exactly the arity it demands, is a [`DriverError`].

use std::collections::HashMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::error::DriverError;
use crate::expression::Expression;

/// Interprets a command file against a slot map of expressions, reading
/// and writing PCN files under a fixed input/output directory pair.
pub struct Driver {
    input_dir: PathBuf,
    output_dir: PathBuf,
    slots: HashMap<String, Expression>,
    done: bool,
}

impl Driver {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Driver {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            slots: HashMap::new(),
            done: false,
        }
    }

    /// Runs every line of `source` through [`Driver::process_line`],
    /// stopping early if a `q` command is encountered.
    pub fn run(&mut self, source: impl BufRead) -> Result<(), DriverError> {
        for (index, line) in source.lines().enumerate() {
            let line = line.map_err(crate::error::PcnError::from)?;
            self.process_line(index + 1, &line)?;
            if self.done {
                break;
            }
        }
        Ok(())
    }

    /// Processes a single already-read line. `line_no` is 1-based, used
    /// only for error messages.
    pub fn process_line(&mut self, line_no: usize, line: &str) -> Result<(), DriverError> {
        let mut fields = line.split_whitespace();
        let Some(command) = fields.next() else {
            return Ok(());
        };
        let args: Vec<&str> = fields.collect();

        match command {
            "r" => {
                let [slot] = require(line_no, command, &args, 1)?;
                self.read(line_no, slot)
            }
            "p" => {
                let [slot] = require(line_no, command, &args, 1)?;
                self.write(line_no, slot)
            }
            "!" => {
                let [dst, src] = require(line_no, command, &args, 2)?;
                let value = self.get(line_no, src)?.complement();
                self.slots.insert(dst.to_string(), value);
                Ok(())
            }
            "+" => self.binary(line_no, command, &args, Expression::or),
            "&" => self.binary(line_no, command, &args, Expression::and),
            "xor" => self.binary(line_no, command, &args, Expression::xor),
            "dx" => self.unary_var(line_no, command, &args, Expression::bool_diff),
            "cx" => self.unary_var(line_no, command, &args, Expression::consensus),
            "sx" => self.unary_var(line_no, command, &args, Expression::smoothing),
            "q" => {
                require::<0>(line_no, command, &args, 0)?;
                self.done = true;
                Ok(())
            }
            other => Err(DriverError::UnknownCommand {
                line: line_no,
                command: other.to_string(),
            }),
        }
    }

    fn read(&mut self, line_no: usize, slot: &str) -> Result<(), DriverError> {
        let path = self.input_dir.join(format!("{slot}.pcn"));
        let expr = Expression::from_pcn_file(&path)?;
        self.slots.insert(slot.to_string(), expr);
        Ok(())
    }

    fn write(&mut self, line_no: usize, slot: &str) -> Result<(), DriverError> {
        let expr = self.get(line_no, slot)?;
        let path = self.output_dir.join(format!("{slot}.pcn"));
        expr.write_pcn(&path)?;
        Ok(())
    }

    fn binary(
        &mut self,
        line_no: usize,
        command: &str,
        args: &[&str],
        op: fn(&Expression, &Expression) -> Expression,
    ) -> Result<(), DriverError> {
        let [dst, lhs, rhs] = require(line_no, command, args, 3)?;
        let lhs = self.get(line_no, lhs)?.clone();
        let rhs = self.get(line_no, rhs)?;
        let result = op(&lhs, rhs);
        self.slots.insert(dst.to_string(), result);
        Ok(())
    }

    fn unary_var(
        &mut self,
        line_no: usize,
        command: &str,
        args: &[&str],
        op: fn(&Expression, usize) -> Result<Expression, crate::error::ExpressionError>,
    ) -> Result<(), DriverError> {
        let [dst, src, var] = require(line_no, command, args, 3)?;
        let var: usize = var.parse().map_err(|_| DriverError::BadVariable {
            line: line_no,
            command: command.to_string(),
            value: var.to_string(),
        })?;
        let source = self.get(line_no, src)?;
        let result = op(source, var).map_err(|_| DriverError::BadVariable {
            line: line_no,
            command: command.to_string(),
            value: var.to_string(),
        })?;
        self.slots.insert(dst.to_string(), result);
        Ok(())
    }

    /// Whether a `q` command has already been processed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    fn get(&self, line_no: usize, slot: &str) -> Result<&Expression, DriverError> {
        self.slots.get(slot).ok_or_else(|| DriverError::MissingSlot {
            line: line_no,
            slot: slot.to_string(),
        })
    }
}

/// Checks `args` has exactly `expected` entries and returns them as a
/// fixed-size array, or a [`DriverError::WrongArity`].
fn require<'a, const N: usize>(
    line_no: usize,
    command: &str,
    args: &'a [&'a str],
    expected: usize,
) -> Result<[&'a str; N], DriverError> {
    if args.len() != expected {
        return Err(DriverError::WrongArity {
            line: line_no,
            command: command.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i]))
}

/// Convenience entry point: runs a whole command file against a fresh
/// driver rooted at `input_dir`/`output_dir`.
pub fn run_file(
    command_file: impl AsRef<Path>,
    input_dir: impl Into<PathBuf>,
    output_dir: impl Into<PathBuf>,
) -> Result<(), DriverError> {
    let text = std::fs::read_to_string(command_file.as_ref())
        .map_err(crate::error::PcnError::from)?;
    let mut driver = Driver::new(input_dir, output_dir);
    driver.run(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pcn;

    #[test]
    fn unknown_command_is_reported() {
        let mut driver = Driver::new(".", ".");
        let err = driver.process_line(1, "zzz a b").unwrap_err();
        assert!(matches!(err, DriverError::UnknownCommand { .. }));
    }

    #[test]
    fn wrong_arity_is_reported() {
        let mut driver = Driver::new(".", ".");
        let err = driver.process_line(1, "+ a b").unwrap_err();
        assert!(matches!(err, DriverError::WrongArity { .. }));
    }

    #[test]
    fn missing_slot_is_reported() {
        let mut driver = Driver::new(".", ".");
        let err = driver.process_line(1, "! a b").unwrap_err();
        assert!(matches!(err, DriverError::MissingSlot { .. }));
    }

    #[test]
    fn q_stops_processing_remaining_lines() {
        let mut driver = Driver::new(".", ".");
        driver.run("q\nzzz\n".as_bytes()).unwrap();
    }

    #[test]
    fn read_not_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let in_dir = dir.path().join("in");
        let out_dir = dir.path().join("out");
        std::fs::create_dir_all(&in_dir).unwrap();
        std::fs::create_dir_all(&out_dir).unwrap();
        pcn::write(
            in_dir.join("f.pcn"),
            &vec![crate::pcn::Cube::new(vec![1, -2])],
            2,
        )
        .unwrap();

        let mut driver = Driver::new(&in_dir, &out_dir);
        driver
            .run("r f\n! g f\np g\n".as_bytes())
            .unwrap();

        let written = pcn::parse(out_dir.join("g.pcn")).unwrap();
        assert_eq!(written.num_vars, 2);
    }
}
