//! Program Loader.
//!
//! This module turns LS-8 program text into a memory image. It performs:
//! 1. **Parsing:** One byte per line, written as a binary literal such as `10000010`.
//! 2. **Comment stripping:** `#` and everything after it is ignored; blank lines produce
//!    no byte.
//! 3. **Policy:** Malformed lines are skipped with a warning or rejected, per
//!    [`MalformedLinePolicy`].
//!
//! The loader knows nothing about the CPU; callers hand the resulting bytes to
//! [`Cpu::load_program`](crate::core::Cpu::load_program).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::MEMORY_SIZE;

/// What to do with a line that is neither blank, a comment, nor a byte literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MalformedLinePolicy {
    /// Drop the line and keep loading.
    #[default]
    Skip,
    /// Abort the load with [`LoadError::MalformedLine`].
    Reject,
}

/// Errors raised while loading a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line was not a binary byte literal (only under [`MalformedLinePolicy::Reject`]).
    #[error("line {line}: '{text}' is not a binary byte literal")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending text with the comment stripped.
        text: String,
    },

    /// The program has more bytes than memory has cells.
    #[error("program is {len} bytes but memory holds {}", MEMORY_SIZE)]
    ProgramTooLarge {
        /// Number of bytes parsed.
        len: usize,
    },
}

/// A parsed program image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Bytes to place in memory from address 0.
    pub bytes: Vec<u8>,
    /// Number of malformed lines dropped under [`MalformedLinePolicy::Skip`].
    pub skipped_lines: usize,
}

/// Parses one line. `Ok(None)` for blank and comment-only lines.
fn parse_line(line: &str) -> Result<Option<u8>, String> {
    let code = line.split('#').next().unwrap_or_default().trim();
    if code.is_empty() {
        return Ok(None);
    }
    u8::from_str_radix(code, 2)
        .map(Some)
        .map_err(|_| code.to_string())
}

/// Parses program text.
///
/// # Errors
///
/// * [`LoadError::MalformedLine`] for the first bad line under
///   [`MalformedLinePolicy::Reject`].
/// * [`LoadError::ProgramTooLarge`] when the image exceeds memory.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::{parse_program, MalformedLinePolicy};
///
/// let text = "# print8\n10000010 # LDI R0,8\n00000000\n00001000\n\n00000001 # HLT\n";
/// let program = parse_program(text, MalformedLinePolicy::Skip).unwrap();
/// assert_eq!(program.bytes, vec![0b1000_0010, 0, 8, 1]);
/// ```
pub fn parse_program(text: &str, policy: MalformedLinePolicy) -> Result<Program, LoadError> {
    let mut program = Program::default();
    for (idx, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(byte)) => program.bytes.push(byte),
            Ok(None) => {}
            Err(text) => match policy {
                MalformedLinePolicy::Skip => {
                    tracing::warn!(line = idx + 1, %text, "skipping malformed program line");
                    program.skipped_lines += 1;
                }
                MalformedLinePolicy::Reject => {
                    return Err(LoadError::MalformedLine {
                        line: idx + 1,
                        text,
                    });
                }
            },
        }
    }

    if program.bytes.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge {
            len: program.bytes.len(),
        });
    }
    tracing::debug!(
        bytes = program.bytes.len(),
        skipped = program.skipped_lines,
        "program parsed"
    );
    Ok(program)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read; otherwise as [`parse_program`].
pub fn load_program_file(
    path: impl AsRef<Path>,
    policy: MalformedLinePolicy,
) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&text, policy)
}
