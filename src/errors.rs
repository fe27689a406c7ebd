// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{fmt, io};

// Fatal errors: anything that prevents the run from producing a report at all.

#[derive(Debug)]
pub enum DigestError {
    Io(io::Error),
    Input(String),
}

// These allow conversion to DigestError, required for run() to return Result<()> and for '?' to
// work.

impl From<io::Error> for DigestError {
    fn from(e: io::Error) -> Self {
        DigestError::Io(e)
    }
}

impl From<String> for DigestError {
    fn from(s: String) -> Self {
        DigestError::Input(s)
    }
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestError::Io(e) => write!(f, "I/O error: {}", e),
            DigestError::Input(msg) => write!(f, "Input error: {}", msg),
        }
    }
}

// A malformed enzyme definition line. Not fatal: the line is skipped (and reported), and the run
// goes on with the remaining enzymes.

#[derive(Debug)]
pub struct EnzymeLineError {
    pub line_num: usize,
    pub line: String,
    pub reason: String,
}

impl fmt::Display for EnzymeLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipping enzyme line {} ('{}'): {}",
            self.line_num, self.line, self.reason
        )
    }
}
