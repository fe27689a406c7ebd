// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::DigestError;
use crate::seq::record::SeqRecord;

// Reads a single-record FASTA file: one '>' header line, then sequence lines of any width.
// Sequence lines are concatenated, whitespace is dropped, and bases are uppercased. If the file
// holds more than one record, everything from the second '>' on is ignored.

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqRecord, DigestError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut header: Option<String> = None;
    let mut sequence = String::new();

    for line in BufReader::new(file).lines() {
        let l: String = line?;
        let trimmed = l.trim();
        match header {
            None => {
                if trimmed.is_empty() {
                    continue; // leading blank lines
                }
                match trimmed.strip_prefix('>') {
                    Some(hdr) => header = Some(String::from(hdr.trim())),
                    None => {
                        return Err(DigestError::Input(format!(
                            "{}: expected a '>' FASTA header, found '{}'",
                            path.display(),
                            trimmed
                        )))
                    }
                }
            }
            Some(_) => {
                if trimmed.starts_with('>') {
                    break; // only the first record matters
                }
                for c in trimmed.chars() {
                    if !c.is_whitespace() {
                        sequence.push(c.to_ascii_uppercase());
                    }
                }
            }
        }
    }

    let header = header.ok_or_else(|| {
        DigestError::Input(format!("{}: empty file or no FASTA header", path.display()))
    })?;
    if sequence.is_empty() {
        return Err(DigestError::Input(format!(
            "{}: header '{}' has no sequence data",
            path.display(),
            header
        )));
    }

    Ok(SeqRecord { header, sequence })
}
