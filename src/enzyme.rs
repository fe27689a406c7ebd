// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{DigestError, EnzymeLineError};

// A restriction enzyme as defined by one line of the enzyme list file, e.g. "EcoRI;G^AATTC".
// 'site' holds the literal recognition bases with the cleavage marker stripped; 'cut_offset' is
// where the marker sat within the site (0 ..= site.len()). The marker itself ('^' or '%') is kept
// so the pattern can be displayed exactly as the user wrote it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enzyme {
    pub name: String,
    pub site: String,
    pub cut_offset: usize,
    marker: char,
}

impl Enzyme {
    // Parses "Name;Pattern". Returns the reason on failure; the caller knows the line number and
    // wraps it in an EnzymeLineError.
    pub fn from_line(line: &str) -> Result<Enzyme, String> {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != 2 {
            return Err(String::from("expected exactly one ';' separator"));
        }
        let name = fields[0].trim();
        let pattern = fields[1].trim();
        if name.is_empty() {
            return Err(String::from("empty enzyme name"));
        }
        if pattern.is_empty() {
            return Err(String::from("empty recognition pattern"));
        }

        let mut marker: Option<(usize, char)> = None;
        let mut site = String::with_capacity(pattern.len());
        for c in pattern.chars() {
            match c {
                '^' | '%' => {
                    if marker.is_some() {
                        return Err(String::from("more than one cleavage marker in pattern"));
                    }
                    // site is all-ASCII at this point, so len() is the base count
                    marker = Some((site.len(), c));
                }
                'A' | 'C' | 'G' | 'T' | 'a' | 'c' | 'g' | 't' => {
                    site.push(c.to_ascii_uppercase());
                }
                other => {
                    return Err(format!("invalid base '{}' in recognition pattern", other));
                }
            }
        }

        let (cut_offset, marker) = marker
            .ok_or_else(|| String::from("no cleavage marker ('^' or '%') in pattern"))?;
        if site.is_empty() {
            return Err(String::from("empty recognition sequence"));
        }

        Ok(Enzyme {
            name: String::from(name),
            site,
            cut_offset,
            marker,
        })
    }

    // The recognition pattern as the user wrote it, marker reinserted at its offset.
    pub fn marked_site(&self) -> String {
        let mut s = String::with_capacity(self.site.len() + 1);
        s.push_str(&self.site[..self.cut_offset]);
        s.push(self.marker);
        s.push_str(&self.site[self.cut_offset..]);
        s
    }
}

impl fmt::Display for Enzyme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.name, self.marked_site())
    }
}

// Reads an enzyme list file: one "Name;Pattern" definition per line. Blank lines and lines whose
// first non-blank character is '#' are skipped silently. Malformed lines are collected (with line
// number and reason), not fatal; only an unreadable file aborts.

pub fn read_enzyme_file<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<Enzyme>, Vec<EnzymeLineError>), DigestError> {
    let file = File::open(path)?;
    let mut enzymes: Vec<Enzyme> = Vec::new();
    let mut skipped: Vec<EnzymeLineError> = Vec::new();

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let l: String = line?;
        let trimmed = l.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match Enzyme::from_line(trimmed) {
            Ok(enzyme) => enzymes.push(enzyme),
            Err(reason) => skipped.push(EnzymeLineError {
                line_num: idx + 1,
                line: String::from(trimmed),
                reason,
            }),
        }
    }

    Ok((enzymes, skipped))
}
