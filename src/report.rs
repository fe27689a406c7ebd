// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use itertools::Itertools;

use crate::digest::{EnzymeDigest, Fragment};
use crate::seq::record::SeqRecord;

const SEPARATOR_WIDTH: usize = 63;

// Fragment display: lines of 60 bases, grouped in blocks of 10, each line prefixed with the
// 1-based position (within the fragment) of its first base.
const LINE_BASES: usize = 60;
const BLOCK_BASES: usize = 10;
const MIN_LABEL_WIDTH: usize = 3;

// Renders the whole run as one string (no trailing newline; the caller println!s it).

pub fn write_report(
    fasta_fname: &str,
    enzyme_fname: &str,
    record: &SeqRecord,
    digests: &[EnzymeDigest],
) -> String {
    let sep = "-".repeat(SEPARATOR_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "Restriction enzyme analysis of sequence from file {}.",
        fasta_fname
    ));
    lines.push(format!(
        "Cutting with enzymes found in file {}.",
        enzyme_fname
    ));
    lines.push(sep.clone());
    lines.push(format!("Sequence name:  {}", record.header));
    lines.push(format!("Sequence is {} bases long.", record.len()));
    lines.push(sep.clone());

    for digest in digests {
        lines.push(format!(
            "There are {} cutting sites for {}, cutting at {}",
            digest.cuts.len(),
            digest.enzyme.name,
            digest.enzyme.marked_site()
        ));
        if digest.cuts.is_empty() {
            lines.push(format!(
                "There are no cutting sites found for {}.",
                digest.enzyme.name
            ));
        } else {
            lines.push(format!("There are {} fragments:", digest.fragments.len()));
            for fragment in &digest.fragments {
                lines.push(format!("Length- {}", fragment.len()));
                lines.extend(fragment_lines(fragment));
            }
        }
        lines.push(sep.clone());
    }

    lines.join("\n")
}

// One displayed line per 60 bases; a zero-length fragment yields no lines at all.

fn fragment_lines(fragment: &Fragment) -> Vec<String> {
    let width = label_width(fragment.len());
    let chars: Vec<char> = fragment.bases.chars().collect();
    chars
        .chunks(LINE_BASES)
        .enumerate()
        .map(|(line_no, line)| {
            let blocks = line
                .chunks(BLOCK_BASES)
                .map(|block| block.iter().collect::<String>())
                .join(" ");
            format!(
                "{:>width$} {}",
                line_no * LINE_BASES + 1,
                blocks,
                width = width
            )
        })
        .collect()
}

// Position labels are right-aligned to the widest label of the fragment, but never narrower than
// MIN_LABEL_WIDTH columns.

fn label_width(fragment_len: usize) -> usize {
    let last_label = if fragment_len == 0 {
        1
    } else {
        (fragment_len - 1) / LINE_BASES * LINE_BASES + 1
    };
    last_label.to_string().len().max(MIN_LABEL_WIDTH)
}
