// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

// Full-pipeline tests: read files from tests/data/, digest, and check the printed report, the way
// the driver wires it all together.

use redigest::{
    digest::digest_sequence, enzyme::read_enzyme_file, report::write_report,
    seq::fasta::read_fasta_file,
};

#[test]
fn test_full_report() {
    let record = read_fasta_file("tests/data/ecori.fasta").expect("read fasta");
    let (enzymes, skipped) = read_enzyme_file("tests/data/enzymes.txt").expect("read enzymes");
    assert!(skipped.is_empty());

    let digests = digest_sequence(&record.sequence, &enzymes);
    let report = write_report(
        "tests/data/ecori.fasta",
        "tests/data/enzymes.txt",
        &record,
        &digests,
    );

    let expected = "\
Restriction enzyme analysis of sequence from file tests/data/ecori.fasta.
Cutting with enzymes found in file tests/data/enzymes.txt.
---------------------------------------------------------------
Sequence name:  test EcoRI digest
Sequence is 18 bases long.
---------------------------------------------------------------
There are 2 cutting sites for EcoRI, cutting at G^AATTC
There are 3 fragments:
Length- 3
  1 AAG
Length- 8
  1 AATTCAAG
Length- 7
  1 AATTCAA
---------------------------------------------------------------
There are 0 cutting sites for SmaI, cutting at CCC^GGG
There are no cutting sites found for SmaI.
---------------------------------------------------------------";
    assert_eq!(report, expected);
}

#[test]
fn test_malformed_lines_do_not_stop_the_run() {
    let record = read_fasta_file("tests/data/mixed.fasta").expect("read fasta");
    let (enzymes, skipped) =
        read_enzyme_file("tests/data/enzymes-mixed.txt").expect("read enzymes");

    // 'Broken GAATTC' is skipped (and reported), the comment silently; both valid enzymes parse.
    assert_eq!(enzymes.len(), 2);
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].line_num, 2);
    assert!(format!("{}", skipped[0]).contains("Broken GAATTC"));

    let digests = digest_sequence(&record.sequence, &enzymes);
    let report = write_report(
        "tests/data/mixed.fasta",
        "tests/data/enzymes-mixed.txt",
        &record,
        &digests,
    );
    assert!(report.contains("There are 2 cutting sites for EcoRI, cutting at G^AATTC"));
    assert!(report.contains("There are no cutting sites found for AluI."));
}

#[test]
fn test_fragments_reassemble_to_sequence() {
    let record = read_fasta_file("tests/data/ecori.fasta").expect("read fasta");
    let (enzymes, _) = read_enzyme_file("tests/data/enzymes.txt").expect("read enzymes");

    for digest in digest_sequence(&record.sequence, &enzymes) {
        assert_eq!(digest.fragments.len(), digest.cuts.len() + 1);
        let rebuilt: String = digest
            .fragments
            .iter()
            .map(|f| f.bases.as_str())
            .collect();
        assert_eq!(rebuilt, record.sequence);
    }
}

#[test]
fn test_missing_fasta_is_fatal() {
    assert!(read_fasta_file("tests/data/no-such-file.fasta").is_err());
}
