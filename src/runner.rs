// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use log::{debug, info};

use clap::Parser;

use crate::digest::digest_sequence;
use crate::enzyme::read_enzyme_file;
use crate::errors::DigestError;
use crate::report::write_report;
use crate::seq::fasta::read_fasta_file;
use crate::seq::record::SeqRecord;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// FASTA file with the sequence to digest
    fasta_fname: String,

    /// Enzyme list file, one 'Name;Pattern' per line ('^' or '%' marks the cut)
    enzyme_fname: String,

    /// Info mode (sequence and enzyme counts, no digest)
    #[arg(short, long)]
    info: bool,
}

pub fn run() -> Result<(), DigestError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    let record = read_fasta_file(&cli.fasta_fname)?;
    debug!(
        "read '{}' ({} bases) from {}",
        record.header,
        record.len(),
        cli.fasta_fname
    );

    let (enzymes, skipped) = read_enzyme_file(&cli.enzyme_fname)?;
    // Skipped lines are not fatal, but they must not go unnoticed either.
    for line_err in &skipped {
        eprintln!("WARNING: {}", line_err);
    }
    if enzymes.is_empty() {
        eprintln!(
            "WARNING: no valid enzyme definitions in {}",
            cli.enzyme_fname
        );
    }

    if cli.info {
        output_info(&cli.fasta_fname, &record, enzymes.len());
        return Ok(());
    }

    let digests = digest_sequence(&record.sequence, &enzymes);
    let report = write_report(&cli.fasta_fname, &cli.enzyme_fname, &record, &digests);
    println!("{}", report);

    Ok(())
}

fn output_info(fname: &str, record: &SeqRecord, nb_enzymes: usize) {
    println!("name: {}", fname);
    println!("sequence_name: {}", record.header);
    println!("nb_bases: {}", record.len());
    println!("nb_enzymes: {}", nb_enzymes);
    println!();
}
