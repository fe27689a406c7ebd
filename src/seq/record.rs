// A record for one nucleotide sequence: the description line and the raw bases. The bases are
// stored uppercased, with all whitespace removed, so downstream matching never has to care about
// case or line breaks.

#[derive(Debug)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
