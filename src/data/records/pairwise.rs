//! ## Pairwise alignment records
//!
//! Alignment results are stored as tab-separated lines behind a version
//! header:
//!
//! ```text
//! #pairalign	v1
//! >	<alphabet>	<first id>	<first symbols>	<second id>	<second symbols>
//! =	<score>	<first aligned>	<second aligned>	<consensus>	<first offset>	<second offset>	<start1>,<start2>	<end1>,<end2>	<ins1>,<ins2>	<key=value;...>
//! ```
//!
//! Each `>` line begins one [`PairwiseSequenceAlignment`], and each `=` line
//! following it is one of its [`PairwiseAlignedSequence`] values. The start
//! and end columns hold the 0-based, end-exclusive ranges of each sequence
//! covered by the alignment.

use super::RecordFile;
use crate::{
    alignment::{PairwiseAlignedSequence, PairwiseSequenceAlignment},
    data::{alphabet::Alphabet, sequence::Sequence},
    unwrap_or_return_some_err,
};
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Error as IOError, ErrorKind, Write},
    path::Path,
};

#[cfg(test)]
mod test;

/// The first line of every record file.
pub const RECORD_HEADER: &str = "#pairalign\tv1";

const SEQUENCES_TAG: &str = ">";
const ALIGNED_TAG: &str = "=";

/// Writes [`PairwiseSequenceAlignment`] values in the record format.
#[derive(Debug)]
pub struct PairwiseRecordWriter<W: Write> {
    writer:       W,
    wrote_header: bool,
}

impl<W: Write> PairwiseRecordWriter<W> {
    /// Wraps a writer. The version header is written before the first record.
    pub fn new(writer: W) -> Self {
        PairwiseRecordWriter {
            writer,
            wrote_header: false,
        }
    }

    /// Writes one alignment result: its sequences, then each aligned
    /// sequence.
    ///
    /// ## Errors
    /// Returns an [`ErrorKind::InvalidInput`] error if an identifier or a
    /// metadata entry contains a reserved character (tab, newline, `=`, or
    /// `;`), and propagates IO errors.
    pub fn write(&mut self, alignment: &PairwiseSequenceAlignment<'_>) -> std::io::Result<()> {
        if !self.wrote_header {
            writeln!(self.writer, "{RECORD_HEADER}")?;
            self.wrote_header = true;
        }

        let first = alignment.first_sequence();
        let second = alignment.second_sequence();
        check_field(first.id(), "sequence id")?;
        check_field(second.id(), "sequence id")?;

        let w = &mut self.writer;
        w.write_all(SEQUENCES_TAG.as_bytes())?;
        for field in [first.alphabet().name().as_bytes(), first.id().as_bytes(), first.as_bytes()] {
            write_field(w, field)?;
        }
        for field in [second.id().as_bytes(), second.as_bytes()] {
            write_field(w, field)?;
        }
        w.write_all(b"\n")?;

        for aligned in alignment {
            self.write_aligned(aligned)?;
        }
        Ok(())
    }

    fn write_aligned(&mut self, aligned: &PairwiseAlignedSequence) -> std::io::Result<()> {
        let mut metadata = String::new();
        for (key, value) in &aligned.metadata {
            check_field(key, "metadata key")?;
            check_field(value, "metadata value")?;
            if !metadata.is_empty() {
                metadata.push(';');
            }
            metadata.push_str(key);
            metadata.push('=');
            metadata.push_str(value);
        }

        let mut buffer = itoa::Buffer::new();
        let w = &mut self.writer;
        w.write_all(ALIGNED_TAG.as_bytes())?;
        write_field(w, buffer.format(aligned.score).as_bytes())?;
        for field in [&aligned.first, &aligned.second, &aligned.consensus] {
            write_field(w, field)?;
        }
        write_field(w, buffer.format(aligned.first_offset).as_bytes())?;
        write_field(w, buffer.format(aligned.second_offset).as_bytes())?;
        write_usize_pair(w, &mut buffer, aligned.first_range.start, aligned.second_range.start)?;
        write_usize_pair(w, &mut buffer, aligned.first_range.end, aligned.second_range.end)?;
        write_usize_pair(w, &mut buffer, aligned.insertions[0], aligned.insertions[1])?;
        write_field(w, metadata.as_bytes())?;
        w.write_all(b"\n")
    }

    /// Flushes and returns the inner writer.
    ///
    /// ## Errors
    /// Propagates any IO error from flushing.
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl PairwiseRecordWriter<BufWriter<File>> {
    /// Creates a record file, truncating any existing file.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be created. The file path is
    /// included in the error message.
    pub fn to_filename<P: AsRef<Path>>(filename: P) -> std::io::Result<Self> {
        let file = Self::create_file(filename)?;
        Ok(PairwiseRecordWriter::new(BufWriter::new(file)))
    }
}

impl<W: Write> RecordFile for PairwiseRecordWriter<W> {
    const RECORD_NAME: &'static str = "pairwise alignment records";
}

#[inline]
fn write_field<W: Write>(w: &mut W, field: &[u8]) -> std::io::Result<()> {
    w.write_all(b"\t")?;
    w.write_all(field)
}

#[inline]
fn write_usize_pair<W: Write>(w: &mut W, buffer: &mut itoa::Buffer, a: usize, b: usize) -> std::io::Result<()> {
    write_field(w, buffer.format(a).as_bytes())?;
    w.write_all(b",")?;
    w.write_all(buffer.format(b).as_bytes())
}

fn check_field(field: &str, what: &str) -> std::io::Result<()> {
    if field.contains(['\t', '\n', '\r', '=', ';']) {
        return Err(IOError::new(
            ErrorKind::InvalidInput,
            format!("The {what} '{}' contains a reserved character!", field.escape_debug()),
        ));
    }
    Ok(())
}

/// Structure for buffered reading of alignment records. Alphabet names in the
/// records are resolved against the alphabets provided on construction.
#[derive(Debug)]
pub struct PairwiseRecordReader<'a, R: std::io::Read> {
    reader:      BufReader<R>,
    alphabets:   &'a [&'a Alphabet],
    buffer:      String,
    line_number: usize,
    checked:     bool,
    pending:     Option<PairwiseSequenceAlignment<'a>>,
}

impl<'a, R: std::io::Read> PairwiseRecordReader<'a, R> {
    /// Creates an iterator over record data, wrapping the input in a buffered
    /// reader.
    pub fn new(inner: R, alphabets: &'a [&'a Alphabet]) -> Self {
        PairwiseRecordReader {
            reader: BufReader::new(inner),
            alphabets,
            buffer: String::new(),
            line_number: 0,
            checked: false,
            pending: None,
        }
    }

    fn get_error<T>(&self, msg: &str) -> std::io::Result<T> {
        Err(IOError::new(
            ErrorKind::InvalidData,
            format!("{msg} See line {line}.", line = self.line_number),
        ))
    }

    /// Reads the next line into the buffer without its line break, returning
    /// false at the end of the input.
    fn read_line(&mut self) -> std::io::Result<bool> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        let trimmed = self.buffer.trim_end_matches(['\n', '\r']).len();
        self.buffer.truncate(trimmed);
        Ok(true)
    }

    fn check_header(&mut self) -> std::io::Result<()> {
        self.checked = true;
        if !self.read_line()? {
            return self.get_error("No alignment record data was found!");
        }
        if self.buffer != RECORD_HEADER {
            return self.get_error("Missing or unsupported record version header!");
        }
        Ok(())
    }

    fn parse_sequences(&self, fields: &[&str]) -> std::io::Result<PairwiseSequenceAlignment<'a>> {
        let &[alphabet, first_id, first, second_id, second] = fields else {
            return self.get_error("A sequence line must have 6 fields!");
        };
        let Some(alphabet) = self.alphabets.iter().copied().find(|a| a.name() == alphabet) else {
            return self.get_error(&format!("Unknown alphabet '{alphabet}'!"));
        };

        let first = Sequence::with_id(first_id, alphabet, first)?;
        let second = Sequence::with_id(second_id, alphabet, second)?;
        Ok(PairwiseSequenceAlignment::new(first, second))
    }

    fn parse_aligned(&self, fields: &[&str]) -> std::io::Result<PairwiseAlignedSequence> {
        let &[
            score,
            first,
            second,
            consensus,
            first_offset,
            second_offset,
            starts,
            ends,
            insertions,
            metadata,
        ] = fields
        else {
            return self.get_error("An aligned sequence line must have 11 fields!");
        };

        if first.len() != second.len() {
            return self.get_error("The aligned sequences must have equal lengths!");
        }

        let [first_start, second_start] = self.parse_pair(starts)?;
        let [first_end, second_end] = self.parse_pair(ends)?;
        if first_end < first_start || second_end < second_start {
            return self.get_error("An alignment range ends before it starts!");
        }

        Ok(PairwiseAlignedSequence {
            score:         self.parse_int(score)?,
            first:         first.as_bytes().to_vec(),
            second:        second.as_bytes().to_vec(),
            consensus:     consensus.as_bytes().to_vec(),
            first_offset:  self.parse_int(first_offset)?,
            second_offset: self.parse_int(second_offset)?,
            first_range:   first_start..first_end,
            second_range:  second_start..second_end,
            insertions:    self.parse_pair(insertions)?,
            metadata:      self.parse_metadata(metadata)?,
        })
    }

    fn parse_int<T: std::str::FromStr>(&self, field: &str) -> std::io::Result<T> {
        match field.parse() {
            Ok(value) => Ok(value),
            Err(_) => self.get_error(&format!("Invalid integer '{field}'!")),
        }
    }

    fn parse_pair(&self, field: &str) -> std::io::Result<[usize; 2]> {
        let Some((a, b)) = field.split_once(',') else {
            return self.get_error(&format!("Expected a comma-separated pair, found '{field}'!"));
        };
        Ok([self.parse_int(a)?, self.parse_int(b)?])
    }

    fn parse_metadata(&self, field: &str) -> std::io::Result<BTreeMap<String, String>> {
        field
            .split(';')
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((key, value)) => Ok((key.to_string(), value.to_string())),
                None => self.get_error(&format!("Metadata entry '{entry}' is missing '='!")),
            })
            .collect()
    }
}

impl PairwiseRecordReader<'_, File> {
    /// Reads a record file into an iterator backed by a buffered reader.
    ///
    /// ## Errors
    /// Will return `Err` if file or permissions do not exist, or if the file is
    /// empty. The file path is included in the error message.
    pub fn from_filename<'a, P: AsRef<Path>>(
        filename: P, alphabets: &'a [&'a Alphabet],
    ) -> std::io::Result<PairwiseRecordReader<'a, File>> {
        let file = Self::open_nonempty_file(filename)?;
        Ok(PairwiseRecordReader::new(file, alphabets))
    }
}

impl<R: std::io::Read> RecordFile for PairwiseRecordReader<'_, R> {
    const RECORD_NAME: &'static str = "pairwise alignment records";
}

/// An iterator over the alignment results of a record file.
impl<'a, R: std::io::Read> Iterator for PairwiseRecordReader<'a, R> {
    type Item = std::io::Result<PairwiseSequenceAlignment<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.checked {
            unwrap_or_return_some_err!(self.check_header());
        }

        loop {
            if !unwrap_or_return_some_err!(self.read_line()) {
                return self.pending.take().map(Ok);
            }
            if self.buffer.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = self.buffer.split('\t').collect();
            match fields[0] {
                SEQUENCES_TAG => {
                    let next = unwrap_or_return_some_err!(self.parse_sequences(&fields[1..]));
                    if let Some(done) = self.pending.replace(next) {
                        return Some(Ok(done));
                    }
                }
                ALIGNED_TAG => {
                    let aligned = unwrap_or_return_some_err!(self.parse_aligned(&fields[1..]));
                    let Some(alignment) = self.pending.as_mut() else {
                        return Some(self.get_error("An aligned sequence line preceded any sequence line!"));
                    };
                    if let Some(score) = alignment.score()
                        && score != aligned.score
                    {
                        let msg = format!("Aligned sequence scored {} in a group scoring {score}!", aligned.score);
                        return Some(self.get_error(&msg));
                    }
                    alignment.push(aligned);
                }
                tag => return Some(self.get_error(&format!("Unknown line tag '{tag}'!"))),
            }
        }
    }
}
