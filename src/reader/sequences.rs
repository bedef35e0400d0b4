//! An iterator over the sequence lines of a FASTQ file.

use std::io;
use std::io::BufRead;

use tracing::debug;
use tracing::trace;

use crate::Line;
use crate::Reader;
use crate::State;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to [`Sequences`].
#[derive(Debug)]
pub enum Error {
    /// Reading the given line (1-based) from the underlying reader failed.
    Io(usize, io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(line_no, err) => write!(f, "i/o error at line {line_no}: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Sequences
////////////////////////////////////////////////////////////////////////////////////////

/// An iterator that classifies each line of a [`Reader`] and yields the
/// length in bytes of every sequence line.
///
/// Lines that do not fit the expected record layout are skipped rather than
/// reported; only I/O failures end the iteration with an error. After an
/// error or the end of the input, the iterator only returns [`None`].
#[derive(Debug)]
pub struct Sequences<'a, T>
where
    T: BufRead,
{
    /// The inner reader.
    reader: &'a mut Reader<T>,

    /// The buffer the current line is reassembled in.
    buffer: Vec<u8>,

    /// The state of the line classifier.
    state: State,

    /// The number of lines read so far.
    line_no: usize,

    /// The number of sequence lines seen so far.
    sequences: usize,

    /// The number of bases seen so far.
    bases: u64,

    /// Whether the end of the input or an error has been reached.
    done: bool,
}

impl<'a, T> Sequences<'a, T>
where
    T: BufRead,
{
    /// Creates a new [`Sequences`].
    pub(crate) fn new(reader: &'a mut Reader<T>) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            state: State::default(),
            line_no: 0,
            sequences: 0,
            bases: 0,
            done: false,
        }
    }

    /// Gets the number of lines read so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Gets the current state of the line classifier.
    pub fn state(&self) -> State {
        self.state
    }
}

impl<T> Iterator for Sequences<'_, T>
where
    T: BufRead,
{
    type Item = Result<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            // (1) Reads the next line, which may take many reads of the
            // underlying reader.
            let line = match self.reader.read_line(&mut self.buffer) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.done = true;
                    debug!(
                        lines = self.line_no,
                        sequences = self.sequences,
                        bases = self.bases,
                        "reached the end of the input"
                    );
                    return None;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(Error::Io(self.line_no + 1, err)));
                }
            };

            self.line_no += 1;

            if self.state == State::Idle && matches!(line, Line::Other(_)) {
                trace!(line_no = self.line_no, "ignoring line outside of a record");
            }

            // (2) Advances the state machine. Sequence lines are never empty,
            // so a contribution of zero means the line was not a sequence.
            let (state, bases) = self.state.transition(&line);
            self.state = state;

            if bases > 0 {
                self.sequences += 1;
                self.bases += bases;
                return Some(Ok(bases));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    /// A reader that fails after handing out its data.
    struct Failing<'a>(&'a [u8]);

    impl Read for Failing<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }

            let n = buf.len().min(self.0.len());
            buf[..n].copy_from_slice(&self.0[..n]);
            self.0 = &self.0[n..];
            Ok(n)
        }
    }

    fn lengths(data: &[u8]) -> Vec<u64> {
        Reader::new(data)
            .sequences()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn well_formed_records() {
        assert_eq!(lengths(b"@r1\nACGT\n+\nFFFF\n@r2\nAC\n+\nFF\n"), [4, 2]);
    }

    #[test]
    fn empty_input() {
        assert!(lengths(b"").is_empty());
    }

    #[test]
    fn bare_header() {
        assert_eq!(lengths(b"@\nACG\n+\nFFF\n"), [3]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(lengths(b"\n@r1\n\n\nACGT\n\n+\n\nFFFF\n\n"), [4]);
    }

    #[test]
    fn only_the_first_line_after_a_header_counts() {
        assert_eq!(lengths(b"@r1\nACGT\nACGTACGT\n"), [4]);
    }

    #[test]
    fn quality_starting_with_a_header_prefix() {
        // `@` is a valid quality score, and it always starts a new record.
        assert_eq!(lengths(b"@r1\nAC\n+\n@F\nGGG\n"), [2, 3]);
    }

    #[test]
    fn tracks_line_numbers_and_state() {
        let mut reader = Reader::new(&b"@r1\nACGT\n+\n"[..]);
        let mut sequences = reader.sequences();

        assert_eq!(sequences.next().unwrap().unwrap(), 4);
        assert_eq!(sequences.line_no(), 2);
        assert_eq!(sequences.state(), State::Idle);

        assert!(sequences.next().is_none());
        assert_eq!(sequences.line_no(), 3);
        assert_eq!(sequences.state(), State::InQuality);
    }

    #[test]
    fn read_error_names_the_line() {
        let mut reader = Reader::new(io::BufReader::new(Failing(b"@r1\nACGT\n+\n")));
        let mut sequences = reader.sequences();

        assert_eq!(sequences.next().unwrap().unwrap(), 4);

        let err = sequences.next().unwrap().unwrap_err();
        assert!(matches!(err, Error::Io(4, _)));
        assert_eq!(err.to_string(), "i/o error at line 4: disk on fire");

        assert!(sequences.next().is_none());
    }

    #[test]
    fn count_stops_at_the_first_error() {
        let mut reader = Reader::new(io::BufReader::new(Failing(b"@r1\nACGT\n")));
        assert!(reader.count_bases().is_err());
    }
}
