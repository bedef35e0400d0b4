//! A FASTQ file reader.

use std::io::BufRead;
use std::io::{self};

use crate::Line;

pub mod sequences;

pub use sequences::Sequences;

/// The new line character.
const NEW_LINE: u8 = b'\n';

/// The carriage return character.
const CARRIAGE_RETURN: u8 = b'\r';

/// A FASTQ file reader.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates a FASTQ file reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"@r1\nACGT\n+\nFFFF\n";
    /// let reader = fastq_count_bases::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"@r1\nACGT\n+\nFFFF\n";
    /// let cursor = io::Cursor::new(data);
    ///
    /// let reader = fastq_count_bases::Reader::new(cursor);
    /// assert_eq!(reader.inner().position(), 0);
    /// ```
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reads a raw line from the underlying reader into `buffer`.
    ///
    /// The buffer is cleared first. The line terminator (`\n` or `\r\n`) is
    /// removed from the buffer but is included in the returned number of
    /// bytes consumed. Zero bytes consumed means the end of the input. A line
    /// is read in full no matter how many reads of the underlying reader it
    /// takes.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"@r1\nACGT\r\n+\nFFFF";
    /// let mut reader = fastq_count_bases::Reader::new(&data[..]);
    ///
    /// let mut buffer = Vec::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 4);
    /// assert_eq!(buffer, b"@r1");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 6);
    /// assert_eq!(buffer, b"ACGT");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 2);
    /// assert_eq!(buffer, b"+");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 4);
    /// assert_eq!(buffer, b"FFFF");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut Vec<u8>) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Reads and classifies a [`Line`] from the underlying reader.
    ///
    /// Returns [`None`] at the end of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// use fastq_count_bases::Line;
    ///
    /// let data = b"@r1\n\nACGT\n";
    /// let mut reader = fastq_count_bases::Reader::new(&data[..]);
    ///
    /// let mut buffer = Vec::new();
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Header(_))));
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Empty)));
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Other(_))));
    /// assert!(reader.read_line(&mut buffer)?.is_none());
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line<'b>(&mut self, buffer: &'b mut Vec<u8>) -> io::Result<Option<Line<'b>>> {
        match self.read_line_raw(buffer)? {
            0 => Ok(None),
            _ => Ok(Some(Line::new(buffer))),
        }
    }

    /// Returns an iterator over the lengths of the sequence lines in the
    /// underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"@r1\nACGT\n+\nFFFF\n@r2\nAC\n+\nFF\n";
    /// let mut reader = fastq_count_bases::Reader::new(&data[..]);
    ///
    /// let lengths = reader.sequences().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(lengths, [4, 2]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn sequences(&mut self) -> Sequences<'_, T> {
        Sequences::new(self)
    }

    /// Counts the bases in all sequence lines of the underlying reader.
    ///
    /// The count stops at the first read error.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"@r1\nACGT\n+\nFFFF\n@r2\nAC\n+\nFF\n";
    /// let mut reader = fastq_count_bases::Reader::new(&data[..]);
    ///
    /// assert_eq!(reader.count_bases()?, 6);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn count_bases(&mut self) -> sequences::Result<u64> {
        self.sequences().sum()
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

/// Reads a line from a buffered reader, stripping the line terminator.
fn read_line<T>(reader: &mut T, buffer: &mut Vec<u8>) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_until(NEW_LINE, buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.last() == Some(&NEW_LINE) {
                buffer.pop();

                if buffer.last() == Some(&CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
