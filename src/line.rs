//! A line within a FASTQ file.

/// The leading byte of a header line.
pub const HEADER_PREFIX: u8 = b'@';

/// The leading byte of a separator line.
pub const SEPARATOR_PREFIX: u8 = b'+';

/// A line within a FASTQ file, classified by its leading byte.
///
/// A line on its own cannot say whether it holds sequence or quality data;
/// that depends on the lines before it and is decided by
/// [`State`](crate::state::State). Lines are never invalid: anything that is
/// neither empty nor starts with a known prefix is [`Line::Other`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    /// An empty line.
    Empty,
    /// A line starting with [`HEADER_PREFIX`].
    Header(&'a [u8]),
    /// A line starting with [`SEPARATOR_PREFIX`].
    Separator(&'a [u8]),
    /// Any other non-empty line.
    Other(&'a [u8]),
}

impl<'a> Line<'a> {
    /// Classifies a raw line with its terminator already removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastq_count_bases::Line;
    ///
    /// assert_eq!(Line::new(b""), Line::Empty);
    /// assert_eq!(Line::new(b"@r1"), Line::Header(b"@r1"));
    /// assert_eq!(Line::new(b"+"), Line::Separator(b"+"));
    /// assert_eq!(Line::new(b"ACGT"), Line::Other(b"ACGT"));
    /// ```
    pub fn new(bytes: &'a [u8]) -> Self {
        match bytes.first() {
            None => Line::Empty,
            Some(&HEADER_PREFIX) => Line::Header(bytes),
            Some(&SEPARATOR_PREFIX) => Line::Separator(bytes),
            Some(_) => Line::Other(bytes),
        }
    }

    /// Gets the raw bytes of the line, including any prefix.
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Line::Empty => &[],
            Line::Header(bytes) | Line::Separator(bytes) | Line::Other(bytes) => bytes,
        }
    }

    /// Gets the length of the line in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns whether the line is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Line::Empty)
    }
}

impl std::fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
