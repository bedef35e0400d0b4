//! The source a FASTQ file is read from.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

/// The token that selects standard input.
pub const STDIN_TOKEN: &str = "-";

/// An input source: a file on disk or standard input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// Standard input.
    Stdin,

    /// A file on disk.
    Path(PathBuf),
}

impl Input {
    /// Creates an input from a command line value, where [`STDIN_TOKEN`]
    /// selects standard input and anything else is a file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    ///
    /// use fastq_count_bases::Input;
    ///
    /// assert_eq!(Input::new("-"), Input::Stdin);
    /// assert_eq!(
    ///     Input::new("reads.fq"),
    ///     Input::Path(PathBuf::from("reads.fq"))
    /// );
    /// ```
    pub fn new(value: impl Into<PathBuf>) -> Self {
        let path = value.into();

        if path.as_os_str() == STDIN_TOKEN {
            Input::Stdin
        } else {
            Input::Path(path)
        }
    }

    /// Gets the path of the file, if this input is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Input::Stdin => None,
            Input::Path(path) => Some(path),
        }
    }

    /// Opens the input for buffered reading.
    ///
    /// The returned handle owns the underlying file (or the standard input
    /// lock), which is released when the handle is dropped.
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::Path(path) => File::open(path)
                .map(BufReader::new)
                .map(|reader| Box::new(reader) as Box<dyn BufRead>),
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
