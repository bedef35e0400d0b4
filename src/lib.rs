//! `fastq_count_bases` is a crate for counting the bases (nucleotides) in a
//! FASTQ file.
//!
//! A FASTQ file stores reads in records of four lines: a header line starting
//! with `@`, the sequence, a separator line starting with `+`, and the
//! quality scores. This crate reads such a file in a single streaming pass,
//! works out which lines hold sequence data from their position relative to
//! the header and separator lines, and adds up their lengths.
//!
//! The format is not validated. Lines that do not fit the record layout are
//! skipped, sequences and qualities are not compared, and only a failure of
//! the underlying reader is an error. Sequences must fit on a single line, but
//! that line can be arbitrarily long.
//!
//! ## Counting bases
//!
//! Wrap any [`BufRead`](std::io::BufRead) in a [`Reader`] and call
//! [`Reader::count_bases()`]:
//!
//! ```
//! use fastq_count_bases as fcb;
//!
//! let data = b"@r1\nACGT\n+\nFFFF\n@r2\nAC\n+\nFF\n";
//! let mut reader = fcb::Reader::new(&data[..]);
//!
//! assert_eq!(reader.count_bases()?, 6);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! If you need the individual sequence lengths, iterate over
//! [`Reader::sequences()`] instead. The classification of single lines is
//! available through [`Line`] and [`State`].
//!
//! ## Reading files or standard input
//!
//! [`Input`] maps a command line value to a file or to standard input (`-`)
//! and opens it for buffered reading:
//!
//! ```no_run
//! use fastq_count_bases as fcb;
//!
//! let input = fcb::Input::new("reads.fq");
//! let total = fcb::Reader::new(input.open()?).count_bases()?;
//! println!("{total}");
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod input;
pub mod line;
pub mod reader;
pub mod state;

pub use input::Input;
pub use line::Line;
pub use state::State;

pub use self::reader::Reader;
