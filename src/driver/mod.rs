//! Test mode: run every line of an input file through one hash function.

pub mod reader;

use crate::registry::{self, HashEntry};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum DriverError {
    UnknownHash(String),
    OpenFile { path: PathBuf, source: io::Error },
    Io(io::Error),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownHash(name) => write!(f, "can't find hash '{name}'"),
            Self::OpenFile { path, source } => {
                write!(f, "can't open file '{}': {source}", path.display())
            }
            Self::Io(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownHash(_) => None,
            Self::OpenFile { source, .. } | Self::Io(source) => Some(source),
        }
    }
}

/// Resolve `hash_name`, open `path`, and hash it line by line to stdout.
///
/// The name is resolved before the file is touched, so an unknown hash
/// reports even when the file does not exist.
pub fn run_file(path: &Path, hash_name: &str) -> Result<(), DriverError> {
    let entry = registry::find(hash_name)
        .ok_or_else(|| DriverError::UnknownHash(hash_name.to_owned()))?;

    let file = File::open(path).map_err(|source| DriverError::OpenFile {
        path: path.to_owned(),
        source,
    })?;
    let mut reader = BufReader::with_capacity(reader::LINE_CAPACITY, file);

    let mut stdout = io::stdout().lock();
    process(&mut reader, &mut stdout, entry).map_err(DriverError::Io)
}

/// Hash each line of `input` and write `<line>    <decimal hash>` per line.
///
/// One trailing newline is stripped before hashing, so a line hashes the
/// same whether or not the file ends with a final newline. Line content
/// is treated as raw bytes and passed through unmodified.
pub fn process<R, W>(input: &mut R, output: &mut W, entry: &HashEntry) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = Vec::with_capacity(reader::LINE_CAPACITY);

    loop {
        if reader::read_line(input, &mut line)? == 0 {
            break;
        }
        reader::strip_newline(&mut line);

        let value = (entry.hash)(&line);
        output.write_all(&line)?;
        writeln!(output, "    {value}")?;
    }

    output.flush()
}
