use std::io::{self, BufRead};

/// Initial capacity of the reused line buffer.
///
/// A sizing hint only; the buffer grows past it, so long lines are read
/// whole instead of being split at an arbitrary boundary.
pub const LINE_CAPACITY: usize = 4096;

/// Read one line (delimiter included) into `buffer`, reusing its storage.
///
/// Returns the number of bytes read; 0 means end of input.
pub fn read_line<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> io::Result<usize> {
    buffer.clear();
    reader.read_until(b'\n', buffer)
}

/// Strip exactly one trailing newline, if present.
pub fn strip_newline(buffer: &mut Vec<u8>) {
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }
}
