use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Splits a buffered reader into lines terminated by `\n`, `\r\n` or a lone
/// `\r`. Terminators are not included in the yielded lines, and a final line
/// without a terminator is still yielded.
#[derive(Debug)]
pub struct TextLines<R> {
    reader: R,
    skip_lf: bool,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            skip_lf: false,
        }
    }
}

fn decode(buf: Vec<u8>) -> io::Result<String> {
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };
            if available.is_empty() {
                break;
            }

            // A `\r` ending the previous line may be followed by its `\n`.
            let start = usize::from(std::mem::take(&mut self.skip_lf) && available[0] == b'\n');
            match available[start..]
                .iter()
                .position(|&b| b == b'\n' || b == b'\r')
            {
                Some(i) => {
                    let end = start + i;
                    buf.extend_from_slice(&available[start..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    return Some(decode(buf));
                }
                None => {
                    let len = available.len();
                    buf.extend_from_slice(&available[start..]);
                    self.reader.consume(len);
                }
            }
        }

        if buf.is_empty() {
            None
        } else {
            Some(decode(buf))
        }
    }
}

/// Line source backed by an open input file. The file is closed when the
/// source is dropped.
pub type FileLines = TextLines<BufReader<File>>;

/// Open `path` for sequential line reading.
pub fn open_lines(path: &Path) -> Result<FileLines> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened input: {:?}", path);
    Ok(TextLines::new(BufReader::new(file)))
}

/// Adapt any buffered reader into a line source.
pub fn reader_lines<R: BufRead>(reader: R) -> TextLines<R> {
    TextLines::new(reader)
}
