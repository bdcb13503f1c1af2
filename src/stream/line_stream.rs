use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor, Read, Seek, SeekFrom},
    path::Path,
};

use encoding_rs::{Encoding, UTF_8};
use log::debug;

use crate::error::{Result, StreamError};

use super::ObjectStream;

trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

enum Source {
    Sequential(BufReader<Box<dyn Read + Send>>),
    Seekable(BufReader<Box<dyn ReadSeek + Send>>),
}

impl Source {
    fn buf_read(&mut self) -> &mut dyn BufRead {
        match self {
            Source::Sequential(reader) => reader,
            Source::Seekable(reader) => reader,
        }
    }
}

/// Reads a text source line by line, decoding it with the given encoding.
///
/// Line terminators (`\n` or `\r\n`) are not part of the returned lines.
pub struct PlainTextByLineStream {
    source: Option<Source>,
    encoding: &'static Encoding,
    at_start: bool,
}

impl PlainTextByLineStream {
    /// Wraps a reader that cannot be rewound; [`ObjectStream::reset`] fails.
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        let reader: Box<dyn Read + Send> = Box::new(reader);
        Self::with_source(Source::Sequential(BufReader::new(reader)))
    }

    pub fn seekable(reader: impl Read + Seek + Send + 'static) -> Self {
        let reader: Box<dyn ReadSeek + Send> = Box::new(reader);
        Self::with_source(Source::Seekable(BufReader::new(reader)))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!("Opened {}", path.as_ref().display());
        Ok(Self::seekable(file))
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::seekable(Cursor::new(bytes.into()))
    }

    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    fn with_source(source: Source) -> Self {
        PlainTextByLineStream {
            source: Some(source),
            encoding: UTF_8,
            at_start: true,
        }
    }
}

impl ObjectStream for PlainTextByLineStream {
    type Item = String;

    fn read(&mut self) -> Result<Option<String>> {
        let reader = self.source.as_mut().ok_or(StreamError::Closed)?.buf_read();

        let mut bytes = Vec::new();
        if reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }

        // BOM は先頭にしか現れない
        let line = if self.at_start {
            self.at_start = false;
            self.encoding.decode_with_bom_removal(&bytes).0
        } else {
            self.encoding.decode_without_bom_handling(&bytes).0
        };

        Ok(Some(line.into_owned()))
    }

    fn reset(&mut self) -> Result<()> {
        match self.source.as_mut().ok_or(StreamError::Closed)? {
            Source::Sequential(_) => Err(StreamError::Unsupported(
                "the underlying reader cannot be rewound".to_string(),
            )),
            Source::Seekable(reader) => {
                reader.seek(SeekFrom::Start(0))?;
                self.at_start = true;
                debug!("Rewound line stream");
                Ok(())
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        if self.source.take().is_some() {
            debug!("Closed line stream");
        }
        Ok(())
    }
}
