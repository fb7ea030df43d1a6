use std::fmt;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio::io::AsyncRead;
use tokio_util::codec::{FramedRead, LinesCodec};

use super::error::IoError;

/// Upper bound on a single line read from a file or reader (64 MiB)
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024 * 1024;

/// Where a parser run takes its lines from
pub enum LineSource {
    /// Pre-materialized lines held in memory
    Lines(Vec<String>),

    /// A file opened lazily when the run starts
    Path(PathBuf),

    /// Any async reader, split on `\n` / `\r\n`
    Reader(Pin<Box<dyn AsyncRead + Send>>),
}

impl LineSource {
    /// In-memory source from anything yielding strings
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LineSource::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// File-backed source; the file is not touched until `open`
    pub fn path(path: impl Into<PathBuf>) -> Self {
        LineSource::Path(path.into())
    }

    /// Reader-backed source
    pub fn reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        LineSource::Reader(Box::pin(reader))
    }

    /// Acquire the source and turn it into a stream of lines
    ///
    /// Opening a file is the only step that can fail here; read errors
    /// surface later as items of the stream.
    pub async fn open(self) -> Result<LineStream, IoError> {
        match self {
            LineSource::Lines(lines) => Ok(LineStream::from_lines(lines)),
            LineSource::Path(path) => LineStream::from_file(path).await,
            LineSource::Reader(reader) => Ok(LineStream::new(reader)),
        }
    }
}

impl fmt::Debug for LineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSource::Lines(lines) => f.debug_tuple("Lines").field(&lines.len()).finish(),
            LineSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            LineSource::Reader(_) => f.write_str("Reader"),
        }
    }
}

/// Async stream of lines
pub struct LineStream {
    inner: Pin<Box<dyn Stream<Item = Result<String, IoError>> + Send>>,
}

impl LineStream {
    /// Create a new line stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        Self::with_max_length(reader, DEFAULT_MAX_LINE_LENGTH)
    }

    /// Create a line stream that rejects lines longer than `max_length` bytes
    pub fn with_max_length<R>(reader: R, max_length: usize) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        let stream = FramedRead::new(reader, LinesCodec::new_with_max_length(max_length))
            .map(move |result| result.map_err(|e| IoError::from_codec(e, max_length)));

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a line stream over lines already in memory
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            inner: Box::pin(stream::iter(lines.into_iter().map(Ok::<String, IoError>))),
        }
    }

    /// Create a new line stream from a file path
    ///
    /// The file is read lazily as the stream is polled.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file))
    }
}

impl Stream for LineStream {
    type Item = Result<String, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
