//! Input resolution.
//!
//! The raw JSON text for a tool comes from the first source that applies:
//!
//! 1. `--input-file <path>`
//! 2. `--input @<path>`
//! 3. `--input <literal>`
//! 4. standard input, unless it is a terminal
//!
//! Standard input is read through whichever capability the handle exposes
//! ([`StdinSource`]). Stdin that is empty after trimming counts as no input.

use crate::cli::CliOptions;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;
use std::string::FromUtf8Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;
use tracing::debug;

/// A single awaited read of the whole stream.
pub type TextFuture = Pin<Box<dyn Future<Output = io::Result<String>> + Send>>;

/// Push-style stream notifications, delivered in arrival order.
#[derive(Debug)]
pub enum StdinEvent {
    Data(Vec<u8>),
    End,
    Error(io::Error),
}

/// How the input stream can be drained.
pub enum StdinSource {
    /// Whole-text read.
    Whole(TextFuture),
    /// Chunked byte stream, read to EOF.
    Bytes(Pin<Box<dyn AsyncRead + Send>>),
    /// Event channel; a closed channel counts as end of stream.
    Events(mpsc::UnboundedReceiver<StdinEvent>),
}

/// The process's input stream plus what is known about it.
pub struct StdinHandle {
    /// Explicit terminal flag, when the platform reports one.
    pub is_tty: Option<bool>,
    /// Stream size; a non-finite size marks a terminal.
    pub size: Option<f64>,
    source: StdinSource,
}

impl StdinHandle {
    pub fn new(source: StdinSource) -> Self {
        Self {
            is_tty: None,
            size: None,
            source,
        }
    }

    /// The real standard input.
    pub fn process() -> Self {
        use std::io::IsTerminal;

        Self::new(StdinSource::Bytes(Box::pin(tokio::io::stdin())))
            .with_tty(io::stdin().is_terminal())
    }

    /// A stream that yields `text` in one read.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(StdinSource::Whole(Box::pin(async move { Ok(text) })))
    }

    /// An interactive terminal with nothing piped in.
    pub fn terminal() -> Self {
        Self::new(StdinSource::Bytes(Box::pin(tokio::io::empty()))).with_tty(true)
    }

    pub fn with_tty(mut self, is_tty: bool) -> Self {
        self.is_tty = Some(is_tty);
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Explicit flag first, then a non-finite size; otherwise not a terminal.
    pub fn is_terminal(&self) -> bool {
        match (self.is_tty, self.size) {
            (Some(is_tty), _) => is_tty,
            (None, Some(size)) => !size.is_finite(),
            (None, None) => false,
        }
    }

    /// Read the stream to completion.
    pub async fn drain(self) -> Result<String, ResolveError> {
        match self.source {
            StdinSource::Whole(read) => read.await.map_err(ResolveError::Stdin),
            StdinSource::Bytes(mut reader) => {
                let mut buf = Vec::new();
                reader
                    .read_to_end(&mut buf)
                    .await
                    .map_err(ResolveError::Stdin)?;
                Ok(String::from_utf8(buf)?)
            }
            StdinSource::Events(mut events) => {
                let mut buf = Vec::new();
                while let Some(event) = events.recv().await {
                    match event {
                        StdinEvent::Data(chunk) => buf.extend_from_slice(&chunk),
                        StdinEvent::End => break,
                        StdinEvent::Error(e) => return Err(ResolveError::Stdin(e)),
                    }
                }
                Ok(String::from_utf8(buf)?)
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("failed to read input file '{}': {source}", .path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Resolve the raw input text, or `None` when there is none to be had.
pub async fn resolve(options: &CliOptions, stdin: StdinHandle) -> Result<Option<String>, ResolveError> {
    if let Some(path) = options.input_file.as_deref().filter(|p| !p.is_empty()) {
        debug!(path, "Reading input from --input-file");
        return read_file(path).await.map(Some);
    }

    if let Some(input) = options.input.as_deref().filter(|i| !i.is_empty()) {
        return match input.strip_prefix('@') {
            Some(path) => {
                debug!(path, "Reading input from @file reference");
                read_file(path).await.map(Some)
            }
            None => Ok(Some(input.to_string())),
        };
    }

    if stdin.is_terminal() {
        debug!("Stdin is a terminal; no input");
        return Ok(None);
    }

    let text = stdin.drain().await?;
    if text.trim().is_empty() {
        debug!("Stdin was empty");
        return Ok(None);
    }
    Ok(Some(text))
}

async fn read_file(path: &str) -> Result<String, ResolveError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ResolveError::File {
            path: PathBuf::from(path),
            source,
        })
}
