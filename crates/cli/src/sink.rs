//! Clipboard sinks for the terminal: stdout or a file.

use async_trait::async_trait;
use promptgrab_prompt::{ClipboardSink, SinkError};
use std::path::PathBuf;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Write the prompt exactly as assembled; no trailing newline is added.
async fn write_prompt<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> Result<(), SinkError> {
    out.write_all(text.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

/// Prints the prompt to stdout, ready to pipe into a clipboard tool.
pub struct StdoutSink;

#[async_trait]
impl ClipboardSink for StdoutSink {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn write_text(&self, text: &str) -> Result<(), SinkError> {
        write_prompt(&mut tokio::io::stdout(), text).await
    }
}

/// Writes the prompt to a file, replacing its contents.
pub struct FileSink {
    pub path: PathBuf,
}

#[async_trait]
impl ClipboardSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    async fn write_text(&self, text: &str) -> Result<(), SinkError> {
        tokio::fs::write(&self.path, text).await.map_err(|e| {
            SinkError::Rejected(format!("{}: {e}", self.path.display()))
        })
    }
}

/// Pick the sink for an optional output path.
pub fn for_output(output: Option<&PathBuf>) -> Box<dyn ClipboardSink> {
    match output {
        Some(path) => Box::new(FileSink { path: path.clone() }),
        None => Box::new(StdoutSink),
    }
}
