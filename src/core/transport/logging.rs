//! Wire logging for the STDIO transport.
//!
//! MCP stdio framing is newline-delimited JSON, so the tee wrappers here
//! buffer each direction until a full line is available and then append it
//! to the wire log file with a direction marker. The log captures exactly
//! the bytes that crossed the transport, one protocol message per line.
//!
//! The log file is created at startup (truncating any previous run) and
//! lives for the whole session; partial lines still buffered when the
//! transport shuts down are flushed as-is.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tracing::warn;

/// Direction of a logged protocol line.
#[derive(Debug, Clone, Copy)]
enum Direction {
    /// Inbound, read from the client.
    Recv,
    /// Outbound, written to the client.
    Send,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Self::Recv => "recv",
            Self::Send => "send",
        }
    }
}

/// Shared wire log file.
///
/// Both transport directions append to the same file; a mutex keeps entries
/// whole when the reader and writer sides log concurrently.
#[derive(Debug)]
pub struct WireLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl WireLog {
    /// Create the wire log, truncating any previous file at `path`.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one direction-marked line to the log.
    fn record(&self, direction: Direction, line: &[u8]) {
        let mut entry = Vec::with_capacity(line.len() + 6);
        entry.extend_from_slice(direction.label().as_bytes());
        entry.push(b' ');
        entry.extend_from_slice(line);
        entry.push(b'\n');

        let Ok(mut file) = self.file.lock() else {
            return;
        };
        if let Err(e) = file.write_all(&entry) {
            warn!("Failed to write wire log entry: {}", e);
        }
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Log every complete line buffered in `pending`.
fn drain_complete_lines(pending: &mut Vec<u8>, log: &WireLog, direction: Direction) {
    while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
        let line: Vec<u8> = pending.drain(..=pos).collect();
        log.record(direction, trim_line_ending(&line));
    }
}

/// AsyncRead wrapper that mirrors inbound lines to the wire log.
pub struct LoggedReader<R> {
    inner: R,
    log: Arc<WireLog>,
    pending: Vec<u8>,
}

impl<R> LoggedReader<R> {
    /// Wrap a reader so its traffic is mirrored to `log`.
    pub fn new(inner: R, log: Arc<WireLog>) -> Self {
        Self {
            inner,
            log,
            pending: Vec::new(),
        }
    }
}

impl<R> AsyncRead for LoggedReader<R>
where
    R: AsyncRead + Unpin,
{
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        let me = self.get_mut();
        let filled_before = buf.filled().len();

        match Pin::new(&mut me.inner).poll_read(cx, buf) {
            Poll::Ready(Ok(())) => {
                let chunk = &buf.filled()[filled_before..];
                if chunk.is_empty() {
                    // EOF: flush whatever is left of an unterminated line.
                    if !me.pending.is_empty() {
                        let pending = std::mem::take(&mut me.pending);
                        me.log.record(Direction::Recv, trim_line_ending(&pending));
                    }
                } else {
                    me.pending.extend_from_slice(chunk);
                    drain_complete_lines(&mut me.pending, &me.log, Direction::Recv);
                }
                Poll::Ready(Ok(()))
            }
            other => other,
        }
    }
}

/// AsyncWrite wrapper that mirrors outbound lines to the wire log.
pub struct LoggedWriter<W> {
    inner: W,
    log: Arc<WireLog>,
    pending: Vec<u8>,
}

impl<W> LoggedWriter<W> {
    /// Wrap a writer so its traffic is mirrored to `log`.
    pub fn new(inner: W, log: Arc<WireLog>) -> Self {
        Self {
            inner,
            log,
            pending: Vec::new(),
        }
    }
}

impl<W> AsyncWrite for LoggedWriter<W>
where
    W: AsyncWrite + Unpin,
{
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<Result<usize, std::io::Error>> {
        let me = self.get_mut();

        match Pin::new(&mut me.inner).poll_write(cx, buf) {
            Poll::Ready(Ok(written)) => {
                // Mirror only the bytes the inner writer accepted.
                me.pending.extend_from_slice(&buf[..written]);
                drain_complete_lines(&mut me.pending, &me.log, Direction::Send);
                Poll::Ready(Ok(written))
            }
            other => other,
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<(), std::io::Error>> {
        Pin::new(&mut self.get_mut().inner).poll_flush(cx)
    }

    fn poll_shutdown(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), std::io::Error>> {
        let me = self.get_mut();
        if !me.pending.is_empty() {
            let pending = std::mem::take(&mut me.pending);
            me.log.record(Direction::Send, trim_line_ending(&pending));
        }
        Pin::new(&mut me.inner).poll_shutdown(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn new_log(dir: &tempfile::TempDir) -> (Arc<WireLog>, PathBuf) {
        let path = dir.path().join("wire.log");
        let log = Arc::new(WireLog::create(&path).unwrap());
        (log, path)
    }

    #[tokio::test]
    async fn test_writer_logs_complete_lines() {
        let dir = tempfile::tempdir().unwrap();
        let (log, path) = new_log(&dir);

        let mut writer = LoggedWriter::new(tokio::io::sink(), log);
        writer.write_all(b"{\"id\":1}\n{\"id\":2}\n").await.unwrap();

        let logged = std::fs::read_to_string(&path).unwrap();
        assert_eq!(logged, "send {\"id\":1}\nsend {\"id\":2}\n");
    }

    #[tokio::test]
    async fn test_writer_buffers_partial_lines() {
        let dir = tempfile::tempdir().unwrap();
        let (log, path) = new_log(&dir);

        let mut writer = LoggedWriter::new(tokio::io::sink(), log);
        writer.write_all(b"{\"par").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        writer.write_all(b"tial\":true}\n").await.unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "send {\"partial\":true}\n"
        );
    }

    #[tokio::test]
    async fn test_writer_flushes_partial_line_on_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let (log, path) = new_log(&dir);

        let mut writer = LoggedWriter::new(tokio::io::sink(), log);
        writer.write_all(b"unterminated").await.unwrap();
        writer.shutdown().await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "send unterminated\n"
        );
    }

    #[tokio::test]
    async fn test_reader_logs_inbound_lines() {
        let dir = tempfile::tempdir().unwrap();
        let (log, path) = new_log(&dir);

        let input: &[u8] = b"{\"method\":\"tools/list\"}\n";
        let mut reader = LoggedReader::new(input, log);
        let mut out = Vec::new();
        reader.read_to_end(&mut out).await.unwrap();

        assert_eq!(out, input);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "recv {\"method\":\"tools/list\"}\n"
        );
    }

    #[tokio::test]
    async fn test_reader_reassembles_split_lines() {
        let dir = tempfile::tempdir().unwrap();
        let (log, path) = new_log(&dir);

        let mock = tokio_test::io::Builder::new()
            .read(b"{\"jsonrpc\"")
            .read(b":\"2.0\"}\n")
            .build();
        let mut reader = LoggedReader::new(mock, log);

        let mut buf = [0u8; 32];
        let n1 = reader.read(&mut buf).await.unwrap();
        assert!(n1 > 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        let n2 = reader.read(&mut buf[n1..]).await.unwrap();
        assert!(n2 > 0);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "recv {\"jsonrpc\":\"2.0\"}\n"
        );
    }

    #[tokio::test]
    async fn test_reader_flushes_partial_line_at_eof() {
        let dir = tempfile::tempdir().unwrap();
        let (log, path) = new_log(&dir);

        let input: &[u8] = b"no trailing newline";
        let mut reader = LoggedReader::new(input, log);
        let mut out = Vec::new();
        reader.read_to_end(&mut out).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "recv no trailing newline\n"
        );
    }

    #[test]
    fn test_wire_log_truncates_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wire.log");
        std::fs::write(&path, "stale contents\n").unwrap();

        let log = WireLog::create(&path).unwrap();
        assert_eq!(log.path(), path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
