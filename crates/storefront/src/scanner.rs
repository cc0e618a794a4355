//! Scanner backed by a line-oriented reader.

use async_trait::async_trait;
use checkout::{ScanOutcome, ScanSource, Scanner};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Mutex;

/// Reads scanned ids, and shell input, one line at a time.
///
/// A terminal stands in for the scanning hardware: the next line typed is the
/// scanned id, and a blank line dismisses the scan.
///
/// Reads are cancel safe. Bytes of a line that was cut short by a cancelled
/// read stay buffered and are returned by the next call.
pub struct LineScanner<R> {
    source: ScanSource,
    inner: Mutex<LineBuffer<R>>,
}

struct LineBuffer<R> {
    reader: R,
    partial: Vec<u8>,
}

impl<R> LineScanner<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self::with_source(reader, ScanSource::Camera)
    }

    pub fn with_source(reader: R, source: ScanSource) -> Self {
        Self {
            source,
            inner: Mutex::new(LineBuffer {
                reader,
                partial: Vec::new(),
            }),
        }
    }

    /// Reads the next line without its line ending; `None` at end of input.
    pub async fn next_line(&self) -> std::io::Result<Option<String>> {
        let mut guard = self.inner.lock().await;
        let buffer = &mut *guard;
        let read = buffer
            .reader
            .read_until(b'\n', &mut buffer.partial)
            .await?;
        if read == 0 && buffer.partial.is_empty() {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buffer.partial)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        buffer.partial.clear();
        Ok(Some(line))
    }
}

#[async_trait]
impl<R> Scanner for LineScanner<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    fn source(&self) -> ScanSource {
        self.source
    }

    async fn scan(&self) -> ScanOutcome {
        match self.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => ScanOutcome::Cancelled,
            Ok(Some(line)) => ScanOutcome::scanned(line.trim()),
            Ok(None) => ScanOutcome::failed("input closed before an id was scanned"),
            Err(e) => ScanOutcome::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncWriteExt, BufReader};

    use super::*;

    #[tokio::test]
    async fn test_scan_reads_one_line() {
        let scanner = LineScanner::new(&b" 99220040182 \nadd 101\n"[..]);

        assert_eq!(scanner.scan().await, ScanOutcome::scanned("99220040182"));
        assert_eq!(scanner.next_line().await.unwrap(), Some("add 101".to_string()));
        assert_eq!(scanner.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_blank_line_cancels() {
        let scanner = LineScanner::new(&b"\r\n"[..]);
        assert_eq!(scanner.scan().await, ScanOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_end_of_input_fails_scan() {
        let scanner = LineScanner::with_source(&b""[..], ScanSource::Nfc);
        assert_eq!(scanner.source(), ScanSource::Nfc);
        assert!(matches!(scanner.scan().await, ScanOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_cancelled_read_keeps_partial_line() {
        let (mut keyboard, terminal) = tokio::io::duplex(64);
        let scanner = LineScanner::new(BufReader::new(terminal));

        keyboard.write_all(b"992200").await.unwrap();
        let cut_short = tokio::time::timeout(Duration::from_millis(20), scanner.scan()).await;
        assert!(cut_short.is_err());

        keyboard.write_all(b"40182\n").await.unwrap();
        assert_eq!(scanner.scan().await, ScanOutcome::scanned("99220040182"));
    }

    #[tokio::test]
    async fn test_unterminated_last_line_is_returned() {
        let scanner = LineScanner::new(&b"quit"[..]);
        assert_eq!(scanner.next_line().await.unwrap(), Some("quit".to_string()));
        assert_eq!(scanner.next_line().await.unwrap(), None);
    }
}
