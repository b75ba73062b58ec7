//! Line-by-line reading of a byte stream.

use log::warn;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;

const READ_SIZE: usize = 8;

/// Read `reader` to its end on a background task, sending each line.
///
/// Lines are split on `\n` with one trailing `\r` removed; a final line without a
/// newline is sent when the stream ends. A read error ends the stream early. The
/// channel closes when the reader is exhausted.
pub fn lines_channel<R>(mut reader: R) -> mpsc::Receiver<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut buf = [0u8; READ_SIZE];
        let mut current: Vec<u8> = Vec::new();

        loop {
            let n = match reader.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    warn!("Error reading lines: {e}");
                    return;
                }
            };

            let mut parts = buf[..n].split(|&b| b == b'\n');
            // `split` always yields at least one part; every part but the last ends a line.
            let mut part = parts.next().unwrap_or_default();
            for next in parts {
                current.extend_from_slice(part);
                if tx.send(take_line(&mut current)).await.is_err() {
                    return;
                }
                part = next;
            }
            current.extend_from_slice(part);
        }

        if !current.is_empty() {
            let _ = tx.send(take_line(&mut current)).await;
        }
    });

    rx
}

fn take_line(current: &mut Vec<u8>) -> String {
    let mut line = std::mem::take(current);
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    String::from_utf8_lossy(&line).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(data: &'static [u8]) -> Vec<String> {
        let mut rx = lines_channel(data);
        let mut lines = Vec::new();
        while let Some(line) = rx.recv().await {
            lines.push(line);
        }
        lines
    }

    #[tokio::test]
    async fn test_lines_across_reads() {
        let lines = collect(b"Do you have what it takes\r\nto be an engineer at\nTheStartup\xe2\x84\xa2?\n").await;
        assert_eq!(
            lines,
            ["Do you have what it takes", "to be an engineer at", "TheStartup™?"]
        );
    }

    #[tokio::test]
    async fn test_final_line_without_newline() {
        let lines = collect(b"first\nsecond").await;
        assert_eq!(lines, ["first", "second"]);
    }

    #[tokio::test]
    async fn test_empty_lines_are_kept() {
        let lines = collect(b"a\n\nb\n").await;
        assert_eq!(lines, ["a", "", "b"]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        assert!(collect(b"").await.is_empty());
    }
}
