//! Line-by-line streaming of a synthesis to the terminal.

use std::time::Duration;

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Write every non-empty line of `text` followed by a newline, pausing
/// `delay` after each one. Returns the number of lines written.
pub async fn stream_lines<W>(text: &str, delay: Duration, writer: &mut W) -> std::io::Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    for line in text.split('\n').filter(|l| !l.is_empty()) {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        written += 1;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    Ok(written)
}
