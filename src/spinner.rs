//! A minimal terminal spinner shown while a prompt is being analyzed.

use std::io::Write;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(80);

/// Label shown while the analysis step runs.
pub const ANALYZING_LABEL: &str = "🧠 analyzing with Da Vinci's methods";

/// A terminal spinner that runs in a background task.
///
/// Writes to stderr so it never mixes with the streamed synthesis on stdout.
pub struct Spinner {
    handle: JoinHandle<()>,
    cancel: tokio::sync::watch::Sender<bool>,
}

impl Spinner {
    /// Start a spinner with the given label.
    pub fn start(label: &str) -> Self {
        let (cancel_tx, mut cancel_rx) = tokio::sync::watch::channel(false);
        let label = label.to_string();

        let handle = tokio::spawn(async move {
            for frame in FRAMES.iter().cycle() {
                // \r moves to start of line, \x1b[2K clears the line
                eprint!("\x1b[2K\r{frame} {label}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle,
            cancel: cancel_tx,
        }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }

    /// Show a spinner for `duration`. No-op for a zero duration.
    pub async fn hold(label: &str, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        let spinner = Self::start(label);
        tokio::time::sleep(duration).await;
        spinner.stop().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_single_braille_chars() {
        assert!(!FRAMES.is_empty());
        for frame in FRAMES {
            assert_eq!(frame.chars().count(), 1);
        }
    }

    #[tokio::test]
    async fn spinner_starts_and_stops_without_panic() {
        let spinner = Spinner::start(ANALYZING_LABEL);
        tokio::time::sleep(Duration::from_millis(200)).await;
        spinner.stop().await;
    }

    #[tokio::test]
    async fn hold_zero_returns_immediately() {
        let started = std::time::Instant::now();
        Spinner::hold(ANALYZING_LABEL, Duration::ZERO).await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn hold_waits_for_duration() {
        let started = std::time::Instant::now();
        Spinner::hold("quick", Duration::from_millis(30)).await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
