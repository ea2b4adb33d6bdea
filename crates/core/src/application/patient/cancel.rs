// Ticker Cancellation Token

use tokio::sync::watch;

/// Cancellation signal observed by the queue ticker
#[derive(Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for cancellation; also returns once the sender is dropped
    pub async fn wait(&mut self) {
        let _ = self.rx.changed().await;
    }
}

/// Cancellation sender, owned by whoever owns the ticker
pub struct CancelSender {
    tx: watch::Sender<bool>,
}

impl CancelSender {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Create a cancellation channel
pub fn cancel_channel() -> (CancelSender, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelSender { tx }, CancelToken { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancel_wakes_waiter() {
        let (tx, mut token) = cancel_channel();
        assert!(!token.is_cancelled());

        tx.cancel();
        token.wait().await;
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_dropped_sender_releases_waiter() {
        let (tx, mut token) = cancel_channel();
        drop(tx);
        token.wait().await;
        assert!(!token.is_cancelled());
    }
}
