//! Wakeup channel for passive host loops.
//!
//! A host event loop can block until something needs committing. Registry
//! mutations send a wakeup signal through this channel to trigger the next
//! commit pass. The sender is held by whoever needs to nudge the loop
//! (the registry installs one at stage construction); there is no global.

use tokio::sync::mpsc;

/// Sender half of the wakeup channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Send a wakeup signal.
    ///
    /// Non-blocking. Errors are ignored (receiver dropped = shutting down,
    /// full buffer = a wakeup is already pending).
    pub fn send(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Receiver half of the wakeup channel.
#[derive(Debug)]
pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    /// Wait for a wakeup signal. `None` means every sender is gone.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

/// Create a new wakeup channel pair.
pub fn channel() -> (WakeupSender, WakeupReceiver) {
    // Small buffer - we just need to wake up, not queue many signals
    let (tx, rx) = mpsc::channel(16);
    (WakeupSender { tx }, WakeupReceiver { rx })
}
