//! Event plumbing for the TUI
//!
//! All state changes come through one channel: keyboard input, the
//! animation tick, and the one-second countdown tick that the OTP screen
//! spawns for itself. The countdown ticker is a cancellable task whose
//! handle is owned by the screen state; dropping it aborts the task, so a
//! tick can never arrive for a screen that has been torn down.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Animation tick (~10 Hz)
    Tick,
    /// One elapsed second on the resend countdown
    CountdownTick,
}

/// Event handler that fans terminal input and timers into one channel
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create the handler and spawn the input and tick tasks
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        let input_sender = sender.clone();
        tokio::spawn(async move {
            let mut stream = EventStream::new();
            while let Some(Ok(event)) = stream.next().await {
                if let CrosstermEvent::Key(key) = event {
                    if key.kind == KeyEventKind::Press
                        && input_sender.send(Event::Key(key)).is_err()
                    {
                        break;
                    }
                }
            }
        });

        let tick_sender = sender.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                interval.tick().await;
                if tick_sender.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { sender, receiver }
    }

    /// A sender for tasks that feed events back into the loop
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

/// The OTP screen's one-second timer as an owned, cancellable task.
///
/// Acquired when the screen is entered and released when the owning state
/// is dropped; the abort in `Drop` is what guarantees no tick fires after
/// teardown.
#[derive(Debug)]
pub struct CountdownTicker {
    handle: JoinHandle<()>,
}

impl CountdownTicker {
    /// Spawn a task emitting one `CountdownTick` per second
    pub fn start(sender: mpsc::UnboundedSender<Event>) -> Self {
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + Duration::from_secs(1);
            let mut interval = tokio::time::interval_at(start, Duration::from_secs(1));
            loop {
                interval.tick().await;
                if sender.send(Event::CountdownTick).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
