use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long a notification stays visible before hiding itself.
pub const AUTO_HIDE_AFTER: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub is_visible: bool,
}

#[derive(Debug, Default)]
struct Slot {
    current: Notification,
    /// Bumped on every show/dismiss so a stale timer never hides a newer message.
    generation: u64,
}

/// Single-slot notification with a cancellable auto-hide timer.
///
/// Showing a message replaces whatever is visible and restarts the timer.
/// Must be used from within a Tokio runtime.
#[derive(Debug)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    timer: Option<JoinHandle<()>>,
    window: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(AUTO_HIDE_AFTER)
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Notifier {
    pub fn new(window: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timer: None,
            window,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.cancel_timer();

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.current = Notification {
                message: message.into(),
                kind,
                is_visible: true,
            };
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let window = self.window;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.current.is_visible = false;
            }
        }));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    /// Hide the current notification now. The message and kind are kept.
    pub fn dismiss(&mut self) {
        self.cancel_timer();
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.current.is_visible = false;
    }

    pub fn current(&self) -> Notification {
        lock(&self.slot).current.clone()
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
