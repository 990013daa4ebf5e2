//! Transient status line

use std::time::{Duration, Instant};

/// Message kind, drives styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Single status message that disappears a fixed time after it was set.
///
/// Setting a new message replaces the old one and restarts the timer.
#[derive(Debug, Clone)]
pub struct StatusLine {
    current: Option<(StatusMessage, Instant)>,
    dismiss_after: Duration,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine {
    pub const DISMISS_AFTER: Duration = Duration::from_secs(4);

    #[must_use]
    pub fn new() -> Self {
        Self::with_dismiss_after(Self::DISMISS_AFTER)
    }

    #[must_use]
    pub fn with_dismiss_after(dismiss_after: Duration) -> Self {
        Self {
            current: None,
            dismiss_after,
        }
    }

    pub fn set(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.set_at(kind, text, Instant::now());
    }

    pub fn set_at(&mut self, kind: StatusKind, text: impl Into<String>, now: Instant) {
        let message = StatusMessage {
            kind,
            text: text.into(),
        };
        self.current = Some((message, now));
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.set(StatusKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set(StatusKind::Error, text);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Visible message, if it has not been dismissed yet
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<&StatusMessage> {
        self.current
            .as_ref()
            .filter(|(_, set_at)| now.saturating_duration_since(*set_at) < self.dismiss_after)
            .map(|(message, _)| message)
    }
}
