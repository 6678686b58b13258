//! Presentation model handed to the rendering surface.

use serde::Serialize;

use crate::counter::state::{CounterSnapshot, CounterStatus};

/// Shown instead of a number while no count is known. Never `0`.
pub const PLACEHOLDER: &str = "—";

pub const CAPTION: &str = "Real-time counter powered by CountAPI";

/// Format a count with en-US thousands separators, or the placeholder.
pub fn format_count(count: Option<u64>) -> String {
    match count {
        Some(n) => group_thousands(n),
        None => PLACEHOLDER.to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Auxiliary line under the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuxMessage {
    Spinner,
    Warning,
    Updated,
}

impl AuxMessage {
    pub fn for_status(status: CounterStatus) -> Option<Self> {
        match status {
            CounterStatus::Idle => None,
            CounterStatus::Loading => Some(AuxMessage::Spinner),
            CounterStatus::Ready => Some(AuxMessage::Updated),
            CounterStatus::Error => Some(AuxMessage::Warning),
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            AuxMessage::Spinner => "Fetching the latest total…",
            AuxMessage::Warning => {
                "Showing last known total. The live counter will update when connectivity returns."
            }
            AuxMessage::Updated => "Updated just now.",
        }
    }
}

/// Everything the surrounding page needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterView {
    pub status: CounterStatus,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub count_text: String,
    pub message: Option<AuxMessage>,
}

impl CounterView {
    /// View for `status` showing `count` (which may be an animated value).
    pub fn new(status: CounterStatus, count: Option<u64>) -> Self {
        let offline = status == CounterStatus::Error;
        Self {
            status,
            status_label: if offline { "OFFLINE" } else { "LIVE" },
            status_class: if offline { "is-error" } else { "is-live" },
            count_text: format_count(count),
            message: AuxMessage::for_status(status),
        }
    }

    pub fn caption(&self) -> &'static str {
        CAPTION
    }

    pub fn headline(&self) -> String {
        format!("👀 {} visitors and counting", self.count_text)
    }
}

impl From<&CounterSnapshot> for CounterView {
    fn from(snapshot: &CounterSnapshot) -> Self {
        Self::new(snapshot.status, snapshot.count)
    }
}
