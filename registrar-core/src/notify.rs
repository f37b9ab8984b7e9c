//! Transient on-screen notices.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::dom::Element;

/// How long a notice stays fully visible.
pub const DEFAULT_DISPLAY_MS: u64 = 3000;
/// Length of the slide-out animation before a notice is removed.
pub const DEFAULT_EXIT_MS: u64 = 300;

/// Slide-in/slide-out animation and overlay placement for notices.
pub const NOTICE_STYLESHEET: &str = "
    @keyframes slideIn {
        from { transform: translateX(400px); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(400px); opacity: 0; }
    }
    .custom-alert {
        position: fixed;
        right: 20px;
        padding: 1rem 1.5rem;
        color: white;
        border-radius: 0.5rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        z-index: 9999;
        animation: slideIn 0.3s ease-out;
        font-weight: 600;
        max-width: 400px;
    }
    .custom-alert.exiting { animation: slideOut 0.3s ease-out; }
    .alert-success { background: #10b981; }
    .alert-error { background: #ef4444; }
    .alert-info { background: #3b82f6; }
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Something that can put a message in front of the user.
pub trait Notifier {
    fn show(&mut self, message: &str, severity: Severity);
}

/// Display and exit durations for notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTiming {
    pub display: Duration,
    pub exit: Duration,
}

impl Default for NoticeTiming {
    fn default() -> Self {
        NoticeTiming::from_millis(DEFAULT_DISPLAY_MS, DEFAULT_EXIT_MS)
    }
}

impl NoticeTiming {
    pub fn from_millis(display_ms: u64, exit_ms: u64) -> Self {
        NoticeTiming {
            display: Duration::milliseconds(display_ms as i64),
            exit: Duration::milliseconds(exit_ms as i64),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Visible,
    Exiting,
    Gone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub shown_at: DateTime<Utc>,
}

impl Notice {
    pub fn phase(&self, now: DateTime<Utc>, timing: &NoticeTiming) -> NoticePhase {
        let age = now - self.shown_at;
        if age < timing.display {
            NoticePhase::Visible
        } else if age < timing.display + timing.exit {
            NoticePhase::Exiting
        } else {
            NoticePhase::Gone
        }
    }
}

/// Stack of overlay notices, oldest first.
///
/// Identical messages are not merged; each call adds its own notice.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    timing: NoticeTiming,
}

impl NoticeBoard {
    pub fn new(timing: NoticeTiming) -> Self {
        NoticeBoard {
            notices: Vec::new(),
            timing,
        }
    }

    pub fn show_at(&mut self, message: &str, severity: Severity, now: DateTime<Utc>) {
        self.notices.push(Notice {
            message: message.to_string(),
            severity,
            shown_at: now,
        });
    }

    /// Drop every notice whose exit animation has finished.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let timing = self.timing;
        self.notices
            .retain(|n| n.phase(now, &timing) != NoticePhase::Gone);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Overlay elements for the notices still on screen at `now`.
    ///
    /// Notices are stacked downwards from the top-right corner. Each one
    /// carries an animation that slides it out once its remaining time is
    /// up, so a page saved at `now` clears itself on schedule.
    pub fn elements(&self, now: DateTime<Utc>) -> Vec<Element> {
        self.notices
            .iter()
            .filter_map(|n| match n.phase(now, &self.timing) {
                NoticePhase::Gone => None,
                phase => Some((n, phase)),
            })
            .enumerate()
            .map(|(slot, (notice, phase))| {
                let mut class = format!("custom-alert alert-{}", notice.severity);
                if phase == NoticePhase::Exiting {
                    class.push_str(" exiting");
                }
                let style = format!(
                    "top: {}px; animation: {};",
                    80 + slot * 72,
                    self.animation(notice, phase, now)
                );
                Element::new("div")
                    .with_attr("class", class)
                    .with_attr("role", "status")
                    .with_attr("style", style)
                    .with_text(notice.message.as_str())
            })
            .collect()
    }

    fn animation(&self, notice: &Notice, phase: NoticePhase, now: DateTime<Utc>) -> String {
        let age = now - notice.shown_at;
        let exit_ms = self.timing.exit.num_milliseconds();

        if phase == NoticePhase::Exiting {
            let left = (self.timing.display + self.timing.exit - age).num_milliseconds();
            format!("slideOut {}ms ease-out forwards", left.max(0))
        } else {
            let stay = (self.timing.display - age).num_milliseconds();
            format!(
                "slideIn {exit_ms}ms ease-out, slideOut {exit_ms}ms ease-out {}ms forwards",
                stay.max(0)
            )
        }
    }
}

impl Notifier for NoticeBoard {
    fn show(&mut self, message: &str, severity: Severity) {
        self.show_at(message, severity, Utc::now());
    }
}
