//! Transient notifications: a panel with a progress bar that fills over the
//! visible duration, then slides out and is removed.
//!
//! Notifications are not queued. A second one shown while the first is
//! still visible simply coexists with it.

pub const DEFAULT_DURATION_MS: u32 = 3000;
/// Delay before the progress fill starts, so the transition is observed.
pub const PROGRESS_START_MS: u32 = 100;
pub const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub duration_ms: u32,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Time from insertion until the panel leaves the document.
    pub fn lifetime_ms(&self) -> u32 {
        self.duration_ms.saturating_add(EXIT_ANIMATION_MS)
    }

    /// Inline transition for the progress fill.
    pub fn progress_transition(&self) -> String {
        format!("width {}ms linear", self.duration_ms.saturating_sub(PROGRESS_START_MS))
    }

    pub fn markup(&self) -> String {
        format!(
            concat!(
                "<div class=\"notification-content\">",
                "<div class=\"notification-text\">",
                "<h4>{}</h4>",
                "<p>{}</p>",
                "</div>",
                "<div class=\"progress-bar\">",
                "<div class=\"progress-fill\"></div>",
                "</div>",
                "</div>"
            ),
            self.title, self.message
        )
    }
}
