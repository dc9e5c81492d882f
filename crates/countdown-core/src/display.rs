//! View model pushed to the presentation layer.

/// Status line shown under the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    Ready,
    Running,
    Paused,
    TimesUp,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Ready => "Ready",
            StatusLabel::Running => "Running",
            StatusLabel::Paused => "Paused",
            StatusLabel::TimesUp => "Time's up!",
        }
    }
}

impl std::fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Zero-padded `MM:SS`.
    pub time: String,
    pub status: StatusLabel,
    pub minutes_active: bool,
    pub seconds_active: bool,
    /// Final-seconds blink indicator.
    pub alerting: bool,
}

impl DisplayState {
    /// Minutes half of `time`.
    pub fn minutes_text(&self) -> &str {
        self.time.split(':').next().unwrap_or("00")
    }

    /// Seconds half of `time`.
    pub fn seconds_text(&self) -> &str {
        self.time.split(':').nth(1).unwrap_or("00")
    }
}

/// Receives a fresh [`DisplayState`] after every state change.
pub trait Display {
    fn render(&mut self, view: &DisplayState);
}
