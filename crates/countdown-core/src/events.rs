use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Section;

/// Every state change of the timer produces an Event.
/// The controller hands them back to the caller, which logs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    DurationAdjusted {
        minutes: u8,
        seconds: u8,
        at: DateTime<Utc>,
    },
    SectionFocused {
        section: Section,
        at: DateTime<Utc>,
    },
    TimerStarted {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Remaining time dropped into the final-seconds alert window.
    AlertWindowEntered {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero. Fired once per run; the alert tone follows.
    TimerCompleted {
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Short machine name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::DurationAdjusted { .. } => "duration_adjusted",
            Event::SectionFocused { .. } => "section_focused",
            Event::TimerStarted { .. } => "timer_started",
            Event::TimerPaused { .. } => "timer_paused",
            Event::AlertWindowEntered { .. } => "alert_window_entered",
            Event::TimerCompleted { .. } => "timer_completed",
            Event::TimerReset { .. } => "timer_reset",
        }
    }
}
