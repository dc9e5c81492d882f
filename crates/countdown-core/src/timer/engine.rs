//! Countdown timer engine.
//!
//! The engine is a pure state machine. It does not own a clock or a thread:
//! the controller schedules a one-second tick and calls `tick()`.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused | Complete)
//! Paused -> Running
//! any -> Idle (reset)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new();
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::TimerCompleted) at zero
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::display::{DisplayState, StatusLabel};
use crate::events::Event;

pub const DEFAULT_MINUTES: u8 = 5;
pub const DEFAULT_SECONDS: u8 = 0;
pub const MAX_MINUTES: u8 = 99;
pub const MAX_SECONDS: u8 = 59;
/// Remaining seconds at or below which the visual alert switches on.
pub const ALERT_WINDOW_SECS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Complete,
}

/// Which field keyboard adjustments apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Minutes,
    Seconds,
}

/// Core countdown engine.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    minutes: u8,
    seconds: u8,
    /// Authoritative countdown value.
    remaining_secs: u32,
    state: TimerState,
    section: Section,
    /// True inside the final-seconds alert window.
    alerting: bool,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerEngine {
    /// Create an idle engine set to the default 5:00 with minutes in focus.
    pub fn new() -> Self {
        Self {
            minutes: DEFAULT_MINUTES,
            seconds: DEFAULT_SECONDS,
            remaining_secs: total_secs(DEFAULT_MINUTES, DEFAULT_SECONDS),
            state: TimerState::Idle,
            section: Section::Minutes,
            alerting: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_alerting(&self) -> bool {
        self.alerting
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Build the view model the presentation layer renders.
    pub fn view(&self) -> DisplayState {
        let status = match self.state {
            TimerState::Idle => StatusLabel::Ready,
            TimerState::Running => StatusLabel::Running,
            TimerState::Paused => StatusLabel::Paused,
            TimerState::Complete => StatusLabel::TimesUp,
        };
        DisplayState {
            time: format_clock(self.remaining_secs),
            status,
            minutes_active: self.section == Section::Minutes,
            seconds_active: self.section == Section::Seconds,
            alerting: self.alerting,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Nudge the focused field by `delta`, saturating at its bounds.
    pub fn adjust(&mut self, delta: i8) -> Option<Event> {
        if self.is_running() {
            return None;
        }
        let changed = match self.section {
            Section::Minutes => step(&mut self.minutes, delta, MAX_MINUTES),
            Section::Seconds => step(&mut self.seconds, delta, MAX_SECONDS),
        };
        if !changed {
            return None;
        }
        self.remaining_secs = total_secs(self.minutes, self.seconds);
        Some(Event::DurationAdjusted {
            minutes: self.minutes,
            seconds: self.seconds,
            at: Utc::now(),
        })
    }

    pub fn switch_section(&mut self, section: Section) -> Option<Event> {
        if self.is_running() {
            return None;
        }
        self.section = section;
        Some(Event::SectionFocused {
            section,
            at: Utc::now(),
        })
    }

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => None, // Already running.
            TimerState::Idle | TimerState::Paused | TimerState::Complete => {
                let total = total_secs(self.minutes, self.seconds);
                if total == 0 {
                    return None;
                }
                self.remaining_secs = total;
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    remaining_secs: total,
                    at: Utc::now(),
                })
            }
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.state = TimerState::Paused;
        self.alerting = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.minutes = DEFAULT_MINUTES;
        self.seconds = DEFAULT_SECONDS;
        self.remaining_secs = total_secs(DEFAULT_MINUTES, DEFAULT_SECONDS);
        self.state = TimerState::Idle;
        self.alerting = false;
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Call once per second while running.
    ///
    /// Returns `Some(Event::TimerCompleted)` when the countdown hits zero and
    /// `Some(Event::AlertWindowEntered)` on the tick that opens the alert window.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running() {
            // A tick that was queued before pause/reset landed late.
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);

        if self.remaining_secs == 0 {
            self.state = TimerState::Complete;
            self.minutes = 0;
            self.seconds = 0;
            self.alerting = false;
            return Some(Event::TimerCompleted { at: Utc::now() });
        }

        self.minutes = (self.remaining_secs / 60) as u8;
        self.seconds = (self.remaining_secs % 60) as u8;

        if self.remaining_secs <= ALERT_WINDOW_SECS && !self.alerting {
            self.alerting = true;
            return Some(Event::AlertWindowEntered {
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            });
        }
        None
    }
}

// ── Internal ─────────────────────────────────────────────────────────

fn total_secs(minutes: u8, seconds: u8) -> u32 {
    u32::from(minutes) * 60 + u32::from(seconds)
}

/// Saturating step within `0..=max`. Returns whether the value moved.
fn step(value: &mut u8, delta: i8, max: u8) -> bool {
    let next = (i16::from(*value) + i16::from(delta)).clamp(0, i16::from(max)) as u8;
    let changed = next != *value;
    *value = next;
    changed
}

/// Zero-padded `MM:SS`.
pub fn format_clock(remaining_secs: u32) -> String {
    format!("{:02}:{:02}", remaining_secs / 60, remaining_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_at(minutes: u8, seconds: u8) -> TimerEngine {
        let mut engine = TimerEngine::new();
        engine.reset();
        engine.switch_section(Section::Minutes);
        for _ in 0..DEFAULT_MINUTES {
            engine.adjust(-1);
        }
        for _ in 0..minutes {
            engine.adjust(1);
        }
        engine.switch_section(Section::Seconds);
        for _ in 0..seconds {
            engine.adjust(1);
        }
        engine.start();
        engine
    }

    #[test]
    fn starts_idle_at_five_minutes() {
        let engine = TimerEngine::new();
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.remaining_secs(), 300);
        assert_eq!(engine.section(), Section::Minutes);
        assert_eq!(engine.view().time, "05:00");
        assert_eq!(engine.view().status, StatusLabel::Ready);
    }

    #[test]
    fn start_pause_resume() {
        let mut engine = TimerEngine::new();
        assert!(engine.start().is_some());
        assert_eq!(engine.state(), TimerState::Running);
        assert!(engine.start().is_none());

        assert!(engine.pause().is_some());
        assert_eq!(engine.state(), TimerState::Paused);
        assert!(engine.pause().is_none());

        assert!(engine.start().is_some());
        assert_eq!(engine.state(), TimerState::Running);
    }

    #[test]
    fn adjust_saturates_at_bounds() {
        let mut engine = TimerEngine::new();
        engine.switch_section(Section::Seconds);
        assert!(engine.adjust(-1).is_none());
        assert_eq!(engine.seconds(), 0);

        for _ in 0..70 {
            engine.adjust(1);
        }
        assert_eq!(engine.seconds(), MAX_SECONDS);
        assert_eq!(engine.remaining_secs(), 5 * 60 + 59);
    }

    #[test]
    fn adjust_and_focus_rejected_while_running() {
        let mut engine = TimerEngine::new();
        engine.start();
        assert!(engine.adjust(1).is_none());
        assert!(engine.switch_section(Section::Seconds).is_none());
        assert_eq!(engine.section(), Section::Minutes);
        assert_eq!(engine.remaining_secs(), 300);
    }

    #[test]
    fn start_rejects_zero_duration() {
        let mut engine = running_at(0, 0);
        assert_eq!(engine.state(), TimerState::Idle);
        assert!(engine.start().is_none());
        assert_eq!(engine.state(), TimerState::Idle);
    }

    #[test]
    fn tick_decomposes_remaining_time() {
        let mut engine = TimerEngine::new();
        engine.start();
        engine.tick();
        assert_eq!(engine.remaining_secs(), 299);
        assert_eq!((engine.minutes(), engine.seconds()), (4, 59));
        assert_eq!(engine.view().time, "04:59");
    }

    #[test]
    fn alert_opens_at_five_not_six() {
        let mut engine = running_at(0, 7);
        assert!(engine.tick().is_none()); // 0:06
        assert!(!engine.is_alerting());
        let event = engine.tick(); // 0:05
        assert!(matches!(
            event,
            Some(Event::AlertWindowEntered { remaining_secs: 5, .. })
        ));
        assert!(engine.is_alerting());
        assert!(engine.tick().is_none()); // 0:04, already alerting
        assert!(engine.is_alerting());
    }

    #[test]
    fn completion_clears_alert_and_zeroes_display() {
        let mut engine = running_at(0, 2);
        engine.tick();
        assert!(engine.is_alerting());
        assert!(matches!(engine.tick(), Some(Event::TimerCompleted { .. })));
        assert_eq!(engine.state(), TimerState::Complete);
        assert!(!engine.is_alerting());
        assert_eq!(engine.view().time, "00:00");
        assert_eq!(engine.view().status, StatusLabel::TimesUp);
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 0);
    }

    #[test]
    fn pause_clears_alert_and_keeps_remaining() {
        let mut engine = running_at(0, 6);
        engine.tick();
        engine.tick();
        assert!(engine.is_alerting());
        engine.pause();
        assert!(!engine.is_alerting());
        assert_eq!(engine.remaining_secs(), 4);
        engine.start();
        assert_eq!(engine.remaining_secs(), 4);
    }

    #[test]
    fn can_restart_after_completion_without_reset() {
        let mut engine = running_at(0, 1);
        engine.tick();
        assert_eq!(engine.state(), TimerState::Complete);
        assert!(engine.start().is_none());
        engine.switch_section(Section::Seconds);
        engine.adjust(1);
        assert_eq!(engine.state(), TimerState::Complete);
        assert!(engine.start().is_some());
        assert_eq!(engine.remaining_secs(), 1);
    }

    #[test]
    fn reset_goes_to_defaults() {
        let mut engine = running_at(12, 34);
        engine.tick();
        engine.reset();
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!((engine.minutes(), engine.seconds()), (5, 0));
        assert_eq!(engine.remaining_secs(), 300);
        assert!(!engine.is_alerting());
    }

    #[test]
    fn format_clock_pads_both_fields() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(99 * 60 + 59), "99:59");
    }
}
