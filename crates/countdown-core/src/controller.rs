//! Input routing for the countdown widget.
//!
//! The controller owns the engine and the tick schedule. It applies the
//! "only toggle and reset while running" rule, keeps exactly one schedule
//! alive per run, renders after every input and fires the alert tone once
//! when the countdown completes.

use crate::audio::AlertTone;
use crate::display::Display;
use crate::events::Event;
use crate::timer::{Section, TickHandle, Ticker, TimerEngine, TICK_PERIOD};

/// Discrete inputs the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    IncrementValue,
    DecrementValue,
    FocusMinutes,
    FocusSeconds,
    ToggleRun,
    Reset,
    Tick,
}

impl Input {
    /// Inputs still honoured while the countdown is running.
    fn allowed_while_running(self) -> bool {
        matches!(self, Input::ToggleRun | Input::Reset | Input::Tick)
    }
}

pub struct Controller<T, D, A> {
    engine: TimerEngine,
    ticker: T,
    display: D,
    alert: A,
    schedule: Option<TickHandle>,
}

impl<T: Ticker, D: Display, A: AlertTone> Controller<T, D, A> {
    /// Build a controller around a fresh engine and render the initial frame.
    pub fn new(ticker: T, display: D, alert: A) -> Self {
        let mut controller = Self {
            engine: TimerEngine::new(),
            ticker,
            display,
            alert,
            schedule: None,
        };
        controller.refresh();
        controller
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn alert(&self) -> &A {
        &self.alert
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// True while a tick schedule is live.
    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    /// Push the current view to the display.
    pub fn refresh(&mut self) {
        let view = self.engine.view();
        self.display.render(&view);
    }

    pub fn handle(&mut self, input: Input) -> Option<Event> {
        if self.engine.is_running() && !input.allowed_while_running() {
            tracing::debug!(?input, "ignored while running");
            return None;
        }

        let event = match input {
            Input::IncrementValue => self.engine.adjust(1),
            Input::DecrementValue => self.engine.adjust(-1),
            Input::FocusMinutes => self.engine.switch_section(Section::Minutes),
            Input::FocusSeconds => self.engine.switch_section(Section::Seconds),
            Input::ToggleRun => {
                if self.engine.is_running() {
                    self.pause()
                } else {
                    self.start()
                }
            }
            Input::Reset => self.reset(),
            Input::Tick => self.tick(),
        };

        match &event {
            Some(ev) => tracing::info!(
                event = ev.kind(),
                remaining_secs = self.engine.remaining_secs(),
                "timer event"
            ),
            None if input != Input::Tick => tracing::debug!(?input, "input had no effect"),
            None => {}
        }

        self.refresh();
        event
    }

    // ── Transitions ──────────────────────────────────────────────────

    fn start(&mut self) -> Option<Event> {
        let event = self.engine.start()?;
        self.cancel_schedule();
        self.schedule = Some(self.ticker.schedule_repeating(TICK_PERIOD));
        Some(event)
    }

    fn pause(&mut self) -> Option<Event> {
        let event = self.engine.pause()?;
        self.cancel_schedule();
        Some(event)
    }

    fn reset(&mut self) -> Option<Event> {
        self.cancel_schedule();
        self.engine.reset()
    }

    fn tick(&mut self) -> Option<Event> {
        let event = self.engine.tick();
        if let Some(Event::TimerCompleted { .. }) = event {
            self.cancel_schedule();
            self.alert.play_alert_tone();
        }
        event
    }

    fn cancel_schedule(&mut self) {
        if let Some(mut handle) = self.schedule.take() {
            handle.cancel();
        }
    }
}
