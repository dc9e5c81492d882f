//! # Countdown Core Library
//!
//! This library provides the core logic for the Countdown keyboard timer.
//! The `countdown` binary is a thin terminal front end over the same types.
//!
//! ## Architecture
//!
//! - **Timer Engine**: A pure state machine; the caller delivers one `tick()`
//!   per second while it runs
//! - **Ticker**: Cancellable repeating schedules that feed those ticks
//! - **Controller**: Routes keyboard inputs, owns the schedule, pushes a view
//!   model to the display and fires the alert at expiry
//! - **Audio**: Procedural two-note chime with a clip fallback
//! - **Storage**: TOML-based preferences (theme, style, alert sound)
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`Controller`]: Input handling around the engine
//! - [`Chime`]: Alert tone renderer
//! - [`Config`]: Application configuration management

pub mod audio;
pub mod controller;
pub mod display;
pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use audio::{AlertPlayer, AlertTone, AudioOutput, Chime, Delivery, RodioOutput};
pub use controller::{Controller, Input};
pub use display::{Display, DisplayState, StatusLabel};
pub use error::{AudioError, ConfigError, CoreError};
pub use events::Event;
pub use storage::{Config, Style, Theme};
pub use timer::{Section, TickHandle, Ticker, TimerEngine, TimerState, TokioTicker};
