mod engine;
mod ticker;

pub use engine::{
    format_clock, Section, TimerEngine, TimerState, ALERT_WINDOW_SECS, DEFAULT_MINUTES,
    DEFAULT_SECONDS, MAX_MINUTES, MAX_SECONDS,
};
pub use ticker::{TickHandle, Ticker, TokioTicker, TICK_PERIOD};
