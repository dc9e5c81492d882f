//! Interactive clock.
//!
//! Key presses come from a reader thread and ticks from the tokio ticker.
//! Both land on one channel, so the controller sees a single serialized
//! stream of inputs.

mod keys;
mod ui;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::cursor::Show;
use crossterm::event::{self, Event as TermEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use countdown_core::error::Result;
use countdown_core::{AlertPlayer, Config, Controller, Input, RodioOutput, TokioTicker};

pub use keys::map_key;
pub use ui::TerminalDisplay;

const KEY_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Everything the event loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Timer(Input),
    ToggleTheme,
    ToggleStyle,
    Redraw,
    Quit,
}

type AppController = Controller<
    TokioTicker<Action>,
    TerminalDisplay<CrosstermBackend<Stdout>>,
    AlertPlayer,
>;

pub async fn run(mut config: Config) -> Result<()> {
    let (tx, mut rx) = unbounded_channel();
    spawn_key_reader(tx.clone())?;

    let (_restore, terminal) = setup_terminal()?;
    let display = TerminalDisplay::new(terminal, config.ui.theme, config.ui.style);
    let ticker = TokioTicker::new(tx, Action::Timer(Input::Tick));
    let player = AlertPlayer::new(Arc::new(RodioOutput::new(config.volume_gain())))
        .with_fallback(config.fallback_clip())
        .enabled(config.alert.enabled);

    let mut controller = Controller::new(ticker, display, player);
    tracing::info!(theme = ?config.ui.theme, style = ?config.ui.style, "countdown opened");

    event_loop(&mut controller, &mut rx, &mut config).await;

    tracing::info!("countdown closed");
    Ok(())
}

async fn event_loop(
    controller: &mut AppController,
    rx: &mut UnboundedReceiver<Action>,
    config: &mut Config,
) {
    while let Some(action) = rx.recv().await {
        match action {
            Action::Timer(input) => {
                controller.handle(input);
            }
            Action::ToggleTheme => {
                config.ui.theme = config.ui.theme.toggled();
                controller.display_mut().set_theme(config.ui.theme);
                save_preferences(config);
                controller.refresh();
            }
            Action::ToggleStyle => {
                config.ui.style = config.ui.style.toggled();
                controller.display_mut().set_face(config.ui.style);
                save_preferences(config);
                controller.refresh();
            }
            Action::Redraw => controller.refresh(),
            Action::Quit => break,
        }
    }
}

fn save_preferences(config: &Config) {
    match config.save() {
        Ok(()) => tracing::debug!(
            theme = ?config.ui.theme,
            style = ?config.ui.style,
            "preferences saved"
        ),
        Err(e) => tracing::warn!(error = %e, "could not save preferences"),
    }
}

/// Forward terminal key presses until the receiving side goes away.
fn spawn_key_reader(tx: UnboundedSender<Action>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("key-reader".into())
        .spawn(move || {
            while !tx.is_closed() {
                match event::poll(KEY_POLL_INTERVAL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal input unavailable");
                        let _ = tx.send(Action::Quit);
                        break;
                    }
                }
                let action = match event::read() {
                    Ok(TermEvent::Key(key)) => map_key(key),
                    Ok(TermEvent::Resize(..)) => Some(Action::Redraw),
                    Ok(_) => None,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read terminal event");
                        None
                    }
                };
                if let Some(action) = action {
                    if tx.send(action).is_err() {
                        break;
                    }
                }
            }
        })
}

/// Runs its restore step when dropped, so the shell leaves raw mode on every
/// exit path, including errors half way through setup and panics.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

type Restore = TerminalGuard<fn()>;

fn setup_terminal() -> io::Result<(Restore, Terminal<CrosstermBackend<Stdout>>)> {
    enable_raw_mode()?;
    let guard: Restore = TerminalGuard {
        restore: restore_terminal,
    };
    execute!(io::stdout(), EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((guard, terminal))
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "failed to leave raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        tracing::warn!(error = %e, "failed to leave alternate screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn guard_restores_when_setup_fails_midway() {
        let restored = Cell::new(0);
        let setup = || -> io::Result<()> {
            let _guard = TerminalGuard {
                restore: || restored.set(restored.get() + 1),
            };
            Err(io::Error::other("alternate screen unavailable"))
        };
        assert!(setup().is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn guard_restores_once_on_normal_exit() {
        let restored = Cell::new(0);
        {
            let _guard = TerminalGuard {
                restore: || restored.set(restored.get() + 1),
            };
            assert_eq!(restored.get(), 0);
        }
        assert_eq!(restored.get(), 1);
    }
}
