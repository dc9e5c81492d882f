//! Integration tests for the controller wired to the real alert player.
//!
//! Audio is replaced by an output that always fails, standing in for a
//! machine without a sound device.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use countdown_core::{
    AlertPlayer, AudioError, AudioOutput, Chime, Controller, Display, DisplayState, Event, Input,
    StatusLabel, TickHandle, Ticker, TimerState, TokioTicker,
};

struct NoAudio {
    attempts: AtomicUsize,
}

impl AudioOutput for NoAudio {
    fn play_chime(&self, _chime: &Chime) -> Result<(), AudioError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AudioError::DeviceUnavailable("test host has no audio".into()))
    }

    fn play_clip(&self, path: &Path) -> Result<(), AudioError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AudioError::Clip {
            path: path.to_path_buf(),
            message: "not found".into(),
        })
    }
}

#[derive(Default)]
struct LastFrame(Option<DisplayState>);

impl Display for LastFrame {
    fn render(&mut self, view: &DisplayState) {
        self.0 = Some(view.clone());
    }
}

struct NoopTicker;

impl Ticker for NoopTicker {
    fn schedule_repeating(&mut self, _period: Duration) -> TickHandle {
        TickHandle::new(|| {})
    }
}

fn set_seconds(controller: &mut Controller<impl Ticker, LastFrame, AlertPlayer>, seconds: u8) {
    for _ in 0..5 {
        controller.handle(Input::DecrementValue);
    }
    controller.handle(Input::FocusSeconds);
    for _ in 0..seconds {
        controller.handle(Input::IncrementValue);
    }
}

#[test]
fn audio_failure_does_not_disturb_the_timer() {
    let audio = Arc::new(NoAudio {
        attempts: AtomicUsize::new(0),
    });
    let player = AlertPlayer::new(audio.clone()).with_fallback(Some("missing.wav".into()));
    let mut controller = Controller::new(NoopTicker, LastFrame::default(), player);

    set_seconds(&mut controller, 3);
    controller.handle(Input::ToggleRun);
    controller.handle(Input::Tick);
    controller.handle(Input::Tick);
    let event = controller.handle(Input::Tick);
    assert!(matches!(event, Some(Event::TimerCompleted { .. })));

    let frame = controller.display().0.clone().unwrap();
    assert_eq!(frame.status, StatusLabel::TimesUp);
    assert_eq!(frame.time, "00:00");
    assert!(!frame.alerting);
    assert_eq!(controller.engine().state(), TimerState::Complete);

    // Playback runs detached; make sure it also ran to its silent end.
    let delivery = controller.alert().spawn().unwrap().join().unwrap();
    assert_eq!(delivery, countdown_core::Delivery::Silent);
    assert!(audio.attempts.load(Ordering::SeqCst) >= 2);

    controller.handle(Input::Reset);
    assert_eq!(controller.display().0.as_ref().unwrap().time, "05:00");
}

#[tokio::test(start_paused = true)]
async fn tokio_ticks_drive_a_full_run() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let ticker = TokioTicker::new(tx, Input::Tick);
    let audio = Arc::new(NoAudio {
        attempts: AtomicUsize::new(0),
    });
    let player = AlertPlayer::new(audio).enabled(false);
    let mut controller = Controller::new(ticker, LastFrame::default(), player);

    set_seconds(&mut controller, 7);
    controller.handle(Input::ToggleRun);

    let mut alert_seen_at = None;
    while let Some(input) = rx.recv().await {
        let event = controller.handle(input);
        if let Some(Event::AlertWindowEntered { remaining_secs, .. }) = event {
            alert_seen_at = Some(remaining_secs);
            assert!(controller.display().0.as_ref().unwrap().alerting);
        }
        if let Some(Event::TimerCompleted { .. }) = event {
            break;
        }
    }

    assert_eq!(alert_seen_at, Some(5));
    assert_eq!(controller.engine().state(), TimerState::Complete);
    assert!(!controller.is_scheduled());

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn pause_stops_ticks_and_resume_continues() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let player = AlertPlayer::new(Arc::new(NoAudio {
        attempts: AtomicUsize::new(0),
    }))
    .enabled(false);
    let ticker = TokioTicker::new(tx, Input::Tick);
    let mut controller = Controller::new(ticker, LastFrame::default(), player);

    controller.handle(Input::ToggleRun);
    for _ in 0..3 {
        let input = rx.recv().await.unwrap();
        controller.handle(input);
    }
    assert_eq!(controller.engine().remaining_secs(), 297);

    controller.handle(Input::ToggleRun);
    assert_eq!(controller.engine().state(), TimerState::Paused);
    tokio::time::sleep(Duration::from_secs(10)).await;
    while let Ok(input) = rx.try_recv() {
        controller.handle(input);
    }
    assert_eq!(controller.engine().remaining_secs(), 297);

    controller.handle(Input::ToggleRun);
    let input = rx.recv().await.unwrap();
    controller.handle(input);
    assert_eq!(controller.engine().remaining_secs(), 296);
    assert_eq!(controller.display().0.as_ref().unwrap().time, "04:56");
}
