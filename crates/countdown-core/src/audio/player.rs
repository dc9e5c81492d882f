//! Fire-and-forget alert playback with a clip fallback.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use super::chime::Chime;
use super::output::AudioOutput;
use crate::error::AudioError;

/// Plays the expiry alert. Must return promptly and never fail.
pub trait AlertTone {
    fn play_alert_tone(&self);
}

/// How an alert ended up being delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The synthesized chime played.
    Synthesized,
    /// Synthesis failed; the fallback clip played.
    Fallback,
    /// Nothing could be played.
    Silent,
}

/// Try the synthesized chime, then the fallback clip. Blocks until done.
///
/// Errors are logged and folded into the returned [`Delivery`].
pub fn sound_alert(output: &dyn AudioOutput, chime: &Chime, fallback: Option<&Path>) -> Delivery {
    let err = match output.play_chime(chime) {
        Ok(()) => return Delivery::Synthesized,
        Err(err) => err,
    };
    tracing::info!(error = %err, "alert chime unavailable, trying fallback clip");

    let Some(clip) = fallback else {
        tracing::warn!("no fallback clip configured, alert is silent");
        return Delivery::Silent;
    };
    match output.play_clip(clip) {
        Ok(()) => Delivery::Fallback,
        Err(err) => {
            tracing::warn!(error = %err, clip = %clip.display(), "fallback clip also failed");
            Delivery::Silent
        }
    }
}

/// [`AlertTone`] that plays on a detached worker thread.
pub struct AlertPlayer {
    output: Arc<dyn AudioOutput>,
    chime: Chime,
    fallback: Option<PathBuf>,
    enabled: bool,
}

impl AlertPlayer {
    pub fn new(output: Arc<dyn AudioOutput>) -> Self {
        Self {
            output,
            chime: Chime::default(),
            fallback: None,
            enabled: true,
        }
    }

    pub fn with_fallback(mut self, clip: Option<PathBuf>) -> Self {
        self.fallback = clip;
        self
    }

    pub fn with_chime(mut self, chime: Chime) -> Self {
        self.chime = chime;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Spawn playback and return its join handle.
    pub fn spawn(&self) -> Result<thread::JoinHandle<Delivery>, AudioError> {
        let output = Arc::clone(&self.output);
        let chime = self.chime;
        let fallback = self.fallback.clone();
        thread::Builder::new()
            .name("alert-tone".into())
            .spawn(move || sound_alert(output.as_ref(), &chime, fallback.as_deref()))
            .map_err(|e| AudioError::PlaybackFailed(e.to_string()))
    }
}

impl AlertTone for AlertPlayer {
    fn play_alert_tone(&self) {
        if !self.enabled {
            tracing::debug!("alert sound disabled");
            return;
        }
        if let Err(err) = self.spawn() {
            tracing::warn!(error = %err, "could not start alert playback");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records calls and fails according to its flags.
    #[derive(Default)]
    struct FakeOutput {
        chime_fails: bool,
        clip_fails: bool,
        calls: Mutex<Vec<String>>,
    }

    impl AudioOutput for FakeOutput {
        fn play_chime(&self, chime: &Chime) -> Result<(), AudioError> {
            self.calls.lock().unwrap().push("chime".into());
            if self.chime_fails {
                return Err(AudioError::DeviceUnavailable("no device".into()));
            }
            assert!(!chime.render(800).is_empty());
            Ok(())
        }

        fn play_clip(&self, path: &Path) -> Result<(), AudioError> {
            self.calls.lock().unwrap().push(format!("clip:{}", path.display()));
            if self.clip_fails {
                return Err(AudioError::Clip {
                    path: path.to_path_buf(),
                    message: "missing".into(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn plays_synthesized_chime_when_possible() {
        let output = FakeOutput::default();
        let delivery = sound_alert(&output, &Chime::default(), Some(Path::new("bell.wav")));
        assert_eq!(delivery, Delivery::Synthesized);
        assert_eq!(*output.calls.lock().unwrap(), vec!["chime".to_string()]);
    }

    #[test]
    fn falls_back_to_clip() {
        let output = FakeOutput {
            chime_fails: true,
            ..Default::default()
        };
        let delivery = sound_alert(&output, &Chime::default(), Some(Path::new("bell.wav")));
        assert_eq!(delivery, Delivery::Fallback);
        assert_eq!(
            *output.calls.lock().unwrap(),
            vec!["chime".to_string(), "clip:bell.wav".to_string()]
        );
    }

    #[test]
    fn swallows_double_failure() {
        let output = FakeOutput {
            chime_fails: true,
            clip_fails: true,
            ..Default::default()
        };
        let delivery = sound_alert(&output, &Chime::default(), Some(Path::new("bell.wav")));
        assert_eq!(delivery, Delivery::Silent);
    }

    #[test]
    fn silent_without_fallback() {
        let output = FakeOutput {
            chime_fails: true,
            ..Default::default()
        };
        assert_eq!(sound_alert(&output, &Chime::default(), None), Delivery::Silent);
        assert_eq!(output.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn player_runs_off_thread() {
        let output = Arc::new(FakeOutput {
            chime_fails: true,
            clip_fails: true,
            ..Default::default()
        });
        let player = AlertPlayer::new(output.clone()).with_fallback(Some("bell.wav".into()));
        let delivery = player.spawn().unwrap().join().unwrap();
        assert_eq!(delivery, Delivery::Silent);
        assert_eq!(output.calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn disabled_player_does_nothing() {
        let output = Arc::new(FakeOutput::default());
        let player = AlertPlayer::new(output.clone()).enabled(false);
        player.play_alert_tone();
        assert!(output.calls.lock().unwrap().is_empty());
    }
}
