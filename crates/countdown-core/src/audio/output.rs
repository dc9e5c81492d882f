//! Audio output port and its rodio implementation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::chime::Chime;
use crate::error::AudioError;

/// Somewhere a chime or a recorded clip can be played.
///
/// Both calls block until playback finishes; callers that must not block
/// run them on a worker thread.
pub trait AudioOutput: Send + Sync {
    /// Render `chime` at the device's native rate and play it once.
    fn play_chime(&self, chime: &Chime) -> Result<(), AudioError>;

    /// Decode and play an audio file once.
    fn play_clip(&self, path: &Path) -> Result<(), AudioError>;
}

/// Default system output through rodio.
#[derive(Debug, Clone)]
pub struct RodioOutput {
    volume: f32,
}

impl RodioOutput {
    /// `volume` is a linear gain, 1.0 meaning unchanged.
    pub fn new(volume: f32) -> Self {
        Self {
            volume: volume.max(0.0),
        }
    }

    fn open_stream() -> Result<OutputStream, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::DeviceUnavailable(e.to_string()))?;
        stream.log_on_drop(false);
        Ok(stream)
    }
}

impl Default for RodioOutput {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl AudioOutput for RodioOutput {
    fn play_chime(&self, chime: &Chime) -> Result<(), AudioError> {
        let stream = Self::open_stream()?;
        let sample_rate = stream.config().sample_rate();
        let samples = chime.render(sample_rate);
        if samples.is_empty() {
            return Err(AudioError::Synthesis(format!(
                "no samples at {sample_rate} Hz"
            )));
        }
        tracing::debug!(sample_rate, samples = samples.len(), "playing synthesized chime");

        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(self.volume);
        sink.append(SamplesBuffer::new(1, sample_rate, samples));
        sink.sleep_until_end();
        Ok(())
    }

    fn play_clip(&self, path: &Path) -> Result<(), AudioError> {
        let clip_error = |message: String| AudioError::Clip {
            path: path.to_path_buf(),
            message,
        };
        let file = File::open(path).map_err(|e| clip_error(e.to_string()))?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| clip_error(e.to_string()))?;

        let stream = Self::open_stream()?;
        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }
}
