//! Procedural two-note cabin chime.
//!
//! A high note rings first, a lower note enters 0.4 s later, with a soft
//! bass and mid layer underneath. Two feedback taps read back from the
//! already rendered buffer to add a short tail.

use std::f32::consts::TAU;

/// One sine voice with optional overtones under an attack/decay envelope.
#[derive(Debug, Clone, Copy)]
struct Voice {
    freq: f32,
    /// Relative gains of the 2nd, 3rd, … partials.
    overtones: &'static [f32],
    start: f32,
    end: f32,
    decay: f32,
    attack: f32,
    gain: f32,
}

impl Voice {
    fn sample(&self, t: f32) -> f32 {
        if t < self.start || t >= self.end {
            return 0.0;
        }
        let local = t - self.start;
        let envelope = (-local * self.decay).exp() * (1.0 - (-local * self.attack).exp());
        let phase = TAU * self.freq * local;
        let mut sum = phase.sin();
        for (i, level) in self.overtones.iter().enumerate() {
            sum += (phase * (i as f32 + 2.0)).sin() * level;
        }
        sum * envelope * self.gain
    }
}

/// Feedback tap: adds `feedback` times the sample `delay` seconds back.
#[derive(Debug, Clone, Copy)]
struct Echo {
    delay: f32,
    feedback: f32,
}

const BELL_OVERTONES: &[f32] = &[0.4, 0.2];

const VOICES: [Voice; 4] = [
    // C3 bass foundation
    Voice {
        freq: 130.81,
        overtones: &[],
        start: 0.0,
        end: 2.5,
        decay: 1.5,
        attack: 10.0,
        gain: 0.3,
    },
    // C6 high note
    Voice {
        freq: 1046.5,
        overtones: BELL_OVERTONES,
        start: 0.0,
        end: 1.0,
        decay: 2.5,
        attack: 15.0,
        gain: 0.5,
    },
    // G5 low note
    Voice {
        freq: 783.99,
        overtones: BELL_OVERTONES,
        start: 0.4,
        end: 2.2,
        decay: 2.0,
        attack: 12.0,
        gain: 0.5,
    },
    // C4 mid warmth
    Voice {
        freq: 261.63,
        overtones: &[],
        start: 0.0,
        end: 2.0,
        decay: 2.2,
        attack: 8.0,
        gain: 0.2,
    },
];

const ECHOES: [Echo; 2] = [
    Echo {
        delay: 0.15,
        feedback: 0.2,
    },
    Echo {
        delay: 0.3,
        feedback: 0.1,
    },
];

/// Alert chime renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chime {
    /// Buffer length in seconds.
    pub duration_secs: f32,
}

impl Default for Chime {
    fn default() -> Self {
        Self { duration_secs: 3.0 }
    }
}

impl Chime {
    /// Number of samples `render` produces at `sample_rate`.
    pub fn len_at(&self, sample_rate: u32) -> usize {
        (self.duration_secs * sample_rate as f32) as usize
    }

    /// Render a mono buffer at `sample_rate`. Samples are clipped to [-1, 1].
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let len = self.len_at(sample_rate);
        let mut data = Vec::with_capacity(len);
        if sample_rate == 0 {
            return data;
        }
        let rate = sample_rate as f32;

        for i in 0..len {
            let t = i as f32 / rate;
            let mut sample: f32 = VOICES.iter().map(|v| v.sample(t)).sum();

            for echo in &ECHOES {
                if t > echo.delay {
                    let back = ((t - echo.delay) * rate) as usize;
                    if let Some(earlier) = data.get(back) {
                        sample += earlier * echo.feedback;
                    }
                }
            }

            data.push(sample.clamp(-1.0, 1.0));
        }
        data
    }
}
